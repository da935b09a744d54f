use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub text_navigation: TextNavigation,
    pub show_placeholders: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            text_navigation: TextNavigation::default(),
            show_placeholders: true,
        }
    }
}

/// Automatic focus movement across the four text fields.
///
/// Off by default. When on, clearing a field moves focus to the previous
/// one; reaching `max_len` moves it forward. With `max_len` unset the
/// forward move never fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextNavigation {
    pub enabled: bool,
    pub max_len: Option<usize>,
}

impl FormConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
