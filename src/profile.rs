//! Profile records used to pre-populate a form session.
//!
//! Records come from JSON or YAML and are read leniently: a field with the
//! wrong shape is treated as missing rather than failing the whole record.

use crate::error::{FormError, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_phone")]
    pub phone: Option<PhoneValue>,
}

/// A phone number as stored in a record: flat digits or pre-split segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneValue {
    Flat(String),
    Segments(Vec<String>),
}

impl ProfileRecord {
    /// The default user shown by the demo.
    pub fn sample() -> Self {
        Self {
            first_name: Some("Default".to_string()),
            last_name: Some("Default".to_string()),
            email: Some("default@default.com".to_string()),
            city: Some("Hobbiton".to_string()),
            phone: Some(PhoneValue::Flat("1234567".to_string())),
        }
    }

    /// Read a record from disk. `.json` files are parsed as JSON, anything
    /// else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&raw)
        } else {
            Self::from_yaml(&raw)
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPhone {
    Flat(String),
    Segments(Vec<String>),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawText::deserialize(deserializer)? {
        RawText::Text(value) => Some(value),
        RawText::Other(_) => None,
    })
}

fn lenient_phone<'de, D>(deserializer: D) -> std::result::Result<Option<PhoneValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPhone::deserialize(deserializer)? {
        RawPhone::Flat(value) => Some(PhoneValue::Flat(value)),
        RawPhone::Segments(parts) => Some(PhoneValue::Segments(parts)),
        RawPhone::Other(_) => None,
    })
}
