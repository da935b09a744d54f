use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of a form session: reading profile records and
/// configuration. Editing and submitting never fail.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown field name '{0}'")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, FormError>;
