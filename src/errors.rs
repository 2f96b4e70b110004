use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = RenamerError> = std::result::Result<T, E>;

/// Failures from the configuration layer. Renaming itself never fails.
#[derive(Debug, Error)]
pub enum RenamerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Numeric format `{0}` has no integer placeholder")]
    InvalidFormat(String),

    #[error("Config file not found: {0}")]
    MissingConfig(PathBuf),
}
