//! Error types for bak-core

use thiserror::Error;

/// Result type alias using bak-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors for bak
///
/// Every variant describes a problem with creating or loading the
/// configuration file, so all of them are surfaced to the user as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// Refused to overwrite an existing configuration file
    #[error("File already exists: {path}")]
    ConfigExists { path: String },

    /// Configuration file missing or not a regular file
    #[error("Configuration provided either does not exist or it is not a file: {path}")]
    ConfigNotFound { path: String },

    /// Configuration file exists but could not be read
    #[error("Could not load '{path}': {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be written
    #[error("Could not create '{path}': {source}")]
    ConfigCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDir,
}

impl Error {
    /// Create a config exists error
    pub fn config_exists(path: impl Into<String>) -> Self {
        Self::ConfigExists { path: path.into() }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create a config load error
    pub fn config_load(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            source,
        }
    }

    /// Create a config create error
    pub fn config_create(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ConfigCreate {
            path: path.into(),
            source,
        }
    }
}
