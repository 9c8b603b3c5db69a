//! Error types for archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`ArchiveError`].
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors raised while building or hashing an archive.
///
/// Items that fail validation are not errors; they are dropped.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Root directory missing or not a directory
    #[error("'root directory' provided is not valid: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// Digest requested before the archive was written
    #[error("Archive needs to be packed before generating md5sum.")]
    NotPacked,

    /// IO error while packing or hashing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Create an invalid root error
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot { path: path.into() }
    }

    /// Whether this error stems from bad configuration input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidRoot { .. })
    }

    /// Whether this error is an operation sequencing error.
    pub fn is_state(&self) -> bool {
        matches!(self, Self::NotPacked)
    }
}
