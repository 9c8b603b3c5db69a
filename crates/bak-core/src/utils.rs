//! Shared utility functions for bak crates

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that an
/// overridden HOME (containers or tests) is respected.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir().ok_or(Error::HomeDir)
}
