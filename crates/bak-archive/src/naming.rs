//! Archive file naming.
//!
//! Names have the form `{base}-{YYYYMMDD-HHMMSS}{ext}` where `ext` is
//! `.tgz` for the packed (compressed) form and `.tar` otherwise.

use chrono::{DateTime, Local};

/// Base name used when none (or a blank one) is supplied.
pub const DEFAULT_BASE_NAME: &str = "Archive";

/// chrono format of the timestamp segment.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Extension of the compressed archive.
pub const PACKED_EXTENSION: &str = ".tgz";

/// Extension of the uncompressed archive.
pub const UNPACKED_EXTENSION: &str = ".tar";

/// Trim `name`, falling back to [`DEFAULT_BASE_NAME`] when it is blank.
pub fn normalize_base_name(name: &str) -> String {
    match name.trim() {
        "" => DEFAULT_BASE_NAME.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Base name and timestamp fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    base: String,
    timestamp: String,
}

impl ArchiveName {
    /// Creates a name from `base_name` stamped with `created_at`.
    pub fn new(base_name: &str, created_at: DateTime<Local>) -> Self {
        Self {
            base: normalize_base_name(base_name),
            timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Creates a name stamped with the current local time.
    pub fn now(base_name: &str) -> Self {
        Self::new(base_name, Local::now())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// File name with the packed or unpacked extension.
    pub fn file_name(&self, packed: bool) -> String {
        let extension = if packed {
            PACKED_EXTENSION
        } else {
            UNPACKED_EXTENSION
        };
        format!("{}-{}{}", self.base, self.timestamp, extension)
    }
}
