//! Configuration file loading and creation
//!
//! The configuration file is JSON naming a root directory and the items
//! (files or directories, usually relative to the root) to archive:
//!
//! ```json
//! {
//!     "root": "/home/username",
//!     "files": [
//!         "pictures",
//!         "videos/funny_vid.mp4"
//!     ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::utils::get_home_dir;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Example items written into a freshly created configuration
pub const EXAMPLE_FILES: &[&str] = &["pictures", "videos/funny_vid.mp4"];

/// Parsed backup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Root directory all items are resolved against
    pub root: String,

    /// Files and directories to archive
    pub files: Vec<String>,
}

impl BackupConfig {
    /// Build the example configuration rooted at `root`
    pub fn template(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            files: EXAMPLE_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Create an example configuration file at `path`, rooted at the
    /// user's home directory.
    ///
    /// Never overwrites an existing file.
    pub fn create(path: &Utf8Path) -> Result<Self> {
        let home = get_home_dir()?;
        let config = Self::template(home.to_string_lossy());
        config.save_new(path)?;
        Ok(config)
    }

    /// Load and parse the configuration file at `path`
    pub fn load(path: &Utf8Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::config_not_found(path.as_str()));
        }

        let content =
            fs::read_to_string(path).map_err(|e| Error::config_load(path.as_str(), e))?;
        let config: BackupConfig = serde_json::from_str(&content)?;

        tracing::debug!(
            "Loaded {} with root {:?} and {} item(s)",
            path,
            config.root,
            config.files.len()
        );

        Ok(config)
    }

    /// Write this configuration to a new file at `path`
    pub fn save_new(&self, path: &Utf8Path) -> Result<()> {
        if path.is_file() {
            return Err(Error::config_exists(path.as_str()));
        }

        let json = self.to_json()?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::config_exists(path.as_str()),
                _ => Error::config_create(path.as_str(), e),
            })?;
        file.write_all(json.as_bytes())
            .map_err(|e| Error::config_create(path.as_str(), e))?;

        Ok(())
    }

    /// Serialize to JSON with 4-space indentation
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
