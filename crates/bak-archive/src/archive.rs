//! Archive creation.
//!
//! An [`Archive`] is built once per archiving run from a root directory and a
//! list of candidate items. Construction validates the root and filters the
//! items; [`Archive::pack`] writes the gzip-compressed tar and
//! [`Archive::digest`] hashes the result.

use crate::digest::md5_file;
use crate::error::{ArchiveError, Result};
use crate::naming::{ArchiveName, DEFAULT_BASE_NAME};
use crate::paths::{is_directory, join_item, member_name, resolve_items};
use chrono::{DateTime, Local};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default compression level (6 = balanced speed/ratio).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Construction options for an [`Archive`].
#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    /// Display name the output file is built from
    pub base_name: String,

    /// Moment the archive name is stamped with
    pub created_at: DateTime<Local>,

    /// Initial packed state
    pub packed: bool,

    /// Directory the packed file is written to
    pub output_dir: PathBuf,

    /// Compression level (1-9)
    pub compression_level: u32,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            base_name: DEFAULT_BASE_NAME.to_string(),
            created_at: Local::now(),
            packed: false,
            output_dir: PathBuf::from("."),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ArchiveOptions {
    /// Creates options with the given base name, stamped now.
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// Sets the timestamp used for naming.
    pub fn with_created_at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the initial packed state.
    pub fn with_packed(mut self, packed: bool) -> Self {
        self.packed = packed;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the compression level.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.clamp(1, 9);
        self
    }
}

/// A set of validated items under a root directory, packable into a
/// `.tgz` file.
#[derive(Debug)]
pub struct Archive {
    root: PathBuf,
    items: Vec<String>,
    name: ArchiveName,
    packed: bool,
    output_dir: PathBuf,
    compression_level: u32,
}

impl Archive {
    /// Creates an unpacked archive named `base_name`, stamped now and
    /// written to the current directory.
    pub fn new<I, S>(root: impl AsRef<Path>, items: I, base_name: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_options(root, items, ArchiveOptions::new(base_name))
    }

    /// Creates an archive with explicit options.
    ///
    /// Fails if `root` is not an existing directory. Items that exist neither
    /// as given nor relative to `root` are dropped.
    pub fn with_options<I, S>(
        root: impl AsRef<Path>,
        items: I,
        options: ArchiveOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root = root.as_ref();
        if root.as_os_str().is_empty() || !is_directory(root) {
            return Err(ArchiveError::invalid_root(root));
        }

        let items = resolve_items(root, items);
        let name = ArchiveName::new(&options.base_name, options.created_at);

        tracing::debug!(
            "Archive {} rooted at {:?} with {} item(s)",
            name.base(),
            root,
            items.len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            items,
            name,
            packed: options.packed,
            output_dir: options.output_dir,
            compression_level: options.compression_level.clamp(1, 9),
        })
    }

    /// Whether the compressed archive has been written.
    pub fn is_packed(&self) -> bool {
        self.packed
    }

    /// Root directory of all targeted files and directories.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Targeted files and directories, in archive order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Trimmed base name, `Archive` when none was given.
    pub fn base_name(&self) -> &str {
        self.name.base()
    }

    /// Creation time as `YYYYMMDD-HHMMSS`.
    pub fn timestamp(&self) -> &str {
        self.name.timestamp()
    }

    /// File name with the `.tgz` (packed) or `.tar` extension.
    ///
    /// Independent of whether the archive has actually been packed.
    pub fn name(&self, packed: bool) -> String {
        self.name.file_name(packed)
    }

    /// Location of the packed file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.name(true))
    }

    /// Writes the gzip-compressed tar to [`Archive::output_path`].
    ///
    /// Items that no longer resolve under the root are skipped. A failed
    /// pack removes its partial output and leaves the packed state as it was.
    pub fn pack(&mut self) -> Result<PathBuf> {
        let output_path = self.output_path();
        tracing::info!("Packing {} item(s) into {:?}", self.items.len(), output_path);

        if let Err(e) = self.write_tar_gz(&output_path) {
            if let Err(cleanup) = fs::remove_file(&output_path) {
                tracing::debug!(
                    "Could not remove partial archive {:?}: {}",
                    output_path,
                    cleanup
                );
            }
            return Err(e);
        }

        self.packed = true;
        Ok(output_path)
    }

    /// MD5 digest of the packed file, as 32 lowercase hex characters.
    pub fn digest(&self) -> Result<String> {
        if !self.packed {
            return Err(ArchiveError::NotPacked);
        }

        let digest = md5_file(&self.output_path())?;
        tracing::info!("md5 {} {}", digest, self.name(true));
        Ok(digest)
    }

    fn write_tar_gz(&self, output_path: &Path) -> Result<()> {
        let file = File::create(output_path)?;
        let encoder = GzEncoder::new(
            BufWriter::new(file),
            Compression::new(self.compression_level),
        );
        let mut tar = tar::Builder::new(encoder);
        tar.follow_symlinks(false);

        for item in &self.items {
            let Some(full_path) = join_item(&self.root, item) else {
                tracing::debug!("Skipping item not found under root: {:?}", item);
                continue;
            };

            // Symlinks (including links to directories) are stored as links.
            let member = member_name(item);
            if fs::symlink_metadata(&full_path)?.file_type().is_dir() {
                tar.append_dir_all(&member, &full_path)?;
            } else {
                tar.append_path_with_name(&full_path, &member)?;
            }
        }

        let encoder = tar.into_inner()?;
        let mut writer = encoder.finish()?;
        writer.flush()?;

        Ok(())
    }
}
