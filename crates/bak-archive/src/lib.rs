//! bak archive library
//!
//! Packs a root directory's selected files and directories into a
//! gzip-compressed tar and reports the MD5 digest of the result.
//!
//! # Examples
//!
//! ```no_run
//! use bak_archive::Archive;
//!
//! fn main() -> bak_archive::Result<()> {
//!     let mut archive = Archive::new("/home/user", ["pictures", "notes.txt"], "Home")?;
//!     let path = archive.pack()?;
//!     println!("{} {}", archive.digest()?, path.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod digest;
pub mod error;
pub mod naming;
pub mod paths;

// Re-export commonly used types
pub use archive::{Archive, ArchiveOptions, DEFAULT_COMPRESSION_LEVEL};
pub use digest::{md5_file, DIGEST_CHUNK_SIZE};
pub use error::{ArchiveError, Result};
pub use naming::{ArchiveName, DEFAULT_BASE_NAME};
pub use paths::{is_directory, is_file, is_valid_item, join_item, resolve_items};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
