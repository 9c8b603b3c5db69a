//! # bak-core
//!
//! Core library for the bak CLI providing:
//! - Configuration file parsing and creation (JSON)
//! - Error types shared by the configuration layer
//! - Home directory resolution for the default configuration template

pub mod config;
pub mod error;
pub mod utils;

pub use config::BackupConfig;
pub use error::{Error, Result};
pub use utils::get_home_dir;
