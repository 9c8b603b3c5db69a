//! Command implementations

pub mod archive;
pub mod create;
