//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{ArgGroup, Parser};

/// Archives a list of files and compresses them.
#[derive(Parser, Debug)]
#[command(name = "bak")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["use_config", "create"])))]
pub struct Cli {
    /// Use a configuration file
    #[arg(long = "use")]
    pub use_config: bool,

    /// Create an example configuration file
    #[arg(long)]
    pub create: bool,

    /// Configuration file containing items to archive
    pub config: Utf8PathBuf,

    /// Disables output
    #[arg(short, long)]
    pub silent: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Base name of the archive file
    #[arg(short, long, default_value = "Archive")]
    pub name: String,

    /// Directory the archive is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: Utf8PathBuf,

    /// Compression level (1-9)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(1..=9))]
    pub compression: u32,
}

/// What to do with the configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Use,
    Create,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.create {
            Mode::Create
        } else {
            Mode::Use
        }
    }
}
