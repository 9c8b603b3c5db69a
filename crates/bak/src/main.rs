//! bak - archive a configured list of files and directories
//!
//! Either creates an example JSON configuration (`--create`) or archives the
//! items a configuration names into a timestamped `.tgz` (`--use`).

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use bak_archive::ArchiveError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Mode};
use output::Output;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.silent);

    let out = Output::new(cli.silent);
    let result = match cli.mode() {
        Mode::Use => commands::archive::run(&cli, &out),
        Mode::Create => commands::create::run(&cli, &out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            out.error(&describe_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// Configuration problems are shown as-is, anything else is flagged as
/// unexpected.
fn describe_error(err: &anyhow::Error) -> String {
    if is_configuration_error(err) {
        format!("{err}")
    } else {
        format!(
            "Unknown error occurred while loading or creating a configuration file: {err}"
        )
    }
}

fn is_configuration_error(err: &anyhow::Error) -> bool {
    if err.downcast_ref::<bak_core::Error>().is_some() {
        return true;
    }
    err.downcast_ref::<ArchiveError>()
        .is_some_and(ArchiveError::is_configuration)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, silent: bool) {
    let filter = if silent {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
