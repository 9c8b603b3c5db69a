//! `--create`: write an example configuration file

use anyhow::Result;
use bak_core::BackupConfig;

use crate::cli::Cli;
use crate::output::Output;

pub fn run(cli: &Cli, out: &Output) -> Result<()> {
    let config = BackupConfig::create(&cli.config)?;

    out.success(&format!("Created '{}'.", cli.config));
    out.kv("Root", &config.root);
    out.kv("Files", &config.files.join(", "));

    Ok(())
}
