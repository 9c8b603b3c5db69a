//! `--use`: archive the items named by a configuration file

use anyhow::Result;
use bak_archive::{Archive, ArchiveOptions};
use bak_core::BackupConfig;

use crate::cli::Cli;
use crate::output::Output;

pub fn run(cli: &Cli, out: &Output) -> Result<()> {
    let config = BackupConfig::load(&cli.config)?;
    tracing::debug!("Using configuration {}", cli.config);

    let options = ArchiveOptions::new(cli.name.as_str())
        .with_output_dir(cli.output_dir.as_std_path())
        .with_compression_level(cli.compression);
    let mut archive = Archive::with_options(&config.root, config.files, options)?;

    if archive.items().is_empty() {
        out.info("No valid items found, creating an empty archive");
    }

    let path = archive.pack()?;
    let digest = archive.digest()?;

    out.success(&format!("Created '{}'.", path.display()));
    out.kv("Items", &archive.items().len().to_string());
    out.kv("MD5", &digest);

    Ok(())
}
