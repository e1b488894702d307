//! Initialize command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use branchline_config::{CONFIG_FILE_NAME, Config};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InitArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }

    let content = Config::default()
        .to_toml()
        .context("failed to serialize default configuration")?;
    fs::write(path, content).with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;

    info!(path = CONFIG_FILE_NAME, "created configuration");
    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}
