//! Generate command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use branchline_config::{Config, load_config, load_or_default};
use branchline_core::{Timeline, write_report};
use branchline_git::{CapturedLog, GitLog};

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Repository to read history from
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Read captured `git log` output from a file instead of running git
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (default: commit-timeline.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the timeline instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Configuration file (default: branchline.toml in the current directory or a parent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            repo: PathBuf::from("."),
            input: None,
            output: None,
            stdout: false,
            config: None,
        }
    }
}

fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            let current_dir = std::env::current_dir().context("failed to read current directory")?;
            load_or_default(current_dir).context("failed to load configuration")
        }
    }
}

/// Runs the generate command.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = resolve_config(args.config.as_ref())?;
    let timeline = Timeline::from_config(&config);

    let report = if let Some(ref input) = args.input {
        info!(input = %input.display(), "using captured log");
        timeline.render(&CapturedLog::new(input))
    } else {
        let source = GitLog::new(&args.repo).with_separator(config.log.separator.as_str());
        timeline.render(&source)
    };

    if args.stdout {
        println!("{report}");
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.file));
    write_report(&output, &report).context("failed to write timeline")?;

    println!("Timeline written to {}", output.display());
    Ok(())
}
