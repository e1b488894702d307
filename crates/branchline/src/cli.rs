//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Turn git history into a branch-annotated commit timeline.
#[derive(Debug, Parser)]
#[command(name = "branchline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the commit timeline (default)
    Generate(commands::generate::GenerateArgs),

    /// Write a default branchline.toml
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Generate(args)) => commands::generate::run(args),
            Some(Commands::Init(args)) => commands::init::run(args),
            None => commands::generate::run(commands::generate::GenerateArgs::default()),
        }
    }
}
