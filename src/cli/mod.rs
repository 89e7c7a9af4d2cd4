//! Command-line interface.

pub mod completions;
pub mod init;
pub mod interrupt;
pub mod output;
pub mod render;
pub mod up;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bullpen - warm up a self-hosted workflow, backend and vector store stack.
#[derive(Parser)]
#[command(
    name = "bullpen",
    about = "Generate secrets and bring up a self-hosted service stack",
    version,
    after_help = "Warm up. Then pitch."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate .env secrets and the reverse-proxy config
    Init {
        /// Only write .env; skip the reverse-proxy config
        #[arg(long)]
        no_render: bool,
    },

    /// Re-render the reverse-proxy config from an existing .env
    Render,

    /// Sync the external service definition and start all services
    Up,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command against a project root.
pub fn execute(command: Command, dir: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let root = dir.unwrap_or_else(|| PathBuf::from("."));

    match command {
        Init { no_render } => init::execute(&root, no_render),
        Render => render::execute(&root),
        Up => up::execute(&root),
        Completions { shell } => completions::execute(shell),
    }
}
