//! Bullpen - generate secrets and bring up a self-hosted service stack.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bullpen::cli::output;
use bullpen::cli::{execute, Cli};
use bullpen::error::{Error, ExecError, FsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("BULLPEN_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("bullpen=debug")
        } else {
            EnvFilter::new("bullpen=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    match execute(cli.command, cli.dir) {
        Ok(()) => {}
        Err(Error::Interrupted) => {
            output::interrupted();
            std::process::exit(0);
        }
        Err(e) => {
            let suggestion = match &e {
                Error::Fs(FsError::Missing(path)) if path.ends_with(".env") => {
                    Some("run: bullpen init")
                }
                Error::Exec(ExecError::NotFound(_)) => Some("install git and docker, then retry"),
                Error::Exec(ExecError::Failed { .. }) => {
                    Some("fix the failing command and run bullpen up again")
                }
                Error::Template(_) => Some("check the placeholders in the proxy template"),
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
