//! External tool invocation.
//!
//! `git` and `docker` are black boxes: an argument vector goes in, an exit
//! code comes out. [`Runner`] is the seam the repository sync and the
//! deployment sequence are written against, so tests can substitute a fake.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{ExecError, Result};

/// Runs an argument vector, optionally in a working directory.
pub trait Runner {
    /// Run `argv` to completion and return its exit code.
    ///
    /// Output is passed through to the operator, never captured.
    ///
    /// # Errors
    ///
    /// Returns `ExecError` if the program cannot be started. A non-zero exit
    /// is not an error at this level.
    fn run(&mut self, argv: &[String], cwd: Option<&Path>) -> Result<i32>;
}

/// Runs real processes with inherited stdio.
#[derive(Debug, Default)]
pub struct System;

impl Runner for System {
    fn run(&mut self, argv: &[String], cwd: Option<&Path>) -> Result<i32> {
        let (program, args) = argv.split_first().ok_or(ExecError::EmptyCommand)?;
        which::which(program).map_err(|_| ExecError::NotFound(program.clone()))?;

        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|source| ExecError::Spawn {
            command: display(argv),
            source,
        })?;

        // Killed by a signal: no code, treat as failure
        Ok(status.code().unwrap_or(1))
    }
}

/// Run `argv` and turn a non-zero exit into `ExecError::Failed`.
pub fn check(runner: &mut dyn Runner, argv: &[String], cwd: Option<&Path>) -> Result<()> {
    let command = display(argv);
    match cwd {
        Some(dir) => info!(cwd = %dir.display(), "running: {}", command),
        None => info!("running: {}", command),
    }

    let code = runner.run(argv, cwd)?;
    debug!(code, "{} exited", command);

    if code != 0 {
        return Err(ExecError::Failed { command, code }.into());
    }
    Ok(())
}

/// Build an owned argument vector.
pub fn argv<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts.iter().map(|p| p.as_ref().to_string()).collect()
}

/// Shell-style rendering for logs and error messages.
pub fn display(argv: &[String]) -> String {
    argv.join(" ")
}
