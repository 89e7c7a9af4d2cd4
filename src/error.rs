//! Error types.
//!
//! Each failure domain has its own enum; [`Error`] wraps them so callers can
//! match on the kind while `?` keeps propagation cheap.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The operator cancelled a prompt. Not a failure: exits with status 0.
    #[error("interrupted by user")]
    Interrupted,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// `bullpen.toml` loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// External tool invocation errors.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("no command specified")]
    EmptyCommand,

    #[error("{0} not found on PATH")]
    NotFound(String),

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    Failed { command: String, code: i32 },
}

/// Reverse-proxy template errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("invalid template {name}: {reason}")]
    Syntax { name: String, reason: String },

    #[error("failed to render {name}: {reason}")]
    Render { name: String, reason: String },
}

/// Filesystem errors, always carrying the offending path.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} does not exist")]
    Missing(PathBuf),
}

/// Interactive input errors other than cancellation.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Terminal(String),
}

impl FsError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
