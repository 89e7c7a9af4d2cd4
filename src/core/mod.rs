//! Core library components.
//!
//! Secret generation, the `.env` document, prompting, template rendering,
//! and the subprocess-driven repository sync and deployment sequence.

pub mod config;
pub mod constants;
pub mod deploy;
pub mod document;
pub mod env;
pub mod exec;
pub mod generator;
pub mod hosts;
pub mod prompt;
pub mod render;
pub mod repo;
pub mod secret;
