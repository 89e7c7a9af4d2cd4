//! Test support utilities for bullpen integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated project directory.
///
/// Child processes use `.current_dir()`, so tests can run in parallel.
pub struct Test {
    /// Temporary project root
    pub dir: TempDir,
}

impl Test {
    /// Create an empty project directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project with the proxy template and test hostnames configured.
    pub fn project() -> Self {
        let t = Self::new();
        t.write("nginx/nginx.conf.j2", PROXY_TEMPLATE);
        t.write("bullpen.toml", TEST_SETTINGS);
        t
    }

    /// Absolute path of a file inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file inside the project, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(path, contents).expect("failed to write file");
    }

    /// Read a file inside the project.
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("failed to read file")
    }
}
