//! Reading a generated `.env` file back.
//!
//! Used to rebuild the hostname map when the proxy config is re-rendered
//! without regenerating secrets.

use std::path::Path;

use crate::core::constants::{N8N_HOSTNAME, QDRANT_HOSTNAME, SUPABASE_HOSTNAME};
use crate::core::hosts::HostnameMap;
use crate::error::{FsError, Result};

/// `.env` keys each hostname is recovered from, in lookup order.
const HOST_SOURCES: &[(&str, &[&str])] = &[
    (N8N_HOSTNAME, &["N8N_HOST", "WEBHOOK_URL"]),
    (SUPABASE_HOSTNAME, &["SUPABASE_PUBLIC_URL"]),
    (QDRANT_HOSTNAME, &["QDRANT_PUBLIC_URL"]),
];

/// Parsed key/value pairs of an env file, in file order.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Parse an env file from disk.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Missing` if the file does not exist, or
    /// `FsError::Read` if it cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FsError::Missing(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| FsError::read(path, e))?;
        Ok(Self::parse(&contents))
    }

    /// Skips blank lines and `#` comments; strips one layer of matching quotes.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
            .collect();
        Self { entries }
    }

    /// Value of the last occurrence of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Hostnames recoverable from this file. Keys with no source are absent.
    pub fn hosts(&self) -> HostnameMap {
        let mut hosts = HostnameMap::new();
        for (name, sources) in HOST_SOURCES {
            if let Some(value) = sources.iter().find_map(|key| self.get(key)) {
                hosts.insert(*name, value);
            }
        }
        hosts
    }
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}
