//! Hostname map handed to the proxy template.

use std::collections::BTreeMap;

use serde::Serialize;

/// Placeholder name to bare hostname. Later inserts replace earlier ones.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HostnameMap(BTreeMap<String, String>);

impl HostnameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `host` under `key`, normalized to a bare host.
    pub fn insert(&mut self, key: impl Into<String>, host: &str) {
        self.0.insert(key.into(), normalize_host(host));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Strip a leading `http://` or `https://`, surrounding whitespace, and
/// trailing slashes.
///
/// ```
/// use bullpen::core::hosts::normalize_host;
/// assert_eq!(normalize_host("https://n8n.example.com/"), "n8n.example.com");
/// ```
pub fn normalize_host(raw: &str) -> String {
    let host = raw.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

/// Fully qualified URL form stored in the `.env` file.
pub fn https_url(host: &str) -> String {
    format!("https://{}", normalize_host(host))
}
