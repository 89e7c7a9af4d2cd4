//! The generated `.env` document.
//!
//! An append-only sequence of `KEY=VALUE` entries and verbatim text blocks.
//! Downstream tooling reads the file top to bottom, so insertion order is
//! the output order and duplicate keys are kept as written.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroize;

use crate::error::{FsError, Result};

/// One item of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Pair { key: String, value: String },
    Block(String),
}

/// Ordered configuration accumulator for one generation run.
#[derive(Debug, Default)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `KEY=VALUE` line.
    pub fn append_entry(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry::Pair {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Append text emitted exactly as given.
    pub fn append_block(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Block(text.into()));
    }

    /// Append the banner that opens a subsystem section.
    pub fn section(&mut self, title: &str) {
        self.append_block(format!(
            "\n######\n# These are {} specific environment variables.\n######\n",
            title
        ));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last value appended for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            Entry::Pair { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Concatenate every entry in insertion order.
    pub fn render(&self) -> Vec<u8> {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Pair { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                    out.push('\n');
                }
                Entry::Block(text) => out.push_str(text),
            }
        }
        out.into_bytes()
    }

    /// Write the rendered document to `path`, readable by the owner only.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Write` naming `path` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), entries = self.entries.len(), "writing document");
        let mut content = self.render();
        let written = write_private(path, &content);
        content.zeroize();
        written.map_err(|e| FsError::write(path, e).into())
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        for entry in &mut self.entries {
            match entry {
                Entry::Pair { value, .. } => value.zeroize(),
                Entry::Block(text) => text.zeroize(),
            }
        }
    }
}

fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(content)?;
        file.flush()?;

        // mode() only applies on creation
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}
