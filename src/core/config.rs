//! Settings file management.
//!
//! Reads the optional `bullpen.toml` from the project root. Every field has a
//! default, so a missing file or a partial one is fine.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: Project,
    pub proxy: Proxy,
    pub external: External,
    pub defaults: Defaults,
}

/// Compose project and generated file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Compose project name shared by both service groups
    pub name: String,
    /// Generated environment file
    pub env_file: PathBuf,
    /// Compose file of the local service group
    pub compose_file: PathBuf,
}

/// Reverse-proxy template paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxy {
    pub template: PathBuf,
    pub output: PathBuf,
}

/// External service definition repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct External {
    /// Clone URL
    pub url: String,
    /// Local working copy directory
    pub dir: PathBuf,
    /// Sparse-checkout directory holding the compose file
    pub scope: String,
    /// Branch checked out after the sparse clone
    pub branch: String,
}

/// Prompt defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub n8n_host: String,
    pub supabase_host: String,
    pub qdrant_host: String,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: constants::PROJECT_NAME.to_string(),
            env_file: PathBuf::from(constants::ENV_FILE),
            compose_file: PathBuf::from(constants::COMPOSE_FILE),
        }
    }
}

impl Default for Proxy {
    fn default() -> Self {
        Self {
            template: PathBuf::from(constants::PROXY_TEMPLATE),
            output: PathBuf::from(constants::PROXY_OUTPUT),
        }
    }
}

impl Default for External {
    fn default() -> Self {
        Self {
            url: constants::EXTERNAL_REPO_URL.to_string(),
            dir: PathBuf::from(constants::EXTERNAL_DIR),
            scope: constants::EXTERNAL_SCOPE.to_string(),
            branch: constants::EXTERNAL_BRANCH.to_string(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            n8n_host: constants::DEFAULT_N8N_HOST.to_string(),
            supabase_host: constants::DEFAULT_SUPABASE_HOST.to_string(),
            qdrant_host: constants::DEFAULT_QDRANT_HOST.to_string(),
        }
    }
}

impl Config {
    /// Path of the settings file under `root`.
    pub fn path(root: &Path) -> PathBuf {
        root.join(constants::SETTINGS_FILE)
    }

    /// Load settings from `root`, falling back to defaults if there is no file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&contents, &path)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    /// Reject settings the deployment sequence cannot act on.
    pub fn validate(&self) -> Result<()> {
        require("project.name", &self.project.name)?;
        require_path("project.env_file", &self.project.env_file)?;
        require_path("project.compose_file", &self.project.compose_file)?;
        require_path("proxy.template", &self.proxy.template)?;
        require_path("proxy.output", &self.proxy.output)?;
        require("external.url", &self.external.url)?;
        require_path("external.dir", &self.external.dir)?;
        require("external.scope", &self.external.scope)?;
        require("external.branch", &self.external.branch)?;

        let scope = Path::new(&self.external.scope);
        if scope.is_absolute() || scope.components().any(|c| c == Component::ParentDir) {
            return Err(ConfigError::Invalid {
                field: "external.scope",
                reason: "must be a relative path inside the repository".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Directory of the external compose definition inside the working copy.
    pub fn external_compose_dir(&self) -> PathBuf {
        self.external.dir.join(&self.external.scope)
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

fn require_path(field: &'static str, value: &Path) -> Result<()> {
    require(field, &value.to_string_lossy())
}
