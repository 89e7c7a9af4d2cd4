//! Deployment sequence.
//!
//! Five steps, strictly in order, stopping at the first failure:
//!
//! 1. sync the external repository
//! 2. copy the generated `.env` next to the external compose file
//! 3. `docker compose down` for the shared project
//! 4. `docker compose up -d` for the external group
//! 5. `docker compose up -d` for the local group
//!
//! The local group depends on the external group's data services, hence
//! the order. Nothing is retried or rolled back.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::constants::{COMPOSE_FILE, ENV_FILE};
use crate::core::exec::{argv, check, Runner};
use crate::core::repo::{RepoSync, SyncOutcome};
use crate::error::{FsError, Result};

/// One step of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Sync,
    Propagate,
    Teardown,
    StartExternal,
    StartLocal,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Sync,
        Step::Propagate,
        Step::Teardown,
        Step::StartExternal,
        Step::StartLocal,
    ];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Sync => "syncing external repository",
            Step::Propagate => "copying environment file",
            Step::Teardown => "stopping existing containers",
            Step::StartExternal => "starting external services",
            Step::StartLocal => "starting local services",
        };
        f.write_str(label)
    }
}

/// A compose-defined group of services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceGroup {
    /// Defined by the synced repository
    External,
    /// Defined by this project
    Local,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sync: SyncOutcome,
    pub steps: Vec<Step>,
}

/// Deployment sequence for one project root.
#[derive(Debug, Clone)]
pub struct Deployment {
    root: PathBuf,
    config: Config,
}

impl Deployment {
    pub fn new(root: &Path, config: Config) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Compose file for `group`, relative to the project root.
    pub fn compose_file(&self, group: ServiceGroup) -> PathBuf {
        match group {
            ServiceGroup::External => self.config.external_compose_dir().join(COMPOSE_FILE),
            ServiceGroup::Local => self.config.project.compose_file.clone(),
        }
    }

    /// Run every step in order. `on_step` is told before each step starts.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step; later steps never run.
    pub fn run(&self, runner: &mut dyn Runner, on_step: &mut dyn FnMut(Step)) -> Result<Report> {
        let mut steps = Vec::with_capacity(Step::ALL.len());

        on_step(Step::Sync);
        let sync = RepoSync::new(&self.root, &self.config.external).sync(runner)?;
        steps.push(Step::Sync);

        on_step(Step::Propagate);
        self.propagate()?;
        steps.push(Step::Propagate);

        on_step(Step::Teardown);
        self.compose(runner, ServiceGroup::Local, &["down"])?;
        steps.push(Step::Teardown);

        on_step(Step::StartExternal);
        self.compose(runner, ServiceGroup::External, &["up", "-d"])?;
        steps.push(Step::StartExternal);

        on_step(Step::StartLocal);
        self.compose(runner, ServiceGroup::Local, &["up", "-d"])?;
        steps.push(Step::StartLocal);

        info!(project = %self.config.project.name, "deployment complete");
        Ok(Report { sync, steps })
    }

    /// Copy the generated env file into the external compose directory.
    fn propagate(&self) -> Result<()> {
        let from = self.root.join(&self.config.project.env_file);
        let to = self
            .root
            .join(self.config.external_compose_dir())
            .join(ENV_FILE);
        debug!(from = %from.display(), to = %to.display(), "copying env file");

        if !from.exists() {
            return Err(FsError::Missing(from).into());
        }
        std::fs::copy(&from, &to).map_err(|source| FsError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        Ok(())
    }

    /// `docker compose -p <project> -f <file> <action...>` in the project root.
    fn compose(&self, runner: &mut dyn Runner, group: ServiceGroup, action: &[&str]) -> Result<()> {
        let file = self.compose_file(group);
        let file = file.to_string_lossy();
        let mut args = vec![
            "docker",
            "compose",
            "-p",
            self.config.project.name.as_str(),
            "-f",
            &*file,
        ];
        args.extend_from_slice(action);
        check(runner, &argv(&args), Some(self.root.as_path()))
    }
}
