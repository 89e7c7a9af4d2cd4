//! External repository sync.
//!
//! Keeps a sparse working copy of the service-definition repository. The
//! first sync does a blobless, no-checkout clone, restricts the sparse
//! scope to one directory, then checks out the branch. Later syncs pull.
//! Both paths are safe to repeat; a failed step leaves the working copy for
//! the next sync to finish or redo.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::External;
use crate::core::exec::{argv, check, Runner};
use crate::error::Result;

/// Whether a local working copy exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    Absent,
    Present,
}

/// What a sync did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Cloned,
    Updated,
}

/// Sparse working copy of one repository directory.
#[derive(Debug, Clone)]
pub struct RepoSync {
    url: String,
    root: PathBuf,
    dir: PathBuf,
    scope: String,
    branch: String,
}

impl RepoSync {
    /// `root` is the directory the working copy lives under.
    pub fn new(root: &Path, external: &External) -> Self {
        Self {
            url: external.url.clone(),
            root: root.to_path_buf(),
            dir: external.dir.clone(),
            scope: external.scope.clone(),
            branch: external.branch.clone(),
        }
    }

    /// Absolute location of the working copy.
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.dir)
    }

    pub fn state(&self) -> RepoState {
        if self.path().exists() {
            RepoState::Present
        } else {
            RepoState::Absent
        }
    }

    /// Clone if absent, pull if present.
    ///
    /// # Errors
    ///
    /// Returns the first failing git step. No cleanup is attempted.
    pub fn sync(&self, runner: &mut dyn Runner) -> Result<SyncOutcome> {
        match self.state() {
            RepoState::Absent => {
                info!(url = %self.url, scope = %self.scope, "cloning external repository");
                self.clone_sparse(runner)?;
                Ok(SyncOutcome::Cloned)
            }
            RepoState::Present => {
                info!(path = %self.path().display(), "updating external repository");
                self.update(runner)?;
                Ok(SyncOutcome::Updated)
            }
        }
    }

    fn clone_sparse(&self, runner: &mut dyn Runner) -> Result<()> {
        let target = self.dir.to_string_lossy();
        check(
            runner,
            &argv(&[
                "git",
                "clone",
                "--filter=blob:none",
                "--no-checkout",
                self.url.as_str(),
                &*target,
            ]),
            Some(self.root.as_path()),
        )?;

        let repo = self.path();
        check(
            runner,
            &argv(&["git", "sparse-checkout", "init", "--cone"]),
            Some(repo.as_path()),
        )?;
        check(
            runner,
            &argv(&["git", "sparse-checkout", "set", self.scope.as_str()]),
            Some(repo.as_path()),
        )?;
        check(
            runner,
            &argv(&["git", "checkout", self.branch.as_str()]),
            Some(repo.as_path()),
        )
    }

    fn update(&self, runner: &mut dyn Runner) -> Result<()> {
        check(runner, &argv(&["git", "pull"]), Some(self.path().as_path()))
    }
}
