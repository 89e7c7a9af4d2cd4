//! Up command - sync the external definition and start every service.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::deploy::Deployment;
use crate::core::exec::System;
use crate::core::repo::SyncOutcome;
use crate::error::Result;

/// Run the deployment sequence with real `git` and `docker`.
pub fn execute(root: &Path) -> Result<()> {
    let config = Config::load(root)?;
    let project = config.project.name.clone();

    let report = Deployment::new(root, config).run(&mut System, &mut |step| output::step(step))?;

    match report.sync {
        SyncOutcome::Cloned => output::dimmed("external repository cloned"),
        SyncOutcome::Updated => output::dimmed("external repository updated"),
    }
    output::success(&format!("project {} is up", project));
    Ok(())
}
