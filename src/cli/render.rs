//! Render command - rebuild the proxy config from an existing `.env`.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::env::EnvFile;
use crate::core::render::Renderer;
use crate::error::Result;

/// Re-render the proxy config without regenerating secrets.
pub fn execute(root: &Path) -> Result<()> {
    let config = Config::load(root)?;
    let env = EnvFile::load(&root.join(&config.project.env_file))?;
    let hosts = env.hosts();

    for (name, host) in hosts.iter() {
        output::kv(name, host);
    }

    Renderer::new().render_file(
        &root.join(&config.proxy.template),
        &root.join(&config.proxy.output),
        &hosts,
    )?;
    output::success(&format!("wrote {}", output::path(&config.proxy.output)));
    Ok(())
}
