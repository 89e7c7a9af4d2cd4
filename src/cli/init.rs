//! Init command - generate `.env` and the proxy config.

use std::path::Path;

use tracing::info;

use crate::cli::{interrupt, output};
use crate::core::config::Config;
use crate::core::generator::Generator;
use crate::core::prompt;
use crate::core::render::Renderer;
use crate::error::Result;

/// Generate secrets, write the env file, then render the proxy config.
///
/// The env file is only written after every prompt has been answered.
pub fn execute(root: &Path, no_render: bool) -> Result<()> {
    interrupt::install()?;
    let config = Config::load(root)?;

    let mut prompt = prompt::from_stdin();
    let generated = {
        let _prompting = interrupt::Prompting::start();
        Generator::new(prompt.as_mut(), &config.defaults).generate()?
    };

    let env_path = root.join(&config.project.env_file);
    if env_path.exists() {
        output::warn(&format!("overwriting {}", output::path(&config.project.env_file)));
    }
    generated.document.save(&env_path)?;
    info!(path = %env_path.display(), "env file written");
    output::success(&format!("wrote {}", output::path(&config.project.env_file)));

    if no_render {
        return Ok(());
    }

    Renderer::new().render_file(
        &root.join(&config.proxy.template),
        &root.join(&config.proxy.output),
        &generated.hosts,
    )?;
    output::success(&format!("wrote {}", output::path(&config.proxy.output)));
    output::hint("run: bullpen up");

    Ok(())
}
