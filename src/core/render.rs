//! Reverse-proxy config rendering.
//!
//! Substitutes `{{ NAME }}` placeholders with entries of a [`HostnameMap`].
//! Strict mode is on: a placeholder with no matching host is an error, never
//! an empty string.

use std::path::Path;

use handlebars::{Handlebars, RenderErrorReason, Template};
use tracing::{debug, info};

use crate::core::hosts::HostnameMap;
use crate::error::{FsError, Result, TemplateError};

const TEMPLATE_NAME: &str = "proxy";

/// Strict handlebars renderer with HTML escaping off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    fn registry() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    /// Render `template` against `hosts`.
    ///
    /// `name` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Syntax` for a malformed template and
    /// `TemplateError::Render` if a placeholder has no hostname.
    pub fn render(&self, name: &str, template: &str, hosts: &HostnameMap) -> Result<String> {
        let compiled = Template::compile(template).map_err(|e| TemplateError::Syntax {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut registry = Self::registry();
        registry.register_template(TEMPLATE_NAME, compiled);

        registry.render(TEMPLATE_NAME, hosts).map_err(|e| {
            let reason = match e.reason() {
                RenderErrorReason::MissingVariable(Some(var)) => {
                    format!("no hostname for {}", var)
                }
                _ => e.to_string(),
            };
            TemplateError::Render {
                name: name.to_string(),
                reason,
            }
            .into()
        })
    }

    /// Render the template file at `template_path` into `output_path`.
    ///
    /// The output is only written once rendering has succeeded.
    pub fn render_file(
        &self,
        template_path: &Path,
        output_path: &Path,
        hosts: &HostnameMap,
    ) -> Result<()> {
        debug!(template = %template_path.display(), "rendering proxy config");
        if !template_path.exists() {
            return Err(FsError::Missing(template_path.to_path_buf()).into());
        }
        let template = std::fs::read_to_string(template_path)
            .map_err(|e| FsError::read(template_path, e))?;

        let name = template_path.display().to_string();
        let rendered = self.render(&name, &template, hosts)?;

        std::fs::write(output_path, rendered).map_err(|e| FsError::write(output_path, e))?;
        info!(output = %output_path.display(), hosts = hosts.len(), "proxy config written");
        Ok(())
    }
}
