//! Handlebars-based template renderer.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Strict mode ensures that any `{{variable}}` referenced in a template must be
//! present in the data context — otherwise rendering returns an error. This is
//! what keeps a generated project file from shipping with a silently blank
//! placeholder.
//!
//! The passthrough fields of [`crate::context::TemplateContext`] make nested
//! escaping work: a template's `${{secrets.GITHUB_TOKEN}}` is a Handlebars
//! expression whose *value* is the literal Actions expression, so the rendered
//! workflow keeps it live. The renderer never interprets the substituted text.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Strict-mode template renderer for generating project files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    ///
    /// Strict mode means `{{missing_var}}` in a template will return an error
    /// instead of an empty string, catching a catalog/context mismatch at
    /// scaffold time rather than leaving broken output in the project.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    ///
    /// `name` only labels errors; templates are one-shot strings, never
    /// registered with the engine.
    pub fn render<T: Serialize>(&self, name: &str, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
