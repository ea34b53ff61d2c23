//! Template engine for ancillary files using Handlebars.
//!
//! Source files are printed from the IR; Handlebars only renders the
//! surrounding project files (README, Dockerfile, install script,
//! requirements). HTML escaping is disabled since none of the outputs are
//! HTML.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let rendered = engine
//!     .render("requirements", &json!({
//!         "python_sdk_version": "1.2.0",
//!         "pydantic_version_spec": ">=1.10,<2",
//!     }))
//!     .unwrap();
//! assert!(rendered.contains("mcp==1.2.0"));
//! ```

use handlebars::Handlebars;
use mcp_forge_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const BUILTIN_TEMPLATES: [(&str, &str); 6] = [
    ("readme", include_str!("../templates/README.md.hbs")),
    ("dockerfile/python", include_str!("../templates/python.Dockerfile.hbs")),
    (
        "dockerfile/typescript",
        include_str!("../templates/typescript.Dockerfile.hbs"),
    ),
    ("install/python", include_str!("../templates/python.install.sh.hbs")),
    (
        "install/typescript",
        include_str!("../templates/typescript.install.sh.hbs"),
    ),
    ("requirements", include_str!("../templates/requirements.txt.hbs")),
];

/// Template engine for ancillary project files.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            Self::register(&mut handlebars, name, source)?;
        }

        Ok(Self { handlebars })
    }

    fn register(handlebars: &mut Handlebars<'a>, name: &str, source: &str) -> Result<()> {
        handlebars
            .register_template_string(name, source)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("failed to register template: {e}"),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template is not registered,
    /// the context is missing a referenced field, or rendering fails.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template with that name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_forge_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "# {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        Self::register(&mut self.handlebars, name, template)
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
