//! Server project generator.
//!
//! Bundles the primary server source with the ancillary project files for
//! its language.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::ServerGenerator;
//! use mcp_forge_core::{GeneratorConfig, ParamType, Parameter, ServerConfig, TargetLanguage, Tool};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ServerGenerator::new(GeneratorConfig::default())?;
//!
//! let config = ServerConfig {
//!     server_name: "Weather Data Provider".to_string(),
//!     description: "Forecasts".to_string(),
//!     server_type: TargetLanguage::Python,
//!     tools: vec![Tool::new(
//!         "get_weather_forecast",
//!         "Retrieves a forecast",
//!         vec![Parameter::new("location", ParamType::String, "City name")],
//!     )],
//! };
//!
//! let code = generator.generate(&config)?;
//! assert_eq!(code.primary().map(|f| f.path()), Some("server.py"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::ancillary::{self, ProjectContext};
use crate::backend;
use crate::ir::ServerModule;
use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedCode, GeneratedFile};
use mcp_forge_core::{GeneratorConfig, Result, ServerConfig, TargetLanguage};

/// Generator for complete server projects.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct ServerGenerator<'a> {
    engine: TemplateEngine<'a>,
    settings: GeneratorConfig,
}

impl ServerGenerator<'_> {
    /// Creates a generator with the given version settings.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new(settings: GeneratorConfig) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, settings })
    }

    /// Returns the version settings embedded into generated files.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorConfig {
        &self.settings
    }

    /// Generates every file of a server project.
    ///
    /// The server source is always the first file. Python projects add
    /// `requirements.txt`; TypeScript projects add `package.json` and
    /// `tsconfig.json`. Both get `README.md`, `Dockerfile`, and `install.sh`.
    ///
    /// # Errors
    ///
    /// Returns error if an ancillary template fails to render or a JSON
    /// manifest fails to serialize.
    pub fn generate(&self, config: &ServerConfig) -> Result<GeneratedCode> {
        tracing::info!(
            "Generating {} server: {}",
            config.server_type.display_name(),
            config.server_name
        );

        let backend = backend::for_language(config.server_type);
        let module = ServerModule::build(config, backend);
        let mut code = GeneratedCode::new();

        code.add_file(GeneratedFile::new(
            backend.source_file,
            (backend.print_module)(&module, &self.settings),
        ));
        tracing::debug!("Generated {}", backend.source_file);

        let context = ProjectContext::new(&module, backend, &self.settings);

        match config.server_type {
            TargetLanguage::Python => {
                push_file(
                    &mut code,
                    "requirements.txt",
                    ancillary::render_requirements(&self.engine, &context)?,
                );
            }
            TargetLanguage::TypeScript => {
                push_file(
                    &mut code,
                    "package.json",
                    ancillary::package_json(&config.server_name, &config.description, &self.settings)?,
                );
                push_file(
                    &mut code,
                    "tsconfig.json",
                    ancillary::tsconfig_json(backend.source_file)?,
                );
            }
        }

        push_file(&mut code, "README.md", ancillary::render_readme(&self.engine, &context)?);
        push_file(
            &mut code,
            "Dockerfile",
            ancillary::render_dockerfile(&self.engine, &context)?,
        );
        push_file(
            &mut code,
            "install.sh",
            ancillary::render_install_script(&self.engine, &context)?,
        );

        tracing::info!(
            "Successfully generated {} files for {}",
            code.file_count(),
            config.server_name
        );

        Ok(code)
    }

    /// Generates only the primary server source.
    #[must_use]
    pub fn generate_source(&self, config: &ServerConfig) -> String {
        crate::emitter::emit_server(config, &self.settings)
    }
}

fn push_file(code: &mut GeneratedCode, path: &str, content: String) {
    tracing::debug!("Generated {path}");
    code.add_file(GeneratedFile::new(path, content));
}
