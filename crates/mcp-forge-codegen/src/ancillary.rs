//! Ancillary project files that accompany the server source.
//!
//! Text files are rendered through the [`TemplateEngine`]; JSON manifests
//! are built with `serde_json` so string escaping is always correct.

use crate::backend::LanguageBackend;
use crate::escape::single_line;
use crate::identifier::to_kebab_case;
use crate::ir::ServerModule;
use crate::template_engine::TemplateEngine;
use mcp_forge_core::{Error, GeneratorConfig, Result, TargetLanguage};
use serde::Serialize;
use serde_json::json;

/// Context shared by every ancillary template.
///
/// All fields are always present so strict-mode rendering never trips over
/// a missing key.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Server display name, flattened to one line
    pub server_name: String,
    /// Kebab-case package/image name
    pub slug: String,
    /// Server description, flattened to one line
    pub description: String,
    /// Human-facing language name
    pub language_name: &'static str,
    /// `true` for Python projects
    pub is_python: bool,
    /// Primary source file name
    pub source_file: &'static str,
    /// MCP protocol version
    pub protocol_version: String,
    /// SDK package name
    pub sdk_package: &'static str,
    /// SDK version for the target language
    pub sdk_version: String,
    /// Python SDK version
    pub python_sdk_version: String,
    /// Pydantic requirement specifier
    pub pydantic_version_spec: String,
    /// Python runtime version
    pub python_version: String,
    /// Node.js runtime version
    pub node_version: String,
    /// `true` if the server defines tools
    pub has_tools: bool,
    /// Tool summaries in declaration order
    pub tools: Vec<ToolSummary>,
}

/// README entry for one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    /// Normalized tool identifier
    pub name: String,
    /// Tool description, flattened to one line
    pub description: String,
    /// `true` if the tool takes parameters
    pub has_params: bool,
    /// Parameter rows
    pub params: Vec<ParamSummary>,
}

/// README table row for one parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSummary {
    /// Normalized parameter identifier
    pub name: String,
    /// Target-language type
    #[serde(rename = "type")]
    pub type_name: String,
    /// Description, safe inside a Markdown table cell
    pub description: String,
}

impl ProjectContext {
    /// Builds the template context for a server module.
    #[must_use]
    pub fn new(module: &ServerModule, backend: &LanguageBackend, config: &GeneratorConfig) -> Self {
        let is_python = backend.language == TargetLanguage::Python;
        let (sdk_package, sdk_version) = if is_python {
            ("mcp", config.python_sdk_version.clone())
        } else {
            ("@modelcontextprotocol/sdk", config.typescript_sdk_version.clone())
        };

        let tools: Vec<ToolSummary> = module
            .tools
            .iter()
            .map(|tool| ToolSummary {
                name: tool.name.clone(),
                description: single_line(&tool.description),
                has_params: tool.has_params(),
                params: tool
                    .params
                    .iter()
                    .map(|param| ParamSummary {
                        name: param.name.clone(),
                        type_name: table_cell(&param.type_token),
                        description: table_cell(&param.description),
                    })
                    .collect(),
            })
            .collect();

        Self {
            server_name: single_line(&module.server_name),
            slug: to_kebab_case(&module.server_name),
            description: single_line(&module.description),
            language_name: backend.language.display_name(),
            is_python,
            source_file: backend.source_file,
            protocol_version: config.protocol_version.clone(),
            sdk_package,
            sdk_version,
            python_sdk_version: config.python_sdk_version.clone(),
            pydantic_version_spec: config.pydantic_version_spec.clone(),
            python_version: config.python_version.clone(),
            node_version: config.node_version.clone(),
            has_tools: !tools.is_empty(),
            tools,
        }
    }

    /// Suffix selecting the language-specific template variant.
    const fn variant(&self) -> &'static str {
        if self.is_python { "python" } else { "typescript" }
    }
}

fn table_cell(text: &str) -> String {
    single_line(text).replace('|', "\\|")
}

/// Renders `README.md`.
///
/// # Errors
///
/// Returns [`Error::TemplateError`] if rendering fails.
pub fn render_readme(engine: &TemplateEngine<'_>, context: &ProjectContext) -> Result<String> {
    engine.render("readme", context)
}

/// Renders the `Dockerfile` for the context's language.
///
/// # Errors
///
/// Returns [`Error::TemplateError`] if rendering fails.
pub fn render_dockerfile(engine: &TemplateEngine<'_>, context: &ProjectContext) -> Result<String> {
    engine.render(&format!("dockerfile/{}", context.variant()), context)
}

/// Renders the `install.sh` script for the context's language.
///
/// # Errors
///
/// Returns [`Error::TemplateError`] if rendering fails.
pub fn render_install_script(
    engine: &TemplateEngine<'_>,
    context: &ProjectContext,
) -> Result<String> {
    engine.render(&format!("install/{}", context.variant()), context)
}

/// Renders `requirements.txt` for Python projects.
///
/// # Errors
///
/// Returns [`Error::TemplateError`] if rendering fails.
pub fn render_requirements(
    engine: &TemplateEngine<'_>,
    context: &ProjectContext,
) -> Result<String> {
    engine.render("requirements", context)
}

/// Builds `package.json` for TypeScript projects.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if the manifest cannot be
/// serialized.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::ancillary::package_json;
/// use mcp_forge_core::GeneratorConfig;
///
/// let manifest = package_json("Weather Data Provider", "Forecasts", &GeneratorConfig::default()).unwrap();
/// assert!(manifest.contains(r#""name": "weather-data-provider""#));
/// ```
pub fn package_json(server_name: &str, description: &str, config: &GeneratorConfig) -> Result<String> {
    let manifest = json!({
        "name": to_kebab_case(server_name),
        "version": config.server_version,
        "description": single_line(description),
        "type": "module",
        "main": "dist/server.js",
        "scripts": {
            "build": "tsc",
            "start": "node dist/server.js",
            "dev": "tsx server.ts"
        },
        "dependencies": {
            "@modelcontextprotocol/sdk": format!("^{}", config.typescript_sdk_version),
            "zod": format!("^{}", config.zod_version)
        },
        "devDependencies": {
            "@types/node": format!("^{}", config.node_version),
            "tsx": "^4.7.0",
            "typescript": "^5.4.0"
        },
        "engines": {
            "node": format!(">={}", config.node_version)
        }
    });
    to_pretty_json(&manifest)
}

/// Builds `tsconfig.json` for TypeScript projects.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if the config cannot be serialized.
pub fn tsconfig_json(source_file: &str) -> Result<String> {
    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "NodeNext",
            "moduleResolution": "NodeNext",
            "outDir": "dist",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true
        },
        "files": [source_file]
    });
    to_pretty_json(&tsconfig)
}

fn to_pretty_json(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|mut text| {
            text.push('\n');
            text
        })
        .map_err(|e| Error::SerializationError {
            message: "failed to serialize JSON manifest".to_string(),
            source: Some(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend;
    use mcp_forge_core::{ParamType, Parameter, ServerConfig, Tool};

    fn build_module(language: TargetLanguage) -> (ServerModule, &'static LanguageBackend) {
        let backend = backend::for_language(language);
        let config = ServerConfig {
            server_name: "Weather Data Provider".to_string(),
            description: "Forecasts\nfor anywhere".to_string(),
            server_type: language,
            tools: vec![
                Tool::new(
                    "get_weather_forecast",
                    "Retrieves a forecast",
                    vec![Parameter::new("location", ParamType::String, "City | zip")],
                ),
                Tool::new("ping", "Health check", vec![]),
            ],
        };
        (ServerModule::build(&config, backend), backend)
    }

    #[test]
    fn test_context_flattens_and_escapes() {
        let (module, backend) = build_module(TargetLanguage::Python);
        let context = ProjectContext::new(&module, backend, &GeneratorConfig::default());
        assert_eq!(context.description, "Forecasts for anywhere");
        assert_eq!(context.slug, "weather-data-provider");
        assert_eq!(context.tools[0].params[0].description, "City \\| zip");
        assert!(!context.tools[1].has_params);
    }

    #[test]
    fn test_readme_lists_tools() {
        let (module, backend) = build_module(TargetLanguage::TypeScript);
        let context = ProjectContext::new(&module, backend, &GeneratorConfig::default());
        let engine = TemplateEngine::new().unwrap();
        let readme = render_readme(&engine, &context).unwrap();

        assert!(readme.starts_with("# Weather Data Provider"));
        assert!(readme.contains("### `get_weather_forecast`"));
        assert!(readme.contains("| `location` | `string` | City \\| zip |"));
        assert!(readme.contains("This tool takes no parameters."));
        assert!(readme.contains("Node.js 20"));
        assert!(readme.contains("docker build -t weather-data-provider ."));
    }

    #[test]
    fn test_dockerfile_variant_by_language() {
        let engine = TemplateEngine::new().unwrap();
        let config = GeneratorConfig::default();

        let (module, backend) = build_module(TargetLanguage::Python);
        let python = render_dockerfile(&engine, &ProjectContext::new(&module, backend, &config)).unwrap();
        assert!(python.starts_with("FROM python:3.11-slim"));

        let (module, backend) = build_module(TargetLanguage::TypeScript);
        let node = render_dockerfile(&engine, &ProjectContext::new(&module, backend, &config)).unwrap();
        assert!(node.starts_with("FROM node:20-alpine"));
    }

    #[test]
    fn test_install_script_has_shebang() {
        let engine = TemplateEngine::new().unwrap();
        let (module, backend) = build_module(TargetLanguage::Python);
        let context = ProjectContext::new(&module, backend, &GeneratorConfig::default());
        let script = render_install_script(&engine, &context).unwrap();
        assert!(script.starts_with("#!/usr/bin/env sh"));
        assert!(script.contains("pip install -r requirements.txt"));
    }

    #[test]
    fn test_requirements_pins_versions() {
        let engine = TemplateEngine::new().unwrap();
        let (module, backend) = build_module(TargetLanguage::Python);
        let context = ProjectContext::new(&module, backend, &GeneratorConfig::default());
        let requirements = render_requirements(&engine, &context).unwrap();
        assert!(requirements.contains("mcp==1.2.0"));
        assert!(requirements.contains("pydantic>=1.10,<2"));
    }

    #[test]
    fn test_package_json_escapes_description() {
        let manifest =
            package_json("My \"Quoted\" Server", "Says \"hi\"", &GeneratorConfig::default()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(parsed["name"], "my-quoted-server");
        assert_eq!(parsed["description"], "Says \"hi\"");
        assert_eq!(parsed["dependencies"]["zod"], "^3.23.8");
    }

    #[test]
    fn test_tsconfig_lists_source() {
        let tsconfig = tsconfig_json("server.ts").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&tsconfig).unwrap();
        assert_eq!(parsed["files"][0], "server.ts");
        assert_eq!(parsed["compilerOptions"]["outDir"], "dist");
    }
}
