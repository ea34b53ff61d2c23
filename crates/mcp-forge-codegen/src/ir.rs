//! Intermediate representation of a generated server.
//!
//! The IR is built once per generation by the language backend and then
//! printed. Every tool keeps a single ordered list of [`ParamDecl`]s, and the
//! function signature, the registration schema, and the validation model are
//! all printed from that same list, so their parameter names always agree.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::backend;
//! use mcp_forge_codegen::ir::ServerModule;
//! use mcp_forge_core::{ParamType, Parameter, ServerConfig, TargetLanguage, Tool};
//!
//! let config = ServerConfig {
//!     server_name: "Demo".to_string(),
//!     description: "Demo server".to_string(),
//!     server_type: TargetLanguage::Python,
//!     tools: vec![Tool::new(
//!         "Echo Text",
//!         "Echoes its input",
//!         vec![Parameter::new("Input Text", ParamType::String, "Text to echo")],
//!     )],
//! };
//!
//! let module = ServerModule::build(&config, backend::for_language(config.server_type));
//! assert_eq!(module.tools[0].name, "echo_text");
//! assert_eq!(module.tools[0].param_names().collect::<Vec<_>>(), vec!["input_text"]);
//! ```

use crate::backend::LanguageBackend;
use crate::identifier::normalize_identifier;
use mcp_forge_core::{Constraints, ParamType, Parameter, ServerConfig, TargetLanguage, Tool};
use serde::Serialize;

/// A whole server ready for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerModule {
    /// Display name of the server
    pub server_name: String,
    /// Human-readable description
    pub description: String,
    /// Target language
    pub language: TargetLanguage,
    /// Tool declarations in input order
    pub tools: Vec<ToolDecl>,
}

impl ServerModule {
    /// Builds the IR for a server description using a language backend.
    #[must_use]
    pub fn build(config: &ServerConfig, backend: &LanguageBackend) -> Self {
        Self {
            server_name: config.server_name.clone(),
            description: config.description.clone(),
            language: backend.language,
            tools: config
                .tools
                .iter()
                .map(|tool| ToolDecl::build(tool, backend))
                .collect(),
        }
    }
}

/// A single tool handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDecl {
    /// Normalized snake_case identifier
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameters in declaration order
    pub params: Vec<ParamDecl>,
}

impl ToolDecl {
    /// Builds a tool declaration using a language backend.
    #[must_use]
    pub fn build(tool: &Tool, backend: &LanguageBackend) -> Self {
        Self {
            name: normalize_identifier(&tool.name),
            description: tool.description.clone(),
            params: tool
                .parameters
                .iter()
                .map(|param| (backend.declare_param)(param))
                .collect(),
        }
    }

    /// Returns the parameter identifiers in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.name.as_str())
    }

    /// Returns `true` if the tool takes parameters.
    ///
    /// Tools without parameters get no validation model.
    #[must_use]
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }
}

/// A single parameter, resolved for one target language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDecl {
    /// Normalized snake_case identifier
    pub name: String,
    /// Abstract type from the server description
    pub param_type: ParamType,
    /// Human-readable description
    pub description: String,
    /// Target-language type, after any enum override
    pub type_token: String,
    /// Target-language validator expression (Pydantic `Field(...)` or a
    /// Zod schema chain)
    pub validator: String,
    /// Constraints as entered, echoed into registration metadata
    pub constraints: Constraints,
}

impl ParamDecl {
    /// Creates a declaration from a parameter and its resolved pieces.
    #[must_use]
    pub fn new(param: &Parameter, type_token: String, validator: String) -> Self {
        Self {
            name: normalize_identifier(&param.name),
            param_type: param.param_type,
            description: param.description.clone(),
            type_token,
            validator,
            constraints: param.constraints.clone().unwrap_or_default(),
        }
    }
}
