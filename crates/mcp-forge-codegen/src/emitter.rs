//! Server Emitter: renders a server description into primary source text.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::emit_server;
//! use mcp_forge_core::{GeneratorConfig, ServerConfig, TargetLanguage};
//!
//! let config = ServerConfig {
//!     server_name: "Empty".to_string(),
//!     description: "Nothing yet".to_string(),
//!     server_type: TargetLanguage::Python,
//!     tools: vec![],
//! };
//!
//! let source = emit_server(&config, &GeneratorConfig::default());
//! assert!(source.contains("if __name__ == \"__main__\":"));
//! assert!(!source.contains("@server.tool()"));
//! ```

use crate::backend;
use crate::ir::ServerModule;
use mcp_forge_core::{GeneratorConfig, ServerConfig};

/// Emits the primary server source for the config's target language.
///
/// Never fails for a structurally valid config: unknown parameter types fall
/// back to the language's string type, and empty tool or parameter lists
/// produce a bare server or handler.
#[must_use]
pub fn emit_server(config: &ServerConfig, settings: &GeneratorConfig) -> String {
    let backend = backend::for_language(config.server_type);
    let module = ServerModule::build(config, backend);

    tracing::debug!(
        language = %config.server_type,
        tools = module.tools.len(),
        "Printing server module"
    );

    (backend.print_module)(&module, settings)
}
