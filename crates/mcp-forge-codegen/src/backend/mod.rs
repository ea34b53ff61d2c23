//! Per-language dispatch table.
//!
//! Each target language is one [`LanguageBackend`] entry holding the
//! functions that make up its code generator: type mapping, constraint
//! translation, parameter declaration, signature formatting, and the source
//! printer. Adding a target language means adding one entry.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::backend;
//! use mcp_forge_core::{ParamType, TargetLanguage};
//!
//! let python = backend::for_language(TargetLanguage::Python);
//! assert_eq!((python.map_type)(ParamType::Integer), "int");
//!
//! let typescript = backend::for_language(TargetLanguage::TypeScript);
//! assert_eq!((typescript.map_type)(ParamType::Integer), "number");
//! ```

pub mod python;
pub mod typescript;

use crate::constraints::ValidatorFragment;
use crate::ir::{ParamDecl, ServerModule, ToolDecl};
use mcp_forge_core::{GeneratorConfig, ParamType, Parameter, TargetLanguage};
use std::fmt;

/// Function table for one target language.
#[derive(Clone, Copy)]
pub struct LanguageBackend {
    /// Language this entry generates
    pub language: TargetLanguage,
    /// File name of the primary server source
    pub source_file: &'static str,
    /// Maps an abstract parameter type to a target-language type token
    pub map_type: fn(ParamType) -> &'static str,
    /// Translates a parameter's constraints into validator pieces
    pub translate_constraints: fn(&Parameter) -> ValidatorFragment,
    /// Resolves a parameter into its IR declaration
    pub declare_param: fn(&Parameter) -> ParamDecl,
    /// Renders a tool's handler parameter list
    pub format_signature: fn(&ToolDecl) -> String,
    /// Prints the complete server source
    pub print_module: fn(&ServerModule, &GeneratorConfig) -> String,
}

impl fmt::Debug for LanguageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageBackend")
            .field("language", &self.language)
            .field("source_file", &self.source_file)
            .finish_non_exhaustive()
    }
}

/// Returns the backend for a target language.
#[must_use]
pub fn for_language(language: TargetLanguage) -> &'static LanguageBackend {
    match language {
        TargetLanguage::Python => &python::BACKEND,
        TargetLanguage::TypeScript => &typescript::BACKEND,
    }
}

/// Maps an abstract parameter type to a target-language type token.
///
/// Total: unknown types map to the language's string type.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::backend::map_type;
/// use mcp_forge_core::{ParamType, TargetLanguage};
///
/// assert_eq!(map_type(ParamType::Object, TargetLanguage::Python), "Dict[str, Any]");
/// assert_eq!(map_type(ParamType::Object, TargetLanguage::TypeScript), "Record<string, any>");
/// assert_eq!(map_type(ParamType::Unknown, TargetLanguage::Python), "str");
/// ```
#[must_use]
pub fn map_type(param_type: ParamType, language: TargetLanguage) -> &'static str {
    (for_language(language).map_type)(param_type)
}

/// Translates a parameter's constraints for a target language.
#[must_use]
pub fn translate_constraints(param: &Parameter, language: TargetLanguage) -> ValidatorFragment {
    (for_language(language).translate_constraints)(param)
}
