//! Constraint translation output.
//!
//! Each language backend translates a parameter's [`Constraints`] into a
//! [`ValidatorFragment`]: an ordered list of validator pieces plus an
//! optional replacement for the base type. Pieces always render in the same
//! order: length, pattern and format first, then numeric bounds, then the
//! enum override, then the default.
//!
//! [`Constraints`]: mcp_forge_core::Constraints

use crate::escape::string_literal;
use mcp_forge_core::{DefaultValue, ParamType};
use serde::Serialize;

/// How validator pieces are spliced into a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpliceStyle {
    /// Comma-prefixed keyword arguments: `, min_length=3, max_length=10`
    KeywordArguments,
    /// Chained method calls: `.min(3).max(10)`
    ChainedCalls,
}

/// Target-language validation fragment for one parameter.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::constraints::{SpliceStyle, ValidatorFragment};
///
/// let mut fragment = ValidatorFragment::new(SpliceStyle::KeywordArguments);
/// fragment.push("min_length=3");
/// fragment.push("max_length=10");
/// assert_eq!(fragment.splice(), ", min_length=3, max_length=10");
///
/// let mut fragment = ValidatorFragment::new(SpliceStyle::ChainedCalls);
/// fragment.push(".min(3)");
/// assert_eq!(fragment.splice(), ".min(3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorFragment {
    /// Replaces the mapped base type when set (Python `Literal[...]`,
    /// Zod `z.enum([...])`)
    pub type_override: Option<String>,
    /// Validator pieces in render order
    pub parts: Vec<String>,
    /// Splice style of the target language
    pub style: SpliceStyle,
}

impl ValidatorFragment {
    /// Creates an empty fragment.
    #[must_use]
    pub const fn new(style: SpliceStyle) -> Self {
        Self {
            type_override: None,
            parts: Vec::new(),
            style,
        }
    }

    /// Appends a validator piece.
    pub fn push(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Returns `true` if neither pieces nor a type override were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_override.is_none() && self.parts.is_empty()
    }

    /// Renders the pieces as text to splice into a declaration.
    ///
    /// Returns an empty string when there are no pieces, so absent
    /// constraints never produce empty validator calls.
    #[must_use]
    pub fn splice(&self) -> String {
        match self.style {
            SpliceStyle::KeywordArguments => {
                self.parts.iter().map(|part| format!(", {part}")).collect()
            }
            SpliceStyle::ChainedCalls => self.parts.concat(),
        }
    }

    /// Returns the base type, replaced by the override when one is set.
    #[must_use]
    pub fn resolve_type<'a>(&'a self, base: &'a str) -> &'a str {
        self.type_override.as_deref().unwrap_or(base)
    }
}

/// Formats a numeric bound without a trailing `.0` for whole numbers.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::constraints::format_number;
///
/// assert_eq!(format_number(1.0), "1");
/// assert_eq!(format_number(-0.5), "-0.5");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Renders a default value as a literal, quoted by the declared type.
///
/// Textual types (string, date, email, url, enum) always get a quoted
/// string literal; every other type gets the raw token, with booleans
/// spelled by `bool_literal`.
#[must_use]
pub fn default_literal(
    param_type: ParamType,
    value: &DefaultValue,
    bool_literal: fn(bool) -> &'static str,
) -> String {
    if param_type.is_textual() {
        return string_literal(&value.raw());
    }

    match value {
        DefaultValue::Bool(b) => bool_literal(*b).to_string(),
        DefaultValue::String(s) if s == "true" => bool_literal(true).to_string(),
        DefaultValue::String(s) if s == "false" => bool_literal(false).to_string(),
        other => other.raw(),
    }
}
