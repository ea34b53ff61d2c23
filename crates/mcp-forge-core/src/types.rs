//! Declarative server description.
//!
//! These types mirror the JSON produced by the server builder form: a server
//! with a name, a description, a target language, and a list of tools, each
//! with typed parameters and optional validation constraints.
//!
//! All types are read-only inputs to the generator. They are constructed by
//! the caller (usually by deserializing JSON), validated once, and consumed
//! by the emitters without mutation.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_core::{ParamType, ServerConfig, TargetLanguage};
//!
//! let config: ServerConfig = serde_json::from_str(r#"{
//!     "serverName": "Weather Data Provider",
//!     "description": "Forecasts for any location",
//!     "serverType": "python",
//!     "tools": [{
//!         "name": "get_weather_forecast",
//!         "description": "Retrieves forecast data",
//!         "parameters": [
//!             {"name": "location", "type": "string", "description": "City name"},
//!             {"name": "days", "type": "number", "description": "Days ahead"}
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! assert_eq!(config.server_type, TargetLanguage::Python);
//! assert_eq!(config.tools[0].parameters[1].param_type, ParamType::Number);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language of the generated server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    /// Python server using Pydantic models
    Python,
    /// TypeScript server using Zod schemas
    TypeScript,
}

impl TargetLanguage {
    /// Returns the wire name used in `serverType`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Returns the human-facing display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::TypeScript => "TypeScript",
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "typescript" => Ok(Self::TypeScript),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid server type: '{s}' (expected: python or typescript)"
            ))),
        }
    }
}

/// Abstract parameter type chosen in the builder form.
///
/// Unrecognized values deserialize to [`ParamType::Unknown`] so that
/// generation stays total; the validator reports them separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Free text
    String,
    /// Floating point number
    Number,
    /// Whole number
    Integer,
    /// True/false flag
    Boolean,
    /// List of values
    Array,
    /// Key/value object
    Object,
    /// Calendar date
    Date,
    /// Email address (string with format validation)
    Email,
    /// URL (string with format validation)
    Url,
    /// One of a fixed set of string values
    Enum,
    /// Any type name not listed above
    #[serde(other)]
    Unknown,
}

impl ParamType {
    /// All known parameter types, in form order.
    pub const KNOWN: [Self; 10] = [
        Self::String,
        Self::Number,
        Self::Integer,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Date,
        Self::Email,
        Self::Url,
        Self::Enum,
    ];

    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::Email => "email",
            Self::Url => "url",
            Self::Enum => "enum",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` for types whose values are text on the wire.
    ///
    /// Defaults for these types are emitted as quoted string literals.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Date | Self::Email | Self::Url | Self::Enum | Self::Unknown
        )
    }

    /// Returns `true` for types that accept length and pattern constraints.
    #[must_use]
    pub const fn is_string_like(&self) -> bool {
        matches!(self, Self::String | Self::Email | Self::Url | Self::Unknown)
    }

    /// Returns `true` for types that accept numeric bounds.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default value attached to a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default
    Bool(bool),
    /// Numeric default
    Number(serde_json::Number),
    /// Text default
    String(String),
}

impl DefaultValue {
    /// Returns the raw textual form of the value, without quoting.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_forge_core::DefaultValue;
    ///
    /// assert_eq!(DefaultValue::String("abc".into()).raw(), "abc");
    /// assert_eq!(DefaultValue::Bool(true).raw(), "true");
    /// assert_eq!(DefaultValue::Number(5.into()).raw(), "5");
    /// ```
    #[must_use]
    pub fn raw(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

/// Optional validation constraints for a parameter.
///
/// Every field is optional; an absent field means no validator is emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Minimum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower numeric bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper numeric bound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Allowed values for `enum` parameters, in order
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Default value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// Whether the caller must supply the parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Constraints {
    /// Returns the enum values if present and non-empty.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[String]> {
        self.enum_values
            .as_deref()
            .filter(|values| !values.is_empty())
    }
}

/// A single typed input to a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Form-assigned identifier
    #[serde(default)]
    pub id: String,
    /// Human-entered name
    pub name: String,
    /// Abstract type
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Optional validation constraints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

impl Parameter {
    /// Creates a parameter without constraints.
    pub fn new(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            param_type,
            description: description.into(),
            constraints: None,
        }
    }

    /// Attaches constraints, replacing any existing ones.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

/// A named, parameterized unit of functionality the server exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Form-assigned identifier
    #[serde(default)]
    pub id: String,
    /// Human-entered name, normalized to snake_case before use
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Tool {
    /// Creates a tool with the given parameters.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Complete description of a server to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Display name of the server
    pub server_name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Target language
    pub server_type: TargetLanguage,
    /// Tools in declaration order
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl ServerConfig {
    /// Parses a server description from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SerializationError`] if the JSON is malformed
    /// or names an unsupported `serverType`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::Error::SerializationError {
            message: format!("Failed to parse server configuration: {e}"),
            source: Some(e),
        })
    }

    /// Returns the total number of parameters across all tools.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.tools.iter().map(|tool| tool.parameters.len()).sum()
    }
}
