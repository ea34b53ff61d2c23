//! Server configuration validation.
//!
//! Generation assumes well-formed input. This module is the gate in front of
//! it: it checks required fields, identifier validity after normalization,
//! uniqueness, constraint consistency, and input-size bounds, and reports
//! every problem at once as a list of field errors.
//!
//! A normalized name must also be usable in both generated languages. Python
//! and JavaScript keywords are rejected, as are the module-level names the
//! generated servers import or declare, and tool names that would collide
//! with another tool's generated model or schema.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::validation::{ValidationLimits, validate_server_config};
//! use mcp_forge_core::{ParamType, Parameter, ServerConfig, TargetLanguage, Tool};
//!
//! let mut config = ServerConfig {
//!     server_name: "Demo".to_string(),
//!     description: "Demo server".to_string(),
//!     server_type: TargetLanguage::Python,
//!     tools: vec![Tool::new(
//!         "lookup",
//!         "Looks things up",
//!         vec![Parameter::new("query", ParamType::String, "What to look up")],
//!     )],
//! };
//! assert!(validate_server_config(&config, &ValidationLimits::default()).is_ok());
//!
//! config.server_name.clear();
//! let err = validate_server_config(&config, &ValidationLimits::default()).unwrap_err();
//! assert_eq!(err.field_errors()[0].field, "serverName");
//! ```

use crate::identifier::normalize_identifier;
use mcp_forge_core::{
    Constraints, DefaultValue, Error, FieldError, ParamType, Parameter, Result, ServerConfig,
    Tool,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").expect("identifier pattern is valid")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid")
});

/// Keywords of Python and JavaScript/TypeScript, in normalized (lowercase) form.
const RESERVED_WORDS: &[&str] = &[
    // Python
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "false", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "none", "nonlocal", "not", "or", "pass", "raise", "return", "true", "try", "while",
    "with", "yield",
    // JavaScript and TypeScript
    "arguments", "case", "catch", "const", "debugger", "default", "delete", "do", "enum", "eval",
    "export", "extends", "function", "implements", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "static", "super", "switch", "this",
    "throw", "typeof", "var", "void",
];

/// Names the generated modules import or declare at the top level.
const GENERATED_NAMES: &[&str] = &[
    "asyncio", "console", "datetime", "json", "os", "process", "requests", "server", "validator",
    "z",
];

/// Local bound inside every generated handler.
const HANDLER_LOCAL: &str = "params";

/// Suffixes of the per-tool model (Python) and schema (TypeScript) names.
const GENERATED_SUFFIXES: [&str; 2] = ["_params", "_schema"];

/// Input-size bounds enforced before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum number of tools per server
    pub max_tools: usize,
    /// Maximum number of parameters per tool
    pub max_parameters_per_tool: usize,
    /// Maximum length of server, tool, and parameter names, in characters
    pub max_name_length: usize,
    /// Maximum length of any description, in characters
    pub max_description_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_tools: 100,
            max_parameters_per_tool: 50,
            max_name_length: 128,
            max_description_length: 2000,
        }
    }
}

/// Validates a server configuration before generation.
///
/// # Errors
///
/// Returns [`Error::ValidationFailed`] listing every field-level problem
/// found, in document order.
pub fn validate_server_config(config: &ServerConfig, limits: &ValidationLimits) -> Result<()> {
    let mut errors = Vec::new();

    check_text(
        &mut errors,
        "serverName",
        "Server name",
        &config.server_name,
        limits.max_name_length,
    );
    check_text(
        &mut errors,
        "description",
        "Description",
        &config.description,
        limits.max_description_length,
    );

    if config.tools.is_empty() {
        errors.push(FieldError::new("tools", "At least one tool is required"));
    } else if config.tools.len() > limits.max_tools {
        errors.push(FieldError::new(
            "tools",
            format!("At most {} tools are allowed", limits.max_tools),
        ));
    }

    let mut seen = HashSet::new();
    let tool_names: Vec<(usize, String)> = config
        .tools
        .iter()
        .enumerate()
        .filter_map(|(index, tool)| {
            validate_tool(&mut errors, &format!("tools[{index}]"), tool, limits, &mut seen)
                .map(|name| (index, name))
        })
        .collect();
    check_generated_collisions(&mut errors, &tool_names);

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "Server configuration rejected");
        Err(Error::ValidationFailed { errors })
    }
}

fn validate_tool(
    errors: &mut Vec<FieldError>,
    path: &str,
    tool: &Tool,
    limits: &ValidationLimits,
    seen: &mut HashSet<String>,
) -> Option<String> {
    let name_path = format!("{path}.name");
    let tool_name = if check_text(errors, &name_path, "Tool name", &tool.name, limits.max_name_length)
    {
        check_identifier(errors, &name_path, &tool.name, seen, "tool")
    } else {
        None
    };
    check_text(
        errors,
        &format!("{path}.description"),
        "Tool description",
        &tool.description,
        limits.max_description_length,
    );

    if tool.parameters.len() > limits.max_parameters_per_tool {
        errors.push(FieldError::new(
            format!("{path}.parameters"),
            format!(
                "At most {} parameters are allowed per tool",
                limits.max_parameters_per_tool
            ),
        ));
    }

    let mut param_names = HashSet::new();
    for (index, param) in tool.parameters.iter().enumerate() {
        validate_parameter(
            errors,
            &format!("{path}.parameters[{index}]"),
            param,
            tool_name.as_deref(),
            limits,
            &mut param_names,
        );
    }
    tool_name
}

fn validate_parameter(
    errors: &mut Vec<FieldError>,
    path: &str,
    param: &Parameter,
    tool_name: Option<&str>,
    limits: &ValidationLimits,
    seen: &mut HashSet<String>,
) {
    let name_path = format!("{path}.name");
    if check_text(errors, &name_path, "Parameter name", &param.name, limits.max_name_length)
        && let Some(name) = check_identifier(errors, &name_path, &param.name, seen, "parameter")
    {
        let shadows_model = tool_name.is_some_and(|tool| {
            GENERATED_SUFFIXES
                .iter()
                .any(|suffix| name == format!("{tool}{suffix}"))
        });
        if name == HANDLER_LOCAL || shadows_model {
            errors.push(FieldError::new(
                &name_path,
                format!("Parameter name {name:?} collides with a name in the generated handler"),
            ));
        }
    }

    if param.description.chars().count() > limits.max_description_length {
        errors.push(FieldError::new(
            format!("{path}.description"),
            format!(
                "Parameter description must be at most {} characters",
                limits.max_description_length
            ),
        ));
    }

    if param.param_type == ParamType::Unknown {
        errors.push(FieldError::new(
            format!("{path}.type"),
            format!("Unsupported parameter type; expected one of: {}", known_types()),
        ));
    }

    let constraints = param.constraints.as_ref();
    if param.param_type == ParamType::Enum
        && constraints.and_then(Constraints::enum_values).is_none()
    {
        errors.push(FieldError::new(
            format!("{path}.constraints.enum"),
            "Enum parameters require at least one allowed value",
        ));
    }

    if let Some(constraints) = constraints {
        validate_constraints(errors, &format!("{path}.constraints"), param.param_type, constraints);
    }
}

fn validate_constraints(
    errors: &mut Vec<FieldError>,
    path: &str,
    param_type: ParamType,
    constraints: &Constraints,
) {
    if let (Some(min), Some(max)) = (constraints.min_length, constraints.max_length)
        && min > max
    {
        errors.push(FieldError::new(
            format!("{path}.minLength"),
            format!("minLength ({min}) must not exceed maxLength ({max})"),
        ));
    }

    for (key, bound) in [("minimum", constraints.minimum), ("maximum", constraints.maximum)] {
        if let Some(value) = bound
            && !value.is_finite()
        {
            errors.push(FieldError::new(
                format!("{path}.{key}"),
                format!("{key} must be a finite number"),
            ));
        }
    }

    if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum)
        && min > max
    {
        errors.push(FieldError::new(
            format!("{path}.minimum"),
            format!("minimum ({min}) must not exceed maximum ({max})"),
        ));
    }

    if let Some(pattern) = constraints.pattern.as_deref()
        && let Err(e) = Regex::new(pattern)
    {
        errors.push(FieldError::new(
            format!("{path}.pattern"),
            format!("Invalid regular expression: {e}"),
        ));
    }

    if let Some(values) = constraints.enum_values.as_deref()
        && values.iter().any(|value| value.trim().is_empty())
    {
        errors.push(FieldError::new(
            format!("{path}.enum"),
            "Enum values must not be empty",
        ));
    }

    if let Some(default) = constraints.default.as_ref()
        && let Some(message) = default_mismatch(param_type, default, constraints)
    {
        errors.push(FieldError::new(format!("{path}.default"), message));
    }
}

/// Describes why a default cannot be emitted for its declared type, if it
/// cannot.
fn default_mismatch(
    param_type: ParamType,
    default: &DefaultValue,
    constraints: &Constraints,
) -> Option<String> {
    match (param_type, default) {
        (ParamType::Number, DefaultValue::String(s)) if s.trim().parse::<f64>().is_err() => {
            Some(format!("Default {s:?} is not a number"))
        }
        (ParamType::Integer, DefaultValue::String(s)) if s.trim().parse::<i64>().is_err() => {
            Some(format!("Default {s:?} is not an integer"))
        }
        (ParamType::Integer, DefaultValue::Number(n)) if !(n.is_i64() || n.is_u64()) => {
            Some(format!("Default {n} is not an integer"))
        }
        (ParamType::Number | ParamType::Integer, DefaultValue::Bool(_)) => {
            Some("Default must be a number".to_string())
        }
        (ParamType::Boolean, DefaultValue::Number(_)) => {
            Some("Default must be true or false".to_string())
        }
        (ParamType::Boolean, DefaultValue::String(s)) if s != "true" && s != "false" => {
            Some("Default must be true or false".to_string())
        }
        (ParamType::Date, DefaultValue::String(s)) if !ISO_DATE.is_match(s) => {
            Some(format!("Default {s:?} is not a YYYY-MM-DD date"))
        }
        (ParamType::Date, DefaultValue::Bool(_) | DefaultValue::Number(_)) => {
            Some("Default must be a YYYY-MM-DD date string".to_string())
        }
        (ParamType::Array | ParamType::Object, _) => {
            Some("Defaults are not supported for array and object parameters".to_string())
        }
        (ParamType::Enum, value) => constraints.enum_values().and_then(|values| {
            let raw = value.raw();
            (!values.contains(&raw)).then(|| format!("Default {raw:?} is not one of the allowed values"))
        }),
        _ => None,
    }
}

/// Reports tools whose name equals another tool's generated model or schema name.
fn check_generated_collisions(errors: &mut Vec<FieldError>, tool_names: &[(usize, String)]) {
    for (index, name) in tool_names {
        let owner = tool_names.iter().find_map(|(_, other)| {
            GENERATED_SUFFIXES
                .iter()
                .find(|suffix| name.strip_suffix(**suffix) == Some(other.as_str()))
                .map(|_| other)
        });
        if let Some(owner) = owner {
            errors.push(FieldError::new(
                format!("tools[{index}].name"),
                format!("Tool name {name:?} collides with a generated name of tool {owner:?}"),
            ));
        }
    }
}

/// Marks the name as seen and reports invalid, reserved, or duplicate
/// identifiers. Returns the normalized name when it is usable.
fn check_identifier(
    errors: &mut Vec<FieldError>,
    path: &str,
    raw_name: &str,
    seen: &mut HashSet<String>,
    kind: &str,
) -> Option<String> {
    let normalized = normalize_identifier(raw_name);
    if !IDENTIFIER.is_match(&normalized) {
        errors.push(FieldError::new(
            path,
            format!(
                "Name {raw_name:?} does not produce a valid identifier ({normalized:?}); \
                 use letters, digits, spaces and underscores, not starting with a digit"
            ),
        ));
    } else if RESERVED_WORDS.contains(&normalized.as_str()) {
        errors.push(FieldError::new(
            path,
            format!("Name {raw_name:?} normalizes to the reserved word {normalized:?}"),
        ));
    } else if GENERATED_NAMES.contains(&normalized.as_str()) {
        errors.push(FieldError::new(
            path,
            format!("Name {raw_name:?} collides with the generated module name {normalized:?}"),
        ));
    } else if !seen.insert(normalized.clone()) {
        errors.push(FieldError::new(
            path,
            format!("Duplicate {kind} name {normalized:?}"),
        ));
    } else {
        return Some(normalized);
    }
    None
}

/// Checks a required text field; returns `true` if it is non-empty.
fn check_text(
    errors: &mut Vec<FieldError>,
    path: &str,
    label: &str,
    value: &str,
    max_length: usize,
) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(path, format!("{label} is required")));
        return false;
    }
    if value.chars().count() > max_length {
        errors.push(FieldError::new(
            path,
            format!("{label} must be at most {max_length} characters"),
        ));
    }
    true
}

fn known_types() -> String {
    ParamType::KNOWN
        .iter()
        .map(ParamType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
