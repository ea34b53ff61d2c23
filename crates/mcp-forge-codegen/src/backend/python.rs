//! Python backend.
//!
//! Generates an asyncio MCP server where each tool is a decorated `async def`
//! handler. Inputs are re-validated through a Pydantic model built from the
//! same parameter list as the handler signature.
//!
//! # Generated Code Example
//!
//! ```python
//! # Parameter validation model for get_weather_forecast
//! class get_weather_forecast_params(BaseModel):
//!     location: str = Field(description="City name or zip code")
//!     days: float = Field(description="Number of days to forecast")
//!
//! @server.tool()
//! async def get_weather_forecast(location: str, days: float) -> Dict[str, Any]:
//!     """Retrieves weather forecast data for a specific location"""
//!     # Validate parameters
//!     params = get_weather_forecast_params(
//!         location=location,
//!         days=days
//!     )
//!     ...
//!     return {"result": f"get_weather_forecast executed with parameters: {location}, {days}"}
//! ```

use super::LanguageBackend;
use crate::constraints::{SpliceStyle, ValidatorFragment, default_literal, format_number};
use crate::escape::{python_docstring, python_fstring_text, string_literal};
use crate::ir::{ParamDecl, ServerModule, ToolDecl};
use crate::writer::CodeWriter;
use mcp_forge_core::{GeneratorConfig, ParamType, Parameter, TargetLanguage};

/// Python entry in the dispatch table.
pub static BACKEND: LanguageBackend = LanguageBackend {
    language: TargetLanguage::Python,
    source_file: "server.py",
    map_type,
    translate_constraints,
    declare_param,
    format_signature,
    print_module,
};

const INDENT: &str = "    ";

/// Maps an abstract parameter type to a Python type hint.
#[must_use]
pub const fn map_type(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::Number => "float",
        ParamType::Integer => "int",
        ParamType::Boolean => "bool",
        ParamType::Array => "List[Any]",
        ParamType::Object => "Dict[str, Any]",
        ParamType::Date => "datetime.date",
        ParamType::String
        | ParamType::Email
        | ParamType::Url
        | ParamType::Enum
        | ParamType::Unknown => "str",
    }
}

const fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Translates constraints into Pydantic `Field(...)` keyword arguments.
///
/// Enum values become a `Literal[...]` type override rather than a field
/// argument.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::backend::python::translate_constraints;
/// use mcp_forge_core::{Constraints, DefaultValue, ParamType, Parameter};
///
/// let param = Parameter::new("code", ParamType::String, "").with_constraints(Constraints {
///     min_length: Some(3),
///     max_length: Some(10),
///     pattern: Some("^[a-z]+$".to_string()),
///     default: Some(DefaultValue::String("abc".to_string())),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     translate_constraints(&param).splice(),
///     r#", min_length=3, max_length=10, regex="^[a-z]+$", default="abc""#
/// );
/// ```
#[must_use]
pub fn translate_constraints(param: &Parameter) -> ValidatorFragment {
    let mut fragment = ValidatorFragment::new(SpliceStyle::KeywordArguments);
    let Some(constraints) = param.constraints.as_ref() else {
        return fragment;
    };
    let param_type = param.param_type;

    if param_type.is_string_like() {
        if let Some(min_length) = constraints.min_length {
            fragment.push(format!("min_length={min_length}"));
        }
        if let Some(max_length) = constraints.max_length {
            fragment.push(format!("max_length={max_length}"));
        }
        if let Some(pattern) = constraints.pattern.as_deref() {
            fragment.push(format!("regex={}", string_literal(pattern)));
        }
    }

    if param_type.is_numeric() {
        if let Some(minimum) = constraints.minimum {
            fragment.push(format!("ge={}", format_number(minimum)));
        }
        if let Some(maximum) = constraints.maximum {
            fragment.push(format!("le={}", format_number(maximum)));
        }
    }

    if param_type == ParamType::Enum
        && let Some(values) = constraints.enum_values()
    {
        let literals: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
        fragment.type_override = Some(format!("Literal[{}]", literals.join(", ")));
    }

    if let Some(default) = constraints.default.as_ref() {
        fragment.push(format!(
            "default={}",
            default_literal(param_type, default, bool_literal)
        ));
    }

    fragment
}

/// Resolves a parameter into its Python declaration.
#[must_use]
pub fn declare_param(param: &Parameter) -> ParamDecl {
    let fragment = translate_constraints(param);
    let type_token = fragment.resolve_type(map_type(param.param_type)).to_string();
    let validator = format!(
        "Field(description={}{})",
        string_literal(&param.description),
        fragment.splice()
    );
    ParamDecl::new(param, type_token, validator)
}

/// Renders the handler parameter list: `location: str, days: float`.
#[must_use]
pub fn format_signature(tool: &ToolDecl) -> String {
    tool.params
        .iter()
        .map(|param| format!("{}: {}", param.name, param.type_token))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Name of the Pydantic model class generated for a tool.
#[must_use]
pub fn model_name(tool: &ToolDecl) -> String {
    format!("{}_params", tool.name)
}

/// Prints the complete Python server source.
#[must_use]
pub fn print_module(module: &ServerModule, config: &GeneratorConfig) -> String {
    let mut w = CodeWriter::new(INDENT);

    write_preamble(&mut w, module, config);
    for tool in &module.tools {
        write_tool(&mut w, tool);
    }
    write_epilogue(&mut w);

    w.finish()
}

fn write_preamble(w: &mut CodeWriter, module: &ServerModule, config: &GeneratorConfig) {
    w.comment(0, "#", &module.server_name);
    w.line(0, "#");
    if !module.description.is_empty() {
        w.comment(0, "#", &module.description);
        w.line(0, "#");
    }
    w.line(
        0,
        format!(
            "# MCP protocol version {}, Python SDK mcp=={}",
            config.protocol_version, config.python_sdk_version
        ),
    );
    w.blank();
    w.lines(
        0,
        [
            "from typing import Dict, List, Union, Optional, Any, Literal",
            "from mcp.server import MCPServer, Tool, Resources",
        ],
    );
    w.line(
        0,
        format!(
            "from pydantic import BaseModel, Field, validator  # pip install \"pydantic{}\"",
            config.pydantic_version_spec
        ),
    );
    w.lines(
        0,
        [
            "import os",
            "import json",
            "import asyncio",
            "import datetime",
            "import requests  # You may need to install this: pip install requests",
            "",
            "# Initialize the MCP server with security options",
            "server = MCPServer(",
        ],
    );
    w.line(1, format!("name={},", string_literal(&module.server_name)));
    w.line(1, format!("description={},", string_literal(&module.description)));
    w.lines(
        1,
        [
            "# Uncomment to enable authentication",
            "# auth_config={",
            "#     \"api_keys\": [\"your-secret-key\"],  # Replace with actual API keys or use environment variables",
            "# }",
        ],
    );
    w.line(0, ")");
    w.blank();
}

fn write_tool(w: &mut CodeWriter, tool: &ToolDecl) {
    w.blank();
    if tool.has_params() {
        write_model(w, tool);
    }

    w.line(0, "@server.tool()");
    w.line(
        0,
        format!(
            "async def {}({}) -> Dict[str, Any]:",
            tool.name,
            format_signature(tool)
        ),
    );
    w.line(1, format!("\"\"\"{}\"\"\"", python_docstring(&tool.description)));

    if tool.has_params() {
        w.line(1, "# Validate parameters");
        w.line(1, format!("params = {}(", model_name(tool)));
        let last = tool.params.len() - 1;
        for (i, name) in tool.param_names().enumerate() {
            let separator = if i == last { "" } else { "," };
            w.line(2, format!("{name}={name}{separator}"));
        }
        w.line(1, ")");
        w.blank();
    }

    write_implementation_hints(w);
    w.line(
        1,
        format!("return {{\"result\": {}}}", echo_expression(tool)),
    );
}

fn write_model(w: &mut CodeWriter, tool: &ToolDecl) {
    w.line(0, format!("# Parameter validation model for {}", tool.name));
    w.line(0, format!("class {}(BaseModel):", model_name(tool)));
    for param in &tool.params {
        write_field(w, param);
    }
    w.blank();
    w.lines(
        1,
        [
            "# Add custom validation if needed",
            "# @validator(\"field_name\")",
            "# def validate_field(cls, v):",
            "#     if not valid_condition:",
            "#         raise ValueError(\"Validation error message\")",
            "#     return v",
        ],
    );
    w.blank();
}

fn write_field(w: &mut CodeWriter, param: &ParamDecl) {
    w.line(
        1,
        format!("{}: {} = {}", param.name, param.type_token, param.validator),
    );
}

fn write_implementation_hints(w: &mut CodeWriter) {
    w.lines(
        1,
        [
            "# TODO: Implement tool functionality",
            "",
            "# IMPLEMENTATION HINTS:",
            "# 1. For API calls:",
            "# async with aiohttp.ClientSession() as session:",
            "#     async with session.get(f\"https://api.example.com/data?param={param_name}\") as response:",
            "#         data = await response.json()",
            "#         return {\"result\": data}",
            "",
            "# 2. For file operations:",
            "# with open(\"data.json\", \"r\") as f:",
            "#     data = json.load(f)",
            "# return {\"result\": data}",
            "",
            "# 3. For database queries (using SQLite as example):",
            "# import aiosqlite",
            "# async with aiosqlite.connect(\"database.db\") as db:",
            "#     cursor = await db.execute(\"SELECT * FROM table WHERE column = ?\", (param_value,))",
            "#     results = await cursor.fetchall()",
            "#     return {\"result\": results}",
            "",
            "# Example implementation (replace with your actual logic):",
        ],
    );
}

fn echo_expression(tool: &ToolDecl) -> String {
    let name = python_fstring_text(&tool.name);
    if tool.has_params() {
        let values: Vec<String> = tool.param_names().map(|n| format!("{{{n}}}")).collect();
        format!(
            "f\"{name} executed with parameters: {}\"",
            values.join(", ")
        )
    } else {
        format!("f\"{name} executed with no parameters\"")
    }
}

fn write_epilogue(w: &mut CodeWriter) {
    w.blank();
    w.lines(
        0,
        [
            "# Add middleware if needed (e.g., for logging, auth, etc.)",
            "# @server.middleware",
            "# async def log_request(context, next):",
            "#     print(f\"Request: {context.request}\")",
            "#     result = await next()",
            "#     print(f\"Response: {result}\")",
            "#     return result",
            "",
            "# Start the server",
            "if __name__ == \"__main__\":",
        ],
    );
    w.line(1, "server.start()");
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_forge_core::{Constraints, DefaultValue};

    fn param_with(param_type: ParamType, constraints: Constraints) -> Parameter {
        Parameter::new("value", param_type, "A value").with_constraints(constraints)
    }

    #[test]
    fn test_map_type_table() {
        assert_eq!(map_type(ParamType::String), "str");
        assert_eq!(map_type(ParamType::Number), "float");
        assert_eq!(map_type(ParamType::Integer), "int");
        assert_eq!(map_type(ParamType::Boolean), "bool");
        assert_eq!(map_type(ParamType::Array), "List[Any]");
        assert_eq!(map_type(ParamType::Object), "Dict[str, Any]");
        assert_eq!(map_type(ParamType::Date), "datetime.date");
        assert_eq!(map_type(ParamType::Email), "str");
        assert_eq!(map_type(ParamType::Url), "str");
        assert_eq!(map_type(ParamType::Enum), "str");
    }

    #[test]
    fn test_no_constraints_no_fragment() {
        let param = Parameter::new("q", ParamType::String, "Query");
        let fragment = translate_constraints(&param);
        assert!(fragment.is_empty());
        assert_eq!(
            declare_param(&param).validator,
            "Field(description=\"Query\")"
        );
    }

    #[test]
    fn test_numeric_bounds() {
        let param = param_with(
            ParamType::Integer,
            Constraints {
                minimum: Some(1.0),
                maximum: Some(7.0),
                default: Some(DefaultValue::Number(3.into())),
                ..Default::default()
            },
        );
        assert_eq!(translate_constraints(&param).splice(), ", ge=1, le=7, default=3");
    }

    #[test]
    fn test_bounds_ignored_for_strings() {
        let param = param_with(
            ParamType::String,
            Constraints {
                minimum: Some(1.0),
                ..Default::default()
            },
        );
        assert!(translate_constraints(&param).is_empty());
    }

    #[test]
    fn test_enum_literal_override() {
        let param = param_with(
            ParamType::Enum,
            Constraints {
                enum_values: Some(vec!["celsius".to_string(), "fahrenheit".to_string()]),
                default: Some(DefaultValue::String("celsius".to_string())),
                ..Default::default()
            },
        );
        let decl = declare_param(&param);
        assert_eq!(decl.type_token, r#"Literal["celsius", "fahrenheit"]"#);
        assert!(decl.validator.ends_with(r#", default="celsius")"#));
    }

    #[test]
    fn test_enum_without_values_falls_back_to_str() {
        let param = param_with(ParamType::Enum, Constraints::default());
        assert_eq!(declare_param(&param).type_token, "str");
    }

    #[test]
    fn test_boolean_default_is_python_literal() {
        let param = param_with(
            ParamType::Boolean,
            Constraints {
                default: Some(DefaultValue::Bool(true)),
                ..Default::default()
            },
        );
        assert_eq!(translate_constraints(&param).splice(), ", default=True");
    }

    #[test]
    fn test_email_gets_no_format_validator() {
        let param = param_with(
            ParamType::Email,
            Constraints {
                pattern: Some(".+@corp\\.com$".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            translate_constraints(&param).splice(),
            r#", regex=".+@corp\\.com$""#
        );
    }

    #[test]
    fn test_signature_and_model_share_names() {
        let tool = ToolDecl {
            name: "t".to_string(),
            description: String::new(),
            params: vec![
                declare_param(&Parameter::new("First Name", ParamType::String, "")),
                declare_param(&Parameter::new("age", ParamType::Integer, "")),
            ],
        };
        assert_eq!(format_signature(&tool), "first_name: str, age: int");
        assert_eq!(model_name(&tool), "t_params");
    }

    #[test]
    fn test_echo_without_params() {
        let tool = ToolDecl {
            name: "ping".to_string(),
            description: String::new(),
            params: vec![],
        };
        assert_eq!(echo_expression(&tool), "f\"ping executed with no parameters\"");
    }
}
