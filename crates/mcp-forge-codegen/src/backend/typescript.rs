//! TypeScript backend.
//!
//! Generates a Node.js MCP server where each tool is registered with
//! `server.tool({...})`. Every registration carries a `parameters` metadata
//! object, and the handler re-validates its inputs through a sibling Zod
//! object schema built from the same parameter list.
//!
//! # Generated Code Example
//!
//! ```typescript
//! // Parameter validation schema for lookup_user
//! const lookup_user_schema = z.object({
//!   username: z.string().min(3).max(10).regex(/^[a-z]+$/).default("abc"),
//! });
//!
//! server.tool({
//!   name: "lookup_user",
//!   description: "Looks up a user",
//!   parameters: {
//!     username: { type: "string", description: "Login name", minLength: 3, maxLength: 10, pattern: "^[a-z]+$", default: "abc" },
//!   },
//!   handler: async ({ username }) => {
//!     const params = lookup_user_schema.parse({ username });
//!     ...
//!   },
//! });
//! ```

use super::LanguageBackend;
use crate::constraints::{SpliceStyle, ValidatorFragment, default_literal, format_number};
use crate::escape::{js_regex_body, js_template_text, jsdoc_text, single_line, string_literal};
use crate::ir::{ParamDecl, ServerModule, ToolDecl};
use crate::writer::CodeWriter;
use mcp_forge_core::{
    Constraints, DefaultValue, GeneratorConfig, ParamType, Parameter, TargetLanguage,
};

/// TypeScript entry in the dispatch table.
pub static BACKEND: LanguageBackend = LanguageBackend {
    language: TargetLanguage::TypeScript,
    source_file: "server.ts",
    map_type,
    translate_constraints,
    declare_param,
    format_signature,
    print_module,
};

const INDENT: &str = "  ";

/// Maps an abstract parameter type to a TypeScript type.
#[must_use]
pub const fn map_type(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::Number | ParamType::Integer => "number",
        ParamType::Boolean => "boolean",
        ParamType::Array => "any[]",
        ParamType::Object => "Record<string, any>",
        ParamType::Date => "Date",
        ParamType::String
        | ParamType::Email
        | ParamType::Url
        | ParamType::Enum
        | ParamType::Unknown => "string",
    }
}

/// Maps an abstract parameter type to its base Zod schema.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::backend::typescript::zod_base;
/// use mcp_forge_core::ParamType;
///
/// assert_eq!(zod_base(ParamType::Integer), "z.number()");
/// assert_eq!(zod_base(ParamType::Email), "z.string()");
/// assert_eq!(zod_base(ParamType::Object), "z.record(z.any())");
/// ```
#[must_use]
pub const fn zod_base(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::Number | ParamType::Integer => "z.number()",
        ParamType::Boolean => "z.boolean()",
        ParamType::Array => "z.array(z.any())",
        ParamType::Object => "z.record(z.any())",
        ParamType::Date => "z.coerce.date()",
        ParamType::String
        | ParamType::Email
        | ParamType::Url
        | ParamType::Enum
        | ParamType::Unknown => "z.string()",
    }
}

const fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Translates constraints into chained Zod validator calls.
///
/// Format validators for `email` and `url` are added even when a pattern is
/// present. Enum values replace the base schema with `z.enum([...])`.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::backend::typescript::translate_constraints;
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
///     r#".min(3).max(10).regex(/^[a-z]+$/).default("abc")"#
/// );
/// ```
#[must_use]
pub fn translate_constraints(param: &Parameter) -> ValidatorFragment {
    let mut fragment = ValidatorFragment::new(SpliceStyle::ChainedCalls);
    let param_type = param.param_type;
    let constraints = param.constraints.as_ref();

    if param_type.is_string_like()
        && let Some(c) = constraints
    {
        if let Some(min_length) = c.min_length {
            fragment.push(format!(".min({min_length})"));
        }
        if let Some(max_length) = c.max_length {
            fragment.push(format!(".max({max_length})"));
        }
        if let Some(pattern) = c.pattern.as_deref() {
            fragment.push(format!(".regex(/{}/)", js_regex_body(pattern)));
        }
    }

    match param_type {
        ParamType::Email => fragment.push(".email()"),
        ParamType::Url => fragment.push(".url()"),
        ParamType::Integer => fragment.push(".int()"),
        _ => {}
    }

    let Some(constraints) = constraints else {
        return fragment;
    };

    if param_type.is_numeric() {
        if let Some(minimum) = constraints.minimum {
            fragment.push(format!(".gte({})", format_number(minimum)));
        }
        if let Some(maximum) = constraints.maximum {
            fragment.push(format!(".lte({})", format_number(maximum)));
        }
    }

    if param_type == ParamType::Enum
        && let Some(values) = constraints.enum_values()
    {
        let literals: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
        fragment.type_override = Some(format!("z.enum([{}])", literals.join(", ")));
    }

    if let Some(default) = constraints.default.as_ref() {
        let literal = default_literal(param_type, default, bool_literal);
        if param_type == ParamType::Date {
            fragment.push(format!(".default(new Date({literal}))"));
        } else {
            fragment.push(format!(".default({literal})"));
        }
    } else if constraints.required == Some(false) {
        fragment.push(".optional()");
    }

    fragment
}

/// Resolves a parameter into its TypeScript declaration.
///
/// The type token is the mapped TypeScript type, or a union of string
/// literals for enums; the validator is the full Zod schema expression.
#[must_use]
pub fn declare_param(param: &Parameter) -> ParamDecl {
    let fragment = translate_constraints(param);

    let type_token = match param.constraints.as_ref().and_then(Constraints::enum_values) {
        Some(values) if param.param_type == ParamType::Enum => values
            .iter()
            .map(|v| string_literal(v))
            .collect::<Vec<_>>()
            .join(" | "),
        _ => map_type(param.param_type).to_string(),
    };

    let validator = format!(
        "{}{}",
        fragment.resolve_type(zod_base(param.param_type)),
        fragment.splice()
    );
    ParamDecl::new(param, type_token, validator)
}

/// Renders the handler destructuring list: `location, days`.
#[must_use]
pub fn format_signature(tool: &ToolDecl) -> String {
    tool.param_names().collect::<Vec<_>>().join(", ")
}

/// Name of the Zod schema constant generated for a tool.
#[must_use]
pub fn schema_name(tool: &ToolDecl) -> String {
    format!("{}_schema", tool.name)
}

/// Renders the registration metadata entry for one parameter:
/// `{ type: "string", description: "...", minLength: 3 }`.
#[must_use]
pub fn metadata_entry(param: &ParamDecl) -> String {
    let mut fields = vec![
        format!("type: {}", string_literal(param.param_type.as_str())),
        format!("description: {}", string_literal(&param.description)),
    ];
    fields.extend(
        constraint_echoes(&param.constraints)
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}")),
    );
    format!("{{ {} }}", fields.join(", "))
}

/// Registration metadata echoes, rendered as TypeScript literals.
///
/// Bounds use the same number formatting as the Zod chain, so `minimum: 1`
/// sits beside `.gte(1)`.
fn constraint_echoes(constraints: &Constraints) -> Vec<(&'static str, String)> {
    let mut echoes = Vec::new();
    if let Some(min_length) = constraints.min_length {
        echoes.push(("minLength", min_length.to_string()));
    }
    if let Some(max_length) = constraints.max_length {
        echoes.push(("maxLength", max_length.to_string()));
    }
    if let Some(pattern) = constraints.pattern.as_deref() {
        echoes.push(("pattern", string_literal(pattern)));
    }
    if let Some(minimum) = constraints.minimum {
        echoes.push(("minimum", format_number(minimum)));
    }
    if let Some(maximum) = constraints.maximum {
        echoes.push(("maximum", format_number(maximum)));
    }
    if let Some(values) = constraints.enum_values() {
        let literals: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
        echoes.push(("enum", format!("[{}]", literals.join(", "))));
    }
    if let Some(default) = constraints.default.as_ref() {
        let literal = match default {
            DefaultValue::Bool(b) => bool_literal(*b).to_string(),
            DefaultValue::Number(n) => n.to_string(),
            DefaultValue::String(text) => string_literal(text),
        };
        echoes.push(("default", literal));
    }
    if let Some(required) = constraints.required {
        echoes.push(("required", bool_literal(required).to_string()));
    }
    echoes
}

/// Prints the complete TypeScript server source.
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
    w.comment(0, "//", &module.server_name);
    w.line(0, "//");
    if !module.description.is_empty() {
        w.comment(0, "//", &module.description);
        w.line(0, "//");
    }
    w.line(
        0,
        format!(
            "// MCP protocol version {}, TypeScript SDK @modelcontextprotocol/sdk@{}, zod@{}",
            config.protocol_version, config.typescript_sdk_version, config.zod_version
        ),
    );
    w.blank();
    w.lines(
        0,
        [
            "import { MCPServer } from \"@modelcontextprotocol/sdk\";",
            "import { z } from \"zod\";",
            "",
            "// Initialize the MCP server with security options",
            "const server = new MCPServer({",
        ],
    );
    w.line(1, format!("name: {},", string_literal(&module.server_name)));
    w.line(1, format!("description: {},", string_literal(&module.description)));
    w.lines(
        1,
        [
            "// Uncomment to enable authentication",
            "// auth: {",
            "//   apiKeys: [\"your-secret-key\"], // Replace with actual API keys or use environment variables",
            "// },",
        ],
    );
    w.line(0, "});");
    w.blank();
}

fn write_tool(w: &mut CodeWriter, tool: &ToolDecl) {
    w.blank();
    if tool.has_params() {
        write_schema(w, tool);
    }

    write_jsdoc(w, tool);
    w.line(0, "server.tool({");
    w.line(1, format!("name: {},", string_literal(&tool.name)));
    w.line(1, format!("description: {},", string_literal(&tool.description)));

    if tool.has_params() {
        w.line(1, "parameters: {");
        for param in &tool.params {
            w.line(2, format!("{}: {},", param.name, metadata_entry(param)));
        }
        w.line(1, "},");
        w.line(
            1,
            format!("handler: async ({{ {} }}) => {{", format_signature(tool)),
        );
        w.line(2, "// Validate parameters");
        w.line(
            2,
            format!(
                "const params = {}.parse({{ {} }});",
                schema_name(tool),
                format_signature(tool)
            ),
        );
        w.blank();
    } else {
        w.line(1, "parameters: {},");
        w.line(1, "handler: async () => {");
    }

    write_implementation_hints(w);
    w.line(2, format!("return {{ result: {} }};", echo_expression(tool)));
    w.line(1, "},");
    w.line(0, "});");
}

fn write_schema(w: &mut CodeWriter, tool: &ToolDecl) {
    w.line(0, format!("// Parameter validation schema for {}", tool.name));
    w.line(0, format!("const {} = z.object({{", schema_name(tool)));
    for param in &tool.params {
        w.line(1, format!("{}: {},", param.name, param.validator));
    }
    w.line(0, "});");
    w.blank();
}

fn write_jsdoc(w: &mut CodeWriter, tool: &ToolDecl) {
    w.line(0, "/**");
    w.line(0, format!(" * {}", jsdoc_text(&single_line(&tool.description))));
    for param in &tool.params {
        let description = jsdoc_text(&single_line(&param.description));
        let tag = format!(
            " * @param {{{}}} {}",
            jsdoc_text(&param.type_token),
            param.name
        );
        if description.is_empty() {
            w.line(0, tag);
        } else {
            w.line(0, format!("{tag} - {description}"));
        }
    }
    w.line(0, " */");
}

fn write_implementation_hints(w: &mut CodeWriter) {
    w.lines(
        2,
        [
            "// TODO: Implement tool functionality",
            "",
            "// IMPLEMENTATION HINTS:",
            "// 1. For API calls:",
            "// const response = await fetch(`https://api.example.com/data?param=${encodeURIComponent(paramName)}`);",
            "// const data = await response.json();",
            "// return { result: data };",
            "",
            "// 2. For file operations:",
            "// import { readFile } from \"fs/promises\";",
            "// const data = JSON.parse(await readFile(\"data.json\", \"utf-8\"));",
            "// return { result: data };",
            "",
            "// 3. For database queries (using SQLite as example):",
            "// import Database from \"better-sqlite3\";",
            "// const db = new Database(\"database.db\");",
            "// const rows = db.prepare(\"SELECT * FROM table WHERE column = ?\").all(paramValue);",
            "// return { result: rows };",
            "",
            "// Example implementation (replace with your actual logic):",
        ],
    );
}

fn echo_expression(tool: &ToolDecl) -> String {
    let name = js_template_text(&tool.name);
    if tool.has_params() {
        let values: Vec<String> = tool.param_names().map(|n| format!("${{{n}}}")).collect();
        format!("`{name} executed with parameters: {}`", values.join(", "))
    } else {
        format!("`{name} executed with no parameters`")
    }
}

fn write_epilogue(w: &mut CodeWriter) {
    w.blank();
    w.lines(
        0,
        [
            "// Start the server",
            "server.start().catch((error) => {",
        ],
    );
    w.lines(
        1,
        [
            "console.error(\"Failed to start server:\", error);",
            "process.exit(1);",
        ],
    );
    w.lines(
        0,
        [
            "});",
            "",
            "// Graceful shutdown",
            "process.on(\"SIGINT\", async () => {",
        ],
    );
    w.lines(
        1,
        [
            "console.log(\"Shutting down server...\");",
            "await server.stop();",
            "process.exit(0);",
        ],
    );
    w.line(0, "});");
}
