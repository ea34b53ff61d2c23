//! Output formatters for CLI commands.
//!
//! Every command result is a `Serialize` struct rendered in one of three
//! modes: JSON for scripts, plain `key: value` text for logs, and a
//! colorized tree for terminals.

use anyhow::Result;
use colored::Colorize;
use mcp_forge_core::cli::OutputFormat;
use serde::Serialize;
use serde_json::Value;

/// Formats data according to the requested output format.
///
/// # Errors
///
/// Returns an error if the data cannot be converted to JSON.
///
/// # Examples
///
/// ```
/// use mcp_forge_cli::formatters::format_output;
/// use mcp_forge_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     server_name: String,
///     tool_count: usize,
/// }
///
/// let summary = Summary {
///     server_name: "weather".to_string(),
///     tool_count: 2,
/// };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"tool_count\": 2"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, Value};

    /// Formats data as uncolored `key: value` lines.
    ///
    /// Nested objects use dotted keys and arrays use indexed keys, so each
    /// line stands alone for `grep`.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten("", &value, &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(prefix: &str, value: &Value, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, item) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    flatten(&path, item, lines);
                }
            }
            Value::Array(items) if !items.is_empty() => {
                for (i, item) in items.iter().enumerate() {
                    flatten(&format!("{prefix}[{i}]"), item, lines);
                }
            }
            Value::String(s) => lines.push(format!("{prefix}: {s}")),
            other => lines.push(format!("{prefix}: {other}")),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize, Value};

    /// Formats data as a colorized, indented tree.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&value, 0, &mut out);
        Ok(out.trim_end().to_string())
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "-".dimmed().to_string(),
            Value::Bool(true) => "yes".green().to_string(),
            Value::Bool(false) => "no".red().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) if items.is_empty() => "none".dimmed().to_string(),
            Value::Object(_) | Value::Array(_) => String::new(),
        }
    }

    fn is_nested(value: &Value) -> bool {
        match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }

    fn write_value(value: &Value, indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(map) => {
                for (key, item) in map {
                    let label = key.replace('_', " ");
                    if is_nested(item) {
                        out.push_str(&format!("{pad}{}:\n", label.blue().bold()));
                        write_value(item, indent + 1, out);
                    } else {
                        out.push_str(&format!("{pad}{}: {}\n", label.blue().bold(), scalar(item)));
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    if is_nested(item) {
                        out.push_str(&format!("{pad}-\n"));
                        write_value(item, indent + 1, out);
                    } else {
                        out.push_str(&format!("{pad}- {}\n", scalar(item)));
                    }
                }
            }
            other => {
                out.push_str(&format!("{pad}{}\n", scalar(other)));
            }
        }
    }
}
