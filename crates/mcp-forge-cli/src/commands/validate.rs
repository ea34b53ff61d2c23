//! Validate command implementation.
//!
//! Checks a server description against the generator's validation rules
//! without producing any files.

use super::common::load_server_config;
use crate::formatters::format_output;
use anyhow::Result;
use mcp_forge_codegen::{ValidationLimits, validate_server_config};
use mcp_forge_core::cli::{ExitCode, OutputFormat};
use mcp_forge_core::{FieldError, ServerConfig};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Outcome of validating a server description.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Whether the description passed every check
    pub valid: bool,
    /// Server display name
    pub server_name: String,
    /// Target language
    pub language: String,
    /// Number of tools declared
    pub tool_count: usize,
    /// Number of parameters across all tools
    pub parameter_count: usize,
    /// Field-level problems, empty when valid
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Validates `config` and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only for failures other than rule violations.
    pub fn check(config: &ServerConfig, limits: &ValidationLimits) -> Result<Self> {
        let errors = match validate_server_config(config, limits) {
            Ok(()) => Vec::new(),
            Err(e) if e.is_validation_error() => e.field_errors().to_vec(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            valid: errors.is_empty(),
            server_name: config.server_name.clone(),
            language: config.server_type.as_str().to_string(),
            tool_count: config.tools.len(),
            parameter_count: config.parameter_count(),
            errors,
        })
    }
}

/// Runs the validate command.
///
/// Returns [`ExitCode::INVALID_INPUT`] when the description is malformed or
/// breaks a validation rule.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the report cannot be
/// formatted.
pub async fn run(input: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    info!("Validating {}", input.display());

    let Some(config) = load_server_config(input).await? else {
        return Ok(ExitCode::INVALID_INPUT);
    };

    let report = ValidationReport::check(&config, &ValidationLimits::default())?;
    println!("{}", format_output(&report, output_format)?);

    if report.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        info!("{} validation errors", report.errors.len());
        Ok(ExitCode::INVALID_INPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_forge_core::{ParamType, Parameter, TargetLanguage, Tool};

    fn config() -> ServerConfig {
        ServerConfig {
            server_name: "Notes".to_string(),
            description: "Note taking".to_string(),
            server_type: TargetLanguage::Python,
            tools: vec![Tool::new(
                "add_note",
                "Adds a note",
                vec![Parameter::new("body", ParamType::String, "Note text")],
            )],
        }
    }

    #[test]
    fn test_report_valid() {
        let report = ValidationReport::check(&config(), &ValidationLimits::default()).unwrap();
        assert!(report.valid);
        assert_eq!(report.tool_count, 1);
        assert_eq!(report.parameter_count, 1);
        assert_eq!(report.language, "python");
    }

    #[test]
    fn test_report_collects_errors() {
        let mut config = config();
        config.tools[0].parameters.push(Parameter::new("body", ParamType::String, "Again"));
        config.description.clear();

        let report = ValidationReport::check(&config, &ValidationLimits::default()).unwrap();
        assert!(!report.valid);
        assert!(report.errors.len() >= 2);
        assert!(report.errors.iter().any(|e| e.field == "description"));
    }
}
