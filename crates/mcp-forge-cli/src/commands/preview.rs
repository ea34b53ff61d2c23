//! Preview command implementation.
//!
//! Prints a single generated file to stdout without touching the
//! filesystem.

use super::common::{load_server_config, resolve_settings};
use crate::formatters::format_output;
use anyhow::{Result, anyhow};
use mcp_forge_codegen::{
    GeneratedCode, GeneratedFile, ServerGenerator, ValidationLimits, validate_server_config,
};
use mcp_forge_core::cli::{ExitCode, OutputFormat};
use std::path::Path;
use tracing::{info, warn};

/// Selects the file to preview, defaulting to the server source.
///
/// # Errors
///
/// Returns an error naming the available files if `name` matches none.
pub fn select_file<'a>(code: &'a GeneratedCode, name: Option<&str>) -> Result<&'a GeneratedFile> {
    let selected = match name {
        Some(name) => code.get(name),
        None => code.primary(),
    };

    selected.ok_or_else(|| {
        let available: Vec<&str> = code.files().map(GeneratedFile::path).collect();
        anyhow!(
            "no generated file named '{}'; available: {}",
            name.unwrap_or_default(),
            available.join(", ")
        )
    })
}

/// Runs the preview command.
///
/// Generation is total, so descriptions that fail validation still
/// preview; the problems are logged as warnings. In JSON mode the file is
/// printed as `{ "path", "content" }`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, settings cannot be
/// loaded, or the requested file does not exist.
pub async fn run(
    input: &Path,
    file: Option<&str>,
    settings: Option<&Path>,
    protocol_version: Option<String>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let Some(config) = load_server_config(input).await? else {
        return Ok(ExitCode::INVALID_INPUT);
    };

    if let Err(e) = validate_server_config(&config, &ValidationLimits::default()) {
        for problem in e.field_errors() {
            warn!("{problem}");
        }
    }

    let generator = ServerGenerator::new(resolve_settings(settings, protocol_version)?)?;
    let code = generator.generate(&config)?;
    let selected = select_file(&code, file)?;
    info!("Previewing {}", selected.path());

    match output_format {
        OutputFormat::Json => println!("{}", format_output(selected, output_format)?),
        OutputFormat::Text | OutputFormat::Pretty => print!("{}", selected.content()),
    }

    Ok(ExitCode::SUCCESS)
}
