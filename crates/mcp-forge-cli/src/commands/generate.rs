//! Generate command implementation.
//!
//! Turns a JSON server description into a runnable server project:
//! 1. Loads and validates the description
//! 2. Resolves generator settings
//! 3. Generates the server source and ancillary files
//! 4. Writes everything to the output directory

use super::common::{load_server_config, resolve_settings};
use super::validate::ValidationReport;
use crate::formatters::format_output;
use anyhow::{Context, Result, bail};
use mcp_forge_codegen::identifier::to_kebab_case;
use mcp_forge_codegen::{GeneratedCode, GeneratedFile, ServerGenerator, ValidationLimits};
use mcp_forge_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Path to the server description JSON
    pub input: PathBuf,
    /// Output directory; defaults to the kebab-case server name
    pub output: Option<PathBuf>,
    /// Explicit generator settings file
    pub settings: Option<PathBuf>,
    /// Protocol version override
    pub protocol_version: Option<String>,
    /// Overwrite existing files
    pub force: bool,
}

/// Result of project generation.
#[derive(Debug, Serialize)]
pub struct GenerationResult {
    /// Server display name
    pub server_name: String,
    /// Target language
    pub language: String,
    /// Directory the project was written to
    pub output_dir: String,
    /// Number of tools in the server
    pub tool_count: usize,
    /// Files written, relative to `output_dir`
    pub files: Vec<String>,
    /// Total bytes written
    pub total_bytes: usize,
}

/// Runs the generate command.
///
/// Invalid descriptions are reported field by field and nothing is
/// written.
///
/// # Errors
///
/// Returns an error if:
/// - The input or settings file cannot be read
/// - An output file already exists and `force` is not set
/// - Writing to the output directory fails
///
/// # Examples
///
/// ```no_run
/// use mcp_forge_cli::commands::generate::{self, GenerateOptions};
/// use mcp_forge_core::cli::{ExitCode, OutputFormat};
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let options = GenerateOptions {
///     input: "weather.json".into(),
///     output: Some("./weather".into()),
///     ..Default::default()
/// };
/// let code = generate::run(options, OutputFormat::Pretty).await?;
/// assert_eq!(code, ExitCode::SUCCESS);
/// # Ok(())
/// # }
/// ```
pub async fn run(options: GenerateOptions, output_format: OutputFormat) -> Result<ExitCode> {
    let Some(config) = load_server_config(&options.input).await? else {
        return Ok(ExitCode::INVALID_INPUT);
    };

    let report = ValidationReport::check(&config, &ValidationLimits::default())?;
    if !report.valid {
        warn!("Refusing to generate from an invalid description");
        println!("{}", format_output(&report, output_format)?);
        return Ok(ExitCode::INVALID_INPUT);
    }

    let settings = resolve_settings(options.settings.as_deref(), options.protocol_version)?;
    let generator = ServerGenerator::new(settings)?;
    let code = generator.generate(&config)?;

    let output_dir = options
        .output
        .unwrap_or_else(|| PathBuf::from(to_kebab_case(&config.server_name)));

    write_project(&code, &output_dir, options.force).await?;

    info!(
        "Wrote {} files to {}",
        code.file_count(),
        output_dir.display()
    );

    let result = GenerationResult {
        server_name: config.server_name.clone(),
        language: config.server_type.as_str().to_string(),
        output_dir: output_dir.display().to_string(),
        tool_count: config.tools.len(),
        files: code.files().map(|f| f.path().to_string()).collect(),
        total_bytes: code.total_bytes(),
    };

    println!("{}", format_output(&result, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Writes every generated file under `output_dir`.
///
/// Existing files are checked before anything is written, so a refused
/// run leaves the directory untouched.
///
/// # Errors
///
/// Returns an error if a file exists and `force` is false, or if any
/// filesystem operation fails.
pub async fn write_project(code: &GeneratedCode, output_dir: &Path, force: bool) -> Result<()> {
    if !force {
        for file in code.files() {
            let target = output_dir.join(file.path());
            if tokio::fs::try_exists(&target).await.unwrap_or(false) {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    target.display()
                );
            }
        }
    }

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    for file in code.files() {
        write_file(output_dir, file).await?;
    }

    Ok(())
}

async fn write_file(output_dir: &Path, file: &GeneratedFile) -> Result<()> {
    let target = output_dir.join(file.path());
    tokio::fs::write(&target, file.content())
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
    debug!("Wrote {}", target.display());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if file.is_executable() {
            tokio::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755))
                .await
                .with_context(|| format!("failed to mark {} executable", target.display()))?;
        }
    }

    Ok(())
}
