//! MCP Forge CLI.
//!
//! Command-line front end for the MCP server skeleton generator.
//!
//! # Examples
//!
//! ```bash
//! # Check a description
//! mcp-forge validate weather.json
//!
//! # Generate the project
//! mcp-forge generate weather.json --output ./weather
//! ```

use anyhow::Result;
use clap::Parser;
use mcp_forge_cli::commands;
use mcp_forge_cli::{Cli, Commands};
use mcp_forge_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Parse output format
    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    // Execute command and get exit code
    let exit_code = execute_command(cli.command, output_format).await?;

    // Exit with appropriate code
    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            input,
            output,
            settings,
            protocol_version,
            force,
        } => {
            let options = commands::generate::GenerateOptions {
                input,
                output,
                settings,
                protocol_version,
                force,
            };
            commands::generate::run(options, output_format).await
        }
        Commands::Validate { input } => commands::validate::run(&input, output_format).await,
        Commands::Preview {
            input,
            file,
            settings,
            protocol_version,
        } => {
            commands::preview::run(
                &input,
                file.as_deref(),
                settings.as_deref(),
                protocol_version,
                output_format,
            )
            .await
        }
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}
