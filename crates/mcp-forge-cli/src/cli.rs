//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// MCP Forge - generate MCP server skeletons from tool descriptions.
///
/// Reads a JSON server description (server name, target language, tools and
/// their typed parameters) and writes a runnable Python or TypeScript
/// server project.
#[derive(Parser, Debug)]
#[command(name = "mcp-forge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a server project from a JSON description.
    ///
    /// Validates the description first; invalid input is reported field by
    /// field and nothing is written.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Write into ./weather-data-provider/
    /// mcp-forge generate weather.json
    ///
    /// # Custom directory and protocol version
    /// mcp-forge generate weather.json --output ./out --protocol-version 2025-03-26
    /// ```
    Generate {
        /// Path to the server description JSON
        input: PathBuf,

        /// Output directory (default: kebab-case server name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator settings TOML (default: ~/.config/mcp-forge/config.toml)
        #[arg(long, env = "MCP_FORGE_SETTINGS")]
        settings: Option<PathBuf>,

        /// MCP protocol version embedded in generated files
        #[arg(long)]
        protocol_version: Option<String>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a JSON server description without generating.
    ///
    /// Exits with code 2 when the description is invalid.
    Validate {
        /// Path to the server description JSON
        input: PathBuf,
    },

    /// Print one generated file to stdout.
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge preview weather.json
    /// mcp-forge preview weather.json --file README.md
    /// ```
    Preview {
        /// Path to the server description JSON
        input: PathBuf,

        /// File to print (default: the server source)
        #[arg(long)]
        file: Option<String>,

        /// Generator settings TOML (default: ~/.config/mcp-forge/config.toml)
        #[arg(long, env = "MCP_FORGE_SETTINGS")]
        settings: Option<PathBuf>,

        /// MCP protocol version embedded in generated files
        #[arg(long)]
        protocol_version: Option<String>,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// mcp-forge completions bash > /usr/local/etc/bash_completion.d/mcp-forge
    /// ```
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::parse_from([
            "mcp-forge",
            "generate",
            "weather.json",
            "--output",
            "/tmp/out",
            "--protocol-version",
            "2025-03-26",
            "--force",
        ]);
        if let Commands::Generate {
            input,
            output,
            protocol_version,
            force,
            ..
        } = cli.command
        {
            assert_eq!(input, PathBuf::from("weather.json"));
            assert_eq!(output, Some(PathBuf::from("/tmp/out")));
            assert_eq!(protocol_version.as_deref(), Some("2025-03-26"));
            assert!(force);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_validate() {
        let cli = Cli::parse_from(["mcp-forge", "validate", "server.json"]);
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }

    #[test]
    fn test_cli_parsing_preview_file() {
        let cli = Cli::parse_from(["mcp-forge", "preview", "s.json", "--file", "README.md"]);
        if let Commands::Preview { file, .. } = cli.command {
            assert_eq!(file.as_deref(), Some("README.md"));
        } else {
            panic!("Expected Preview command");
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["mcp-forge", "validate", "s.json", "--verbose", "--format", "json"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["mcp-forge", "validate", "s.json"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_parsing_completions_zsh() {
        let cli = Cli::parse_from(["mcp-forge", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["mcp-forge", "generate"]).is_err());
    }
}
