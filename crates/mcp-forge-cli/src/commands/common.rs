//! Common utilities shared across CLI commands.
//!
//! Loading the server description and resolving generator settings.

use anyhow::{Context, Result};
use mcp_forge_core::{GeneratorConfig, ServerConfig};
use std::path::Path;
use tracing::{debug, error};

/// Reads and parses a JSON server description.
///
/// Returns `Ok(None)` when the file was read but is not a valid server
/// description; the parse error has already been reported on stderr and
/// the caller should exit with [`ExitCode::INVALID_INPUT`].
///
/// [`ExitCode::INVALID_INPUT`]: mcp_forge_core::cli::ExitCode::INVALID_INPUT
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn load_server_config(path: &Path) -> Result<Option<ServerConfig>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read server description {}", path.display()))?;

    match ServerConfig::from_json(&json) {
        Ok(config) => {
            debug!(
                "Loaded '{}' with {} tools from {}",
                config.server_name,
                config.tools.len(),
                path.display()
            );
            Ok(Some(config))
        }
        Err(e) => {
            error!("Invalid server description {}: {e}", path.display());
            eprintln!("error: {}: {e}", path.display());
            Ok(None)
        }
    }
}

/// Resolves generator settings, applying a protocol version override.
///
/// # Errors
///
/// Returns an error if a settings file exists but cannot be parsed.
pub fn resolve_settings(
    settings: Option<&Path>,
    protocol_version: Option<String>,
) -> Result<GeneratorConfig> {
    let mut config =
        GeneratorConfig::resolve(settings).context("failed to load generator settings")?;

    if let Some(version) = protocol_version {
        debug!("Overriding protocol version: {version}");
        config.protocol_version = version;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_valid_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.json");
        tokio::fs::write(&path, r#"{"serverName": "Demo", "serverType": "python"}"#)
            .await
            .unwrap();

        let config = load_server_config(&path).await.unwrap().unwrap();
        assert_eq!(config.server_name, "Demo");
    }

    #[tokio::test]
    async fn test_load_malformed_description_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        assert!(load_server_config(&path).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_server_config(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_protocol_version_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "node_version = \"22\"\n").unwrap();

        let config = resolve_settings(Some(&path), Some("2025-03-26".to_string())).unwrap();
        assert_eq!(config.protocol_version, "2025-03-26");
        assert_eq!(config.node_version, "22");
    }
}
