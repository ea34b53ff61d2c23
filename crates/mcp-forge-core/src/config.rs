//! Generator configuration.
//!
//! Version strings embedded into generated source, README text, and
//! manifests. They are injected constants: the generator never computes
//! them, and every emitter receives them explicitly.
//!
//! Settings are resolved in layers by the caller: built-in defaults, then an
//! optional user settings file (`~/.config/mcp-forge/config.toml`), then an
//! explicit settings file, then individual overrides.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.protocol_version, "2024-11-05");
//!
//! let custom = GeneratorConfig {
//!     protocol_version: "2025-03-26".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(custom.python_version, "3.11");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version strings threaded through every emitter call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// MCP protocol version the generated server advertises
    pub protocol_version: String,

    /// Version of the Python MCP SDK pinned in `requirements.txt`
    pub python_sdk_version: String,

    /// Version of the TypeScript MCP SDK pinned in `package.json`
    pub typescript_sdk_version: String,

    /// Version of Zod pinned in `package.json`
    pub zod_version: String,

    /// Pydantic requirement specifier.
    ///
    /// Generated models use `regex=` field arguments, which require
    /// Pydantic 1.x.
    pub pydantic_version_spec: String,

    /// Python interpreter version used in the Dockerfile
    pub python_version: String,

    /// Node.js version used in the Dockerfile
    pub node_version: String,

    /// Version written into generated package manifests
    pub server_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            protocol_version: "2024-11-05".to_string(),
            python_sdk_version: "1.2.0".to_string(),
            typescript_sdk_version: "1.0.4".to_string(),
            zod_version: "3.23.8".to_string(),
            pydantic_version_spec: ">=1.10,<2".to_string(),
            python_version: "3.11".to_string(),
            node_version: "20".to_string(),
            server_version: "1.0.0".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// File name of the user settings file.
    pub const FILE_NAME: &'static str = "config.toml";

    /// Parses settings from TOML.
    ///
    /// Missing keys keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the TOML is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_forge_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::from_toml_str("node_version = \"22\"").unwrap();
    /// assert_eq!(config.node_version, "22");
    /// assert_eq!(config.python_version, "3.11");
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::ConfigError {
            message: format!("Failed to parse generator settings: {e}"),
        })
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::ConfigError`] if it is malformed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded generator settings from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Returns the default user settings path, if a config directory exists.
    #[must_use]
    pub fn user_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mcp-forge").join(Self::FILE_NAME))
    }

    /// Resolves settings from defaults, the user settings file, and an
    /// optional explicit file.
    ///
    /// The user settings file is skipped silently when absent; an explicit
    /// file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a settings file exists but cannot be read or
    /// parsed.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::user_settings_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_versions() {
        let config = GeneratorConfig::default();
        assert_eq!(config.protocol_version, "2024-11-05");
        assert_eq!(config.pydantic_version_spec, ">=1.10,<2");
        assert_eq!(config.server_version, "1.0.0");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml_str(
            "protocol_version = \"2025-03-26\"\nzod_version = \"3.22.0\"\n",
        )
        .unwrap();
        assert_eq!(config.protocol_version, "2025-03-26");
        assert_eq!(config.zod_version, "3.22.0");
        assert_eq!(config.node_version, "20");
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = GeneratorConfig::from_toml_str("protocol_version = ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "python_version = \"3.12\"").unwrap();

        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.python_version, "3.12");
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = GeneratorConfig::resolve(Some(&missing)).unwrap_err();
        assert!(err.is_io_error());
    }
}
