//! Error types for MCP server generation.
//!
//! This module provides the error hierarchy used across every crate in the
//! workspace. Generation itself never fails for a structurally valid
//! configuration; errors come from loading settings, validating input,
//! rendering ancillary templates, and writing output.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_core::{Error, Result};
//!
//! fn load_settings(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Settings path cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = load_settings("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for MCP server generation.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when generator settings cannot be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when a server description or manifest cannot be converted
    /// to or from JSON.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The server description failed validation.
    ///
    /// Carries every field-level problem found, not just the first one.
    #[error("Invalid server configuration ({} error(s)): {}", .errors.len(), FieldErrorList(.errors))]
    ValidationFailed {
        /// Field-level validation errors in discovery order
        errors: Vec<FieldError>,
    },

    /// A Handlebars template could not be registered or rendered.
    #[error("Template '{template}' failed: {message}")]
    TemplateError {
        /// Template name
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_forge_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid protocol version".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_forge_core::{Error, FieldError};
    ///
    /// let err = Error::ValidationFailed {
    ///     errors: vec![FieldError::new("serverName", "Server name is required")],
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationFailed { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns the field errors carried by a validation failure.
    ///
    /// Empty for every other variant.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }
}

/// A single field-level validation problem.
///
/// `field` is a path into the server description such as
/// `tools[0].parameters[1].name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

struct FieldErrorList<'a>(&'a [FieldError]);

impl fmt::Display for FieldErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Result type alias for generation operations.
///
/// # Examples
///
/// ```
/// use mcp_forge_core::{Result, Error};
///
/// fn check_tool_count(count: usize) -> Result<usize> {
///     if count == 0 {
///         return Err(Error::InvalidArgument("no tools".to_string()));
///     }
///     Ok(count)
/// }
///
/// assert!(check_tool_count(3).is_ok());
/// assert!(check_tool_count(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
