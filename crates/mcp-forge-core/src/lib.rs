//! Core types, settings, and errors for MCP server generation.
//!
//! This crate provides the foundational types shared by the code generator
//! and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - The declarative server description (`ServerConfig`, `Tool`, `Parameter`)
//! - Error hierarchy with contextual information
//! - Generator configuration with the version strings embedded in output
//! - CLI support types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::GeneratorConfig;
pub use error::{Error, FieldError, Result};
pub use types::{
    Constraints, DefaultValue, ParamType, Parameter, ServerConfig, TargetLanguage, Tool,
};
