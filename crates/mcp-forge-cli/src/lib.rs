//! MCP server generator CLI library.
//!
//! Exposes the argument definitions, command implementations, and output
//! formatters behind the `mcp-forge` binary so they can be tested.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unused_async)]

pub mod cli;
pub mod commands;
pub mod formatters;

pub use cli::{Cli, Commands};
