//! Command implementations for the MCP Forge CLI.
//!
//! Each command reads its input, runs the operation, and formats the result
//! according to the requested output format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod preview;
pub mod validate;
