//! Code generation for MCP server skeletons.
//!
//! Turns a declarative [`ServerConfig`](mcp_forge_core::ServerConfig) into
//! runnable Python or TypeScript server source plus the project files around
//! it.
//!
//! # Architecture
//!
//! - [`backend`]: per-language dispatch table (type mapping, constraint
//!   translation, signature formatting, source printing)
//! - [`ir`]: intermediate representation shared by every printed artifact of
//!   a tool, so signature, schema, and model always agree on names
//! - [`emitter`]: primary server source
//! - [`ancillary`] and [`template_engine`]: README, Dockerfile, install
//!   script, and manifests
//! - [`validation`]: input checks that run before generation
//! - [`generator`]: bundles everything into [`GeneratedCode`]

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod ancillary;
pub mod backend;
pub mod constraints;
pub mod emitter;
pub mod escape;
pub mod generator;
pub mod identifier;
pub mod ir;
pub mod template_engine;
pub mod types;
pub mod validation;
pub mod writer;

pub use emitter::emit_server;
pub use generator::ServerGenerator;
pub use types::{GeneratedCode, GeneratedFile};
pub use validation::{ValidationLimits, validate_server_config};
