//! Output module
//!
//! Serializes inferred schemas and writes them to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Rendering a schema as compact or pretty JSON
//! - Writing schema files atomically

mod writer;

pub use writer::{render_schema, write_schema, SchemaWriter};
