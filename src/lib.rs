//! # sample-schema
//!
//! Infers an annotatable schema from a single sample JSON document.
//!
//! The object under the document's `message` key is walked recursively.
//! Nested objects become nested schemas; every other value is replaced by a
//! descriptor holding its inferred kind plus empty `tag`, `description` and
//! `required` placeholders for later hand annotation.
//!
//! ## Quick Start
//!
//! ```rust
//! use sample_schema::schema::{generate_schema, Kind};
//! use serde_json::json;
//!
//! let message = json!({"time": 890, "countries": ["AB", "CD"]});
//! let schema = generate_schema(message.as_object().unwrap());
//!
//! assert_eq!(schema.get("time").unwrap().kind(), Some(Kind::Integer));
//! assert_eq!(schema.get("countries").unwrap().kind(), Some(Kind::Enum));
//! ```
//!
//! ## Kinds
//!
//! | Sample value                    | Kind      |
//! |---------------------------------|-----------|
//! | string                          | `string`  |
//! | integer                         | `integer` |
//! | `[]` or list starting with text | `enum`    |
//! | list starting with an object    | `array`   |
//! | anything else                   | `invalid` |

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Kind classification and schema inference
pub mod schema;

/// Generator configuration
pub mod config;

/// Sample document loading
pub mod loader;

/// Schema serialization and file output
pub mod output;

/// Load, infer and write orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{GeneratorConfig, SchemaFormat};
pub use engine::{GenerationReport, SchemaEngine};
pub use error::{Error, Result};
pub use schema::{classify, generate_schema, Descriptor, Kind, Schema, SchemaInferrer, SchemaNode};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
