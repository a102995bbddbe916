//! Schema inference module
//!
//! Infers an annotatable schema from a single sample message.
//!
//! # Features
//!
//! - **Kind Classification**: Maps each leaf value to `string`, `integer`,
//!   `enum`, `array` or `invalid`
//! - **Nested Object Support**: Objects become nested schemas rather than
//!   receiving a kind of their own
//! - **Annotation Placeholders**: Every leaf carries empty `tag`,
//!   `description` and `required` fields

mod inference;
mod types;

pub use inference::{classify, generate_schema, SchemaInferrer};
pub use types::{Descriptor, Kind, Schema, SchemaNode};
