//! Sample document loader
//!
//! Reads a sample JSON document and extracts the message object that
//! inference runs on.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_document` - Read and parse a JSON file
//! - `parse_document` - Parse JSON text already in memory
//! - `extract_message` - Select the object under the message key

mod parser;

pub use parser::{extract_message, load_document, parse_document};
