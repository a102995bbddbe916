//! JSON parser for sample documents

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Load a sample document from a file
pub fn load_document(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::input_read(path, e))?;
    parse_document(&content, path)
}

/// Parse a sample document from a string.
///
/// `origin` is only used to label errors.
pub fn parse_document(content: &str, origin: impl AsRef<Path>) -> Result<JsonValue> {
    serde_json::from_str(content).map_err(|e| Error::input_parse(origin, e))
}

/// Select the object stored under `key` in a sample document.
///
/// A missing key yields an empty object. Every other top-level key is
/// ignored.
pub fn extract_message<'a>(document: &'a JsonValue, key: &str) -> Result<Cow<'a, JsonObject>> {
    let JsonValue::Object(root) = document else {
        return Err(Error::invalid_document(format!(
            "expected a top-level object, found {}",
            value_kind(document)
        )));
    };

    match root.get(key) {
        None => Ok(Cow::Owned(JsonObject::new())),
        Some(JsonValue::Object(message)) => Ok(Cow::Borrowed(message)),
        Some(other) => Err(Error::invalid_document(format!(
            "expected '{key}' to be an object, found {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
