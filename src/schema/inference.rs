//! Schema inference from a sample message

use super::types::{Descriptor, Kind, Schema, SchemaNode};
use crate::types::{JsonObject, JsonValue};

/// Schema inferrer with configuration options
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    /// Classify booleans as integers instead of `invalid`
    bool_as_integer: bool,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable classifying booleans as integers
    #[must_use]
    pub fn with_bool_as_integer(mut self, enabled: bool) -> Self {
        self.bool_as_integer = enabled;
        self
    }

    /// Classify a single non-object value.
    ///
    /// Lists are judged by their first element only. Objects are never
    /// classified by [`SchemaInferrer::infer`]; passed here directly they
    /// come out as [`Kind::Invalid`].
    pub fn classify(&self, value: &JsonValue) -> Kind {
        match value {
            JsonValue::String(_) => Kind::String,
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            JsonValue::Bool(_) if self.bool_as_integer => Kind::Integer,
            JsonValue::Array(items) => match items.first() {
                None | Some(JsonValue::String(_)) => Kind::Enum,
                Some(JsonValue::Object(_)) => Kind::Array,
                Some(_) => Kind::Invalid,
            },
            _ => Kind::Invalid,
        }
    }

    /// Infer a schema for an object, recursing into nested objects
    pub fn infer(&self, message: &JsonObject) -> Schema {
        let mut schema = Schema::with_capacity(message.len());

        for (key, val) in message {
            let node = match val {
                JsonValue::Object(nested) => SchemaNode::Nested(self.infer(nested)),
                other => SchemaNode::Descriptor(Descriptor::new(self.classify(other))),
            };
            schema.insert(key.as_str(), node);
        }

        schema
    }
}

/// Classify a value with default settings (convenience function)
pub fn classify(value: &JsonValue) -> Kind {
    SchemaInferrer::new().classify(value)
}

/// Infer a schema with default settings (convenience function)
pub fn generate_schema(message: &JsonObject) -> Schema {
    SchemaInferrer::new().infer(message)
}
