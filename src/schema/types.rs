//! Schema types

use crate::error::Result;
use crate::types::JsonValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inferred attribute kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Integer,
    /// Empty list, or a list whose first element is a string
    Enum,
    /// List whose first element is an object
    Array,
    /// Anything the heuristic does not recognise
    Invalid,
}

impl Kind {
    /// Name used in the serialized schema
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Enum => "enum",
            Kind::Array => "array",
            Kind::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf entry of a schema.
///
/// `tag`, `description` and `required` are placeholders for later annotation;
/// generation always leaves them empty / false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    #[serde(rename = "type")]
    pub kind: Kind,
    pub tag: String,
    pub description: String,
    pub required: bool,
}

impl Descriptor {
    /// Create a descriptor with empty annotation placeholders
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            tag: String::new(),
            description: String::new(),
            required: false,
        }
    }
}

/// Value stored under a schema key.
///
/// When reading a schema back, an object that is a valid descriptor is taken
/// as a leaf; anything else is a nested schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaNode {
    /// Non-object source value
    Descriptor(Descriptor),
    /// Object source value, inferred recursively
    Nested(Schema),
}

impl SchemaNode {
    /// Descriptor at this node, if it is a leaf
    pub fn as_descriptor(&self) -> Option<&Descriptor> {
        match self {
            SchemaNode::Descriptor(d) => Some(d),
            SchemaNode::Nested(_) => None,
        }
    }

    /// Nested schema at this node, if the source was an object
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaNode::Nested(s) => Some(s),
            SchemaNode::Descriptor(_) => None,
        }
    }

    /// Kind of a leaf node (`None` for nested schemas)
    pub fn kind(&self) -> Option<Kind> {
        self.as_descriptor().map(|d| d.kind)
    }
}

/// Inferred schema, mirroring the key order of its source object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: IndexMap<String, SchemaNode>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty schema with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a node. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, node: SchemaNode) {
        self.entries.insert(key.into(), node);
    }

    /// Get the node stored under `key`
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries.get(key)
    }

    /// Follow a path of keys through nested schemas
    pub fn lookup(&self, path: &[&str]) -> Option<&SchemaNode> {
        let (first, rest) = path.split_first()?;
        let node = self.get(first)?;
        if rest.is_empty() {
            Some(node)
        } else {
            node.as_schema()?.lookup(rest)
        }
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of descriptors at any depth
    pub fn descriptor_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                SchemaNode::Descriptor(_) => 1,
                SchemaNode::Nested(nested) => nested.descriptor_count(),
            })
            .sum()
    }

    /// Convert to a JSON value (key order preserved)
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}
