//! Common types used throughout sample-schema

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered)
pub type JsonObject = serde_json::Map<String, JsonValue>;
