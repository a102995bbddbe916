//! Integration tests
//!
//! Tests the full flow: sample file on disk → inferred schema → schema file

use pretty_assertions::assert_eq;
use sample_schema::config::derive_schema_path;
use sample_schema::{GeneratorConfig, Kind, SchemaEngine, SchemaFormat};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn leaf(kind: &str) -> Value {
    json!({"type": kind, "tag": "", "description": "", "required": false})
}

fn write_sample(dir: &Path, name: &str, document: &Value) -> std::path::PathBuf {
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    let path = data_dir.join(name);
    fs::write(&path, serde_json::to_string(document).unwrap()).unwrap();
    path
}

/// Run with the schema path derived from the sample's path relative to
/// `dir`, so nothing above the temp dir takes part in the derivation
fn run_derived(dir: &Path, input: &Path) -> Value {
    let relative = input.strip_prefix(dir).unwrap();
    let schema_path = dir.join(derive_schema_path(relative).unwrap());
    fs::create_dir_all(schema_path.parent().unwrap()).unwrap();

    let report = SchemaEngine::new(GeneratorConfig::new(input, schema_path))
        .run()
        .unwrap();

    serde_json::from_str(&fs::read_to_string(report.schema_path).unwrap()).unwrap()
}

#[test]
fn test_end_to_end_integer() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), "time.json", &json!({"message": {"time": 890}}));

    assert_eq!(run_derived(dir.path(), &input), json!({"time": leaf("integer")}));
}

#[test]
fn test_end_to_end_enum() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(
        dir.path(),
        "countries.json",
        &json!({"message": {"countries": ["ABCDEFGHIJKLMNOPQRSTUVWXYZA", "ABCDEFGHIJKLMNOPQ"]}}),
    );

    assert_eq!(run_derived(dir.path(), &input), json!({"countries": leaf("enum")}));
}

#[test]
fn test_end_to_end_array() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(
        dir.path(),
        "cities.json",
        &json!({"message": {"cities": [{"town": "ABCDEFGHIJKLMNOPQ"}]}}),
    );

    assert_eq!(run_derived(dir.path(), &input), json!({"cities": leaf("array")}));
}

#[test]
fn test_attributes_are_ignored() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(
        dir.path(),
        "event.json",
        &json!({
            "attributes": {"appName": "ABCDEFGHIJKLMNOPQRSTUVW"},
            "message": {"name": "John"}
        }),
    );

    assert_eq!(run_derived(dir.path(), &input), json!({"name": leaf("string")}));
}

#[test]
fn test_schema_path_is_derived() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(dir.path(), "event.json", &json!({"message": {}}));
    let relative = input.strip_prefix(dir.path()).unwrap();

    let config = GeneratorConfig::from_path(relative).unwrap();
    assert_eq!(config.schema_path, Path::new("schema").join("event.json"));

    let expected = dir.path().join(&config.schema_path);
    fs::create_dir_all(expected.parent().unwrap()).unwrap();
    let report = SchemaEngine::new(GeneratorConfig::new(&input, &expected))
        .run()
        .unwrap();

    assert_eq!(report.schema_path, expected);
    assert!(expected.starts_with(dir.path()));
    assert_eq!(fs::read_to_string(expected).unwrap(), "{}");
}

#[test]
fn test_realistic_message_preserves_order() {
    let dir = TempDir::new().unwrap();
    let raw = r#"{
        "attributes": {"appName": "shop", "appVersion": "1.2.0"},
        "message": {
            "orderId": "A-1",
            "quantity": 3,
            "price": 9.99,
            "gift": false,
            "note": null,
            "tags": [],
            "customer": {"name": "Jane", "address": {"city": "Lagos", "zip": 100001}},
            "items": [{"sku": "X"}, {"sku": "Y"}],
            "codes": [1, 2, 3]
        }
    }"#;
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let input = dir.path().join("data").join("order.json");
    fs::write(&input, raw).unwrap();
    let output = dir.path().join("order.schema.json");

    let engine = SchemaEngine::new(GeneratorConfig::new(&input, &output));
    let schema = engine.generate().unwrap();

    assert_eq!(
        schema.keys().collect::<Vec<_>>(),
        vec!["orderId", "quantity", "price", "gift", "note", "tags", "customer", "items", "codes"]
    );
    assert_eq!(schema.get("orderId").unwrap().kind(), Some(Kind::String));
    assert_eq!(schema.get("quantity").unwrap().kind(), Some(Kind::Integer));
    assert_eq!(schema.get("price").unwrap().kind(), Some(Kind::Invalid));
    assert_eq!(schema.get("gift").unwrap().kind(), Some(Kind::Invalid));
    assert_eq!(schema.get("note").unwrap().kind(), Some(Kind::Invalid));
    assert_eq!(schema.get("tags").unwrap().kind(), Some(Kind::Enum));
    assert_eq!(schema.get("items").unwrap().kind(), Some(Kind::Array));
    assert_eq!(schema.get("codes").unwrap().kind(), Some(Kind::Invalid));
    assert_eq!(
        schema
            .lookup(&["customer", "address", "zip"])
            .unwrap()
            .kind(),
        Some(Kind::Integer)
    );

    let report = engine.run().unwrap();
    let written = fs::read_to_string(report.schema_path).unwrap();
    assert!(written.starts_with(r#"{"orderId":{"type":"string""#));
    assert!(written.contains(
        r#""customer":{"name":{"type":"string","tag":"","description":"","required":false},"address":{"city""#
    ));
    assert_eq!(report.descriptors, 11);
}

#[test]
fn test_pretty_output_parses_to_same_schema() {
    let dir = TempDir::new().unwrap();
    let input = write_sample(
        dir.path(),
        "event.json",
        &json!({"message": {"a": {"b": ["x"]}, "c": 1}}),
    );

    let compact = dir.path().join("compact.json");
    let pretty = dir.path().join("pretty.json");
    SchemaEngine::new(GeneratorConfig::new(&input, &compact))
        .run()
        .unwrap();
    SchemaEngine::new(GeneratorConfig::new(&input, &pretty).with_format(SchemaFormat::Pretty))
        .run()
        .unwrap();

    let compact: Value = serde_json::from_str(&fs::read_to_string(compact).unwrap()).unwrap();
    let pretty: Value = serde_json::from_str(&fs::read_to_string(pretty).unwrap()).unwrap();
    assert_eq!(compact, pretty);
}
