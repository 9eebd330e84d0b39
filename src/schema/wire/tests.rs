use serde_json::json;

use super::*;

#[test]
fn recognizer_accepts_ctor_and_args_shape() {
	assert!(is_schema(&json!({ "ctor": "Number", "args": [1] })));
	assert!(is_schema(&json!({ "ctor": "Custom", "args": [], "extra": true })));
	assert!(is_schema(&json!({ "ctor": "", "args": [] })));
}

#[test]
fn recognizer_rejects_near_misses() {
	assert!(!is_schema(&json!(null)));
	assert!(!is_schema(&json!("Number")));
	assert!(!is_schema(&json!([{ "ctor": "Number", "args": [] }])));
	assert!(!is_schema(&json!({ "ctor": "Number" })));
	assert!(!is_schema(&json!({ "args": [] })));
	assert!(!is_schema(&json!({ "ctor": 1, "args": [] })));
	assert!(!is_schema(&json!({ "ctor": "Number", "args": { "0": 1 } })));
	assert!(!is_schema(&json!({ "ctor": { "ctor": "String", "args": ["String"] }, "args": { "ctor": "Array", "args": [] } })));
}

#[test]
fn schema_json_uses_verbatim_field_names() {
	let schema = Schema::new("RegExp", vec![json!("a+"), json!("g")]);

	assert_eq!(schema.to_json(), json!({ "ctor": "RegExp", "args": ["a+", "g"] }));
	assert_eq!(Json::from(schema.clone()), schema.to_json());
	assert_eq!(serde_json::to_value(&schema).expect("schema serializes"), schema.to_json());
}

#[test]
fn schema_deserializes_from_wire_text() {
	let schema: Schema = serde_json::from_str(r#"{"ctor":"Greet","args":["hello"]}"#).expect("schema parses");

	assert_eq!(schema, Schema::new("Greet", vec![json!("hello")]));
}

#[test]
fn try_from_reports_not_a_schema() {
	let err = Schema::try_from(&json!({ "tag": "Number", "args": [] })).expect_err("wrong field name should fail");

	assert!(matches!(err, SchemaError::NotASchema));
	assert_eq!(schema_or_null(None), Json::Null);
}
