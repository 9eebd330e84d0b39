use serde_json::json;

use super::*;
use crate::schema::Pattern;

fn encoded(value: &Value) -> Json {
	encode_json(value).expect("value encodes")
}

#[test]
fn scalars_encode_to_single_argument_schemas() {
	assert_eq!(encoded(&Value::from(42)), json!({ "ctor": "Number", "args": [42] }));
	assert_eq!(encoded(&Value::from(2.5)), json!({ "ctor": "Number", "args": [2.5] }));
	assert_eq!(encoded(&Value::from("foo")), json!({ "ctor": "String", "args": ["foo"] }));
	assert_eq!(encoded(&Value::Bool(true)), json!({ "ctor": "Boolean", "args": [true] }));
}

#[test]
fn null_encodes_to_nothing() {
	assert_eq!(encode(&Value::Null).expect("null encodes"), None);
	assert_eq!(encoded(&Value::Null), Json::Null);
}

#[test]
fn pattern_encodes_source_and_flags() {
	let pattern = Pattern::new(r"hello (\w+)", "i").expect("pattern compiles");

	assert_eq!(encoded(&Value::from(pattern)), json!({ "ctor": "RegExp", "args": ["hello (\\w+)", "i"] }));
}

#[test]
fn non_finite_numbers_encode_as_text() {
	assert_eq!(encoded(&Value::from(f64::NAN)), json!({ "ctor": "Number", "args": ["NaN"] }));
	assert_eq!(encoded(&Value::from(f64::NEG_INFINITY)), json!({ "ctor": "Number", "args": ["-Infinity"] }));
}

#[test]
fn arrays_encode_each_element_in_order() {
	let value = Value::array([Value::from(1), Value::Null, Value::from("buzz")]);

	assert_eq!(
		encoded(&value),
		json!({
			"ctor": "Array",
			"args": [
				{ "ctor": "Number", "args": [1] },
				null,
				{ "ctor": "String", "args": ["buzz"] }
			]
		})
	);
}

#[test]
fn schema_shaped_objects_are_escaped() {
	let value = Value::object([("ctor", Value::from("String")), ("args", Value::array(["Escaped!"]))]);

	assert_eq!(
		encoded(&value),
		json!({
			"ctor": "Object",
			"args": [
				{
					"ctor": { "ctor": "String", "args": ["String"] },
					"args": {
						"ctor": "Array",
						"args": [{ "ctor": "String", "args": ["Escaped!"] }]
					}
				}
			]
		})
	);
}

#[test]
fn unsupported_object_fields_are_dropped() {
	let value = Value::object([
		("keep", Value::from(1)),
		("callback", Value::native(|x: u32| x + 1)),
		("list", Value::array([Value::native(())])),
	]);

	assert_eq!(
		encoded(&value),
		json!({ "ctor": "Object", "args": [{ "keep": { "ctor": "Number", "args": [1] } }] })
	);
}

#[test]
fn unsupported_values_fail_outside_objects() {
	let err = encode(&Value::native(())).expect_err("top-level native should fail");
	assert!(matches!(err, SchemaError::UnsupportedValue { .. }));

	let err = encode(&Value::array([Value::from(1), Value::native(())])).expect_err("native array element should fail");
	assert!(err.to_string().starts_with("unsupported value: native"), "unexpected error message: {err}");
}

#[test]
fn depth_limit_aborts_even_inside_objects() {
	let nested = Value::object([("inner", Value::object([("leaf", Value::array([1]))]))]);
	let opt = EncodeOptions { max_depth: 2 };

	let err = encode_with(&nested, &opt).expect_err("depth limit should fail");
	assert!(matches!(err, SchemaError::DepthExceeded { max_depth: 2 }));

	let leaf_level = EncodeOptions { max_depth: 3 };
	let err = encode_with(&nested, &leaf_level).expect_err("scalar leaf counts as a level");
	assert!(matches!(err, SchemaError::DepthExceeded { max_depth: 3 }));

	let shallow = EncodeOptions { max_depth: 4 };
	assert!(encode_with(&nested, &shallow).expect("encode within limit").is_some());
}

#[test]
fn null_leaves_do_not_count_toward_depth() {
	let nested = Value::array([Value::array([Value::Null])]);

	let schema = encode_with(&nested, &EncodeOptions { max_depth: 2 }).expect("null leaf has no schema");

	assert_eq!(schema_or_null(schema), json!({ "ctor": "Array", "args": [{ "ctor": "Array", "args": [null] }] }));
}
