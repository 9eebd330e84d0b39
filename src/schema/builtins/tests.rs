use super::*;
use crate::schema::SchemaError;

#[test]
fn number_coerces_its_first_argument() {
	assert_eq!(number(vec![Value::from(1)]).expect("number builds"), Value::from(1));
	assert_eq!(number(vec![Value::from("42")]).expect("number builds"), Value::from(42));
	assert_eq!(number(Vec::new()).expect("number builds"), Value::from(0));

	let nan = number(vec![Value::from("forty-two")]).expect("number builds");
	assert!(nan.as_f64().is_some_and(f64::is_nan), "expected NaN, got {nan:?}");
}

#[test]
fn string_and_boolean_coerce() {
	assert_eq!(string(vec![Value::from(1e21)]).expect("string builds"), Value::from("1e+21"));
	assert_eq!(string(Vec::new()).expect("string builds"), Value::from(""));
	assert_eq!(boolean(vec![Value::from("")]).expect("boolean builds"), Value::Bool(false));
	assert_eq!(boolean(vec![Value::from("no")]).expect("boolean builds"), Value::Bool(true));
	assert_eq!(boolean(Vec::new()).expect("boolean builds"), Value::Bool(false));
}

#[test]
fn regexp_compiles_source_and_flags() {
	let value = regexp(vec![Value::from(r"hello (\w+)"), Value::from("i")]).expect("pattern builds");

	let pattern = value.as_pattern().expect("pattern value");
	assert_eq!(pattern.source(), r"hello (\w+)");
	assert_eq!(pattern.flags(), "i");
	assert!(pattern.is_match("Hey! Hello User!"));
}

#[test]
fn regexp_reuses_or_reflags_existing_patterns() {
	let original = Pattern::new("a+", "g").expect("pattern compiles");

	let same = regexp(vec![Value::from(original.clone())]).expect("pattern builds");
	assert_eq!(same, Value::from(original.clone()));

	let reflagged = regexp(vec![Value::from(original), Value::from("im")]).expect("pattern builds");
	assert_eq!(reflagged.as_pattern().map(Pattern::flags), Some("im"));
}

#[test]
fn regexp_rejects_bad_flags() {
	let err = regexp(vec![Value::from("a"), Value::from("z")]).expect_err("bad flag should fail");

	assert!(matches!(err, SchemaError::InvalidPattern { .. }));
}

#[test]
fn array_keeps_every_argument() {
	assert_eq!(array(vec![Value::from(3)]).expect("array builds"), Value::array([3]));
	assert_eq!(array(Vec::new()).expect("array builds"), Value::Array(Vec::new()));
}

#[test]
fn object_returns_its_argument() {
	let map = Value::object([("a", 1)]);

	assert_eq!(object(vec![map.clone()]).expect("object builds"), map);
	assert_eq!(object(Vec::new()).expect("object builds"), Value::Object(BTreeMap::new()));
	assert_eq!(object(vec![Value::Null]).expect("object builds"), Value::Object(BTreeMap::new()));
}

#[test]
fn register_installs_all_six_names() {
	let ns = Namespace::builtins();

	assert_eq!(ns.names(), vec![ARRAY, BOOLEAN, NUMBER, OBJECT, REGEXP, STRING]);
}
