use std::path::PathBuf;

use ctorschema::schema::{Namespace, Value, decode_json, encode_json};

use crate::cmd::util::{emit_json, read_json};

/// Encode then decode the JSON read from `path` and report the outcome.
pub fn run(path: Option<PathBuf>, pretty: bool) -> ctorschema::schema::Result<()> {
	let input = Value::from_json(&read_json(path.as_deref())?);
	let schema = encode_json(&input)?;

	// Null encodes to no schema at all, so there is nothing to decode.
	let output = if schema.is_null() { Value::Null } else { decode_json(&schema, &Namespace::builtins())? };

	let payload = RoundtripJson {
		equal: output == input,
		value: output.to_json()?,
		schema,
	};
	emit_json(&serde_json::to_value(&payload)?, pretty)
}

#[derive(serde::Serialize)]
struct RoundtripJson {
	equal: bool,
	schema: serde_json::Value,
	value: serde_json::Value,
}
