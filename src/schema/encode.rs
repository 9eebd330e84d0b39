use serde_json::Value as Json;

use crate::schema::builtins::{ARRAY, BOOLEAN, NUMBER, OBJECT, REGEXP, STRING};
use crate::schema::coerce::format_number;
use crate::schema::value::number_to_json;
use crate::schema::wire::schema_or_null;
use crate::schema::{Result, Schema, SchemaError, Value};

/// Runtime limits for schema encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum nesting depth. Every non-null value counts as one level, the
	/// same way the decoder counts schemas.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Encode a value with default options; `None` for null.
pub fn encode(value: &Value) -> Result<Option<Schema>> {
	encode_with(value, &EncodeOptions::default())
}

/// Encode a value; `None` for null.
///
/// Object fields whose values have no schema mapping are dropped rather than
/// failing the whole encode. Unsupported values anywhere else, including
/// inside arrays, fail with [`SchemaError::UnsupportedValue`].
pub fn encode_with(value: &Value, opt: &EncodeOptions) -> Result<Option<Schema>> {
	encode_impl(value, opt, 0)
}

/// Encode a value to its JSON wire form: a schema object, or `null`.
pub fn encode_json(value: &Value) -> Result<Json> {
	encode(value).map(schema_or_null)
}

fn encode_impl(value: &Value, opt: &EncodeOptions, depth: u32) -> Result<Option<Schema>> {
	if value.is_null() {
		return Ok(None);
	}
	check_depth(opt, depth)?;

	let schema = match value {
		Value::Null => return Ok(None),
		Value::Number(n) => Schema::new(NUMBER, vec![number_arg(*n)]),
		Value::String(s) => Schema::new(STRING, vec![Json::String(s.to_string())]),
		Value::Bool(v) => Schema::new(BOOLEAN, vec![Json::Bool(*v)]),
		Value::Pattern(p) => Schema::new(REGEXP, vec![Json::from(p.source()), Json::from(p.flags())]),
		Value::Array(items) => {
			let args = items
				.iter()
				.map(|item| encode_impl(item, opt, depth + 1).map(schema_or_null))
				.collect::<Result<Vec<_>>>()?;
			Schema::new(ARRAY, args)
		}
		Value::Object(map) => {
			let mut fields = serde_json::Map::new();
			for (key, item) in map {
				match encode_impl(item, opt, depth + 1) {
					Ok(schema) => {
						fields.insert(key.clone(), schema_or_null(schema));
					}
					Err(SchemaError::UnsupportedValue { value }) => {
						tracing::debug!(field = %key, %value, "dropping unsupported object field");
					}
					Err(err) => return Err(err),
				}
			}
			Schema::new(OBJECT, vec![Json::Object(fields)])
		}
		Value::Native(item) => {
			return Err(SchemaError::UnsupportedValue {
				value: format!("native {}", item.type_name()),
			});
		}
	};
	Ok(Some(schema))
}

// Non-finite numbers have no JSON form; their text spelling round-trips
// through the `Number` constructor instead.
fn number_arg(n: f64) -> Json {
	number_to_json(n).unwrap_or_else(|| Json::String(format_number(n)))
}

fn check_depth(opt: &EncodeOptions, depth: u32) -> Result<()> {
	if depth >= opt.max_depth {
		return Err(SchemaError::DepthExceeded { max_depth: opt.max_depth });
	}
	Ok(())
}

#[cfg(test)]
mod tests;
