use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::schema::{Result, SchemaError};

/// Wire field holding the constructor name.
pub const CTOR_FIELD: &str = "ctor";
/// Wire field holding the positional argument list.
pub const ARGS_FIELD: &str = "args";

/// Tagged constructor call: a constructor name plus positional arguments.
///
/// Arguments are JSON data: nested schemas, primitives, plain maps whose
/// values may themselves be schemas, or arbitrary data passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	/// Constructor name resolved against a namespace on decode.
	pub ctor: String,
	/// Positional constructor arguments.
	pub args: Vec<Json>,
}

impl Schema {
	/// Build a schema from a constructor name and arguments.
	pub fn new(ctor: impl Into<String>, args: Vec<Json>) -> Self {
		Self { ctor: ctor.into(), args }
	}

	/// Copy a schema-shaped JSON value; `None` when the shape does not match.
	pub fn from_json(json: &Json) -> Option<Self> {
		schema_parts(json).map(|(ctor, args)| Self::new(ctor, args.to_vec()))
	}

	/// Render as a JSON object with exactly the `ctor` and `args` fields.
	pub fn to_json(&self) -> Json {
		Json::from(self.clone())
	}
}

impl From<Schema> for Json {
	fn from(schema: Schema) -> Self {
		let mut map = serde_json::Map::with_capacity(2);
		map.insert(CTOR_FIELD.to_owned(), Json::String(schema.ctor));
		map.insert(ARGS_FIELD.to_owned(), Json::Array(schema.args));
		Json::Object(map)
	}
}

impl TryFrom<&Json> for Schema {
	type Error = SchemaError;

	fn try_from(json: &Json) -> Result<Self> {
		Self::from_json(json).ok_or(SchemaError::NotASchema)
	}
}

/// Structural schema test: an object with a string `ctor` and an array `args`.
///
/// Extra fields are ignored, so any data with this shape is treated as a
/// constructor call.
pub fn is_schema(json: &Json) -> bool {
	schema_parts(json).is_some()
}

/// Borrow the constructor name and arguments of a schema-shaped value.
pub(crate) fn schema_parts(json: &Json) -> Option<(&str, &[Json])> {
	let map = json.as_object()?;
	let ctor = map.get(CTOR_FIELD)?.as_str()?;
	let args = map.get(ARGS_FIELD)?.as_array()?;
	Some((ctor, args.as_slice()))
}

/// JSON form of an optional schema: the schema object, or `null`.
pub(crate) fn schema_or_null(schema: Option<Schema>) -> Json {
	schema.map_or(Json::Null, Json::from)
}

#[cfg(test)]
mod tests;
