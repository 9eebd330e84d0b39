use std::path::PathBuf;

use ctorschema::schema::{EncodeOptions, Value, encode_with};
use serde_json::Value as Json;

use crate::cmd::util::{emit_json, read_json};

/// Encode plain JSON read from `path` and print the schema.
pub fn run(path: Option<PathBuf>, pretty: bool, max_depth: Option<u32>) -> ctorschema::schema::Result<()> {
	let input = read_json(path.as_deref())?;
	let mut options = EncodeOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let schema = encode_with(&Value::from_json(&input), &options)?;
	emit_json(&schema.map_or(Json::Null, Json::from), pretty)
}
