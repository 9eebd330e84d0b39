use std::path::PathBuf;

use ctorschema::schema::Schema;

use crate::cmd::util::{emit_json, read_json};

/// Report whether the JSON read from `path` is schema-shaped.
pub fn run(path: Option<PathBuf>, pretty: bool) -> ctorschema::schema::Result<()> {
	let input = read_json(path.as_deref())?;
	let schema = Schema::from_json(&input);

	let payload = CheckJson {
		is_schema: schema.is_some(),
		ctor: schema.as_ref().map(|item| item.ctor.clone()),
		arity: schema.as_ref().map(|item| item.args.len()),
	};
	emit_json(&serde_json::to_value(&payload)?, pretty)
}

#[derive(serde::Serialize)]
struct CheckJson {
	is_schema: bool,
	ctor: Option<String>,
	arity: Option<usize>,
}
