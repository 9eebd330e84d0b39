use std::path::PathBuf;

use ctorschema::schema::{DecodeOptions, Namespace, decode_json_with};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{emit_json, read_json};

/// Decode a schema read from `path` with the builtin constructors.
pub fn run(path: Option<PathBuf>, pretty: bool, json: bool, max_depth: Option<u32>) -> ctorschema::schema::Result<()> {
	let input = read_json(path.as_deref())?;
	let mut options = DecodeOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let value = decode_json_with(&input, &Namespace::builtins(), &options)?;
	if json {
		return emit_json(&value.to_json()?, pretty);
	}

	println!("kind: {}", value.kind());
	println!("decoded:");
	print_value(&value, PrintOptions::default());
	Ok(())
}
