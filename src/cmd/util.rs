use std::io::Read;
use std::path::Path;

use ctorschema::schema::Result;
use serde_json::Value as Json;

/// Read and parse JSON from `path`, or from stdin when absent or `-`.
pub(crate) fn read_json(path: Option<&Path>) -> Result<Json> {
	let text = match path {
		Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
		_ => {
			let mut text = String::new();
			std::io::stdin().read_to_string(&mut text)?;
			text
		}
	};
	Ok(serde_json::from_str(&text)?)
}

/// Print one JSON document to stdout.
pub(crate) fn emit_json(value: &Json, pretty: bool) -> Result<()> {
	let text = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
	println!("{text}");
	Ok(())
}
