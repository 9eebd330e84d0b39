use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::schema::wire::schema_parts;
use crate::schema::{Namespace, Result, Schema, SchemaError, Value};

/// Runtime limits for schema decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum nested-schema depth.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 256 }
	}
}

/// Decode a schema against `ns` with default options.
pub fn decode(schema: &Schema, ns: &Namespace) -> Result<Value> {
	decode_with(schema, ns, &DecodeOptions::default())
}

/// Decode a schema against `ns`.
///
/// Constructor failures are returned exactly as the constructor produced them.
pub fn decode_with(schema: &Schema, ns: &Namespace, opt: &DecodeOptions) -> Result<Value> {
	decode_impl(&schema.ctor, &schema.args, ns, opt, 0)
}

/// Decode schema-shaped JSON against `ns` with default options.
pub fn decode_json(json: &Json, ns: &Namespace) -> Result<Value> {
	decode_json_with(json, ns, &DecodeOptions::default())
}

/// Decode schema-shaped JSON against `ns`.
pub fn decode_json_with(json: &Json, ns: &Namespace, opt: &DecodeOptions) -> Result<Value> {
	let (ctor, args) = schema_parts(json).ok_or(SchemaError::NotASchema)?;
	decode_impl(ctor, args, ns, opt, 0)
}

fn decode_impl(ctor: &str, args: &[Json], ns: &Namespace, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if depth >= opt.max_depth {
		return Err(SchemaError::DepthExceeded { max_depth: opt.max_depth });
	}

	let constructor = ns.get(ctor).ok_or_else(|| SchemaError::UnknownConstructor { ctor: ctor.to_owned() })?;
	tracing::trace!(ctor, arity = args.len(), depth, "resolved constructor");

	let values = args.iter().map(|arg| decode_arg(arg, ns, opt, depth)).collect::<Result<Vec<_>>>()?;
	constructor.construct(values)
}

fn decode_arg(arg: &Json, ns: &Namespace, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	if let Some((ctor, args)) = schema_parts(arg) {
		return decode_impl(ctor, args, ns, opt, depth + 1);
	}

	// Plain maps are descended one level only; schemas nested deeper stay data.
	match arg {
		Json::Object(map) => {
			let mut out = BTreeMap::new();
			for (key, item) in map {
				let value = match schema_parts(item) {
					Some((ctor, args)) => decode_impl(ctor, args, ns, opt, depth + 1)?,
					None => Value::from_json(item),
				};
				out.insert(key.clone(), value);
			}
			Ok(Value::Object(out))
		}
		_ => Ok(Value::from_json(arg)),
	}
}
