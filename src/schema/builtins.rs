//! The six constructors the encoder's output refers to.

use std::collections::BTreeMap;

use crate::schema::coerce::{to_number, to_text, truthy};
use crate::schema::{Namespace, Pattern, Result, Value};

/// Numeric coercion constructor.
pub const NUMBER: &str = "Number";
/// String coercion constructor.
pub const STRING: &str = "String";
/// Boolean coercion constructor.
pub const BOOLEAN: &str = "Boolean";
/// Pattern compiler taking source and flags.
pub const REGEXP: &str = "RegExp";
/// Variadic sequence constructor.
pub const ARRAY: &str = "Array";
/// Identity constructor for field maps.
pub const OBJECT: &str = "Object";

/// Register every builtin into `ns`, replacing same-named entries.
pub fn register(ns: &mut Namespace) {
	ns.insert(NUMBER, number);
	ns.insert(STRING, string);
	ns.insert(BOOLEAN, boolean);
	ns.insert(REGEXP, regexp);
	ns.insert(ARRAY, array);
	ns.insert(OBJECT, object);
}

/// `Number(x)`: zero without arguments.
pub fn number(args: Vec<Value>) -> Result<Value> {
	Ok(Value::Number(args.first().map_or(0.0, to_number)))
}

/// `String(x)`: empty without arguments.
pub fn string(args: Vec<Value>) -> Result<Value> {
	Ok(Value::from(args.first().map(to_text).unwrap_or_default()))
}

/// `Boolean(x)`: false without arguments.
pub fn boolean(args: Vec<Value>) -> Result<Value> {
	Ok(Value::Bool(args.first().is_some_and(truthy)))
}

/// `RegExp(source, flags)`.
///
/// A pattern passed without flags is returned unchanged; with flags, its
/// source is recompiled under the new flags.
pub fn regexp(args: Vec<Value>) -> Result<Value> {
	let mut args = args.into_iter();
	let source = args.next();
	let flags = args.next();

	let flags = flags.as_ref().map(to_text);

	let pattern = match (source, flags) {
		(Some(Value::Pattern(pattern)), None) => pattern,
		(Some(Value::Pattern(pattern)), Some(flags)) => Pattern::new(pattern.source(), &flags)?,
		(None, flags) => Pattern::new("", flags.as_deref().unwrap_or(""))?,
		(Some(source), flags) => Pattern::new(&to_text(&source), flags.as_deref().unwrap_or(""))?,
	};
	Ok(Value::Pattern(pattern))
}

/// `Array(...items)`: the arguments in order.
pub fn array(args: Vec<Value>) -> Result<Value> {
	Ok(Value::Array(args))
}

/// `Object(map)`: the single argument itself, or an empty object for null.
pub fn object(args: Vec<Value>) -> Result<Value> {
	Ok(match args.into_iter().next() {
		None | Some(Value::Null) => Value::Object(BTreeMap::new()),
		Some(value) => value,
	})
}

#[cfg(test)]
mod tests;
