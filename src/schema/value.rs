use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as Json;

use crate::schema::{Pattern, Result, SchemaError};

/// Largest integer magnitude an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Runtime value accepted by the encoder and produced by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Explicit null marker.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Double-precision number; integers are represented exactly up to 2^53.
	Number(f64),
	/// UTF-8 string.
	String(Box<str>),
	/// Compiled regular expression with its source and flags.
	Pattern(Pattern),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// String-keyed map; key order is not significant.
	Object(BTreeMap<String, Value>),
	/// Opaque host value produced by a custom constructor.
	Native(NativeValue),
}

impl Value {
	/// Build an object from key/value pairs.
	pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		Self::Object(entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}

	/// Build an array from items.
	pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
		Self::Array(items.into_iter().map(Into::into).collect())
	}

	/// Wrap an arbitrary host value.
	pub fn native<T: Any + Send + Sync>(value: T) -> Self {
		Self::Native(NativeValue::new(value))
	}

	/// Logical kind label used in diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Pattern(_) => "pattern",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
			Self::Native(_) => "native",
		}
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Borrow as boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Borrow as number.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(v) => Some(*v),
			_ => None,
		}
	}

	/// Borrow as string slice.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v.as_ref()),
			_ => None,
		}
	}

	/// Borrow as pattern.
	pub fn as_pattern(&self) -> Option<&Pattern> {
		match self {
			Self::Pattern(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow as array items.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items.as_slice()),
			_ => None,
		}
	}

	/// Borrow as object entries.
	pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Self::Object(map) => Some(map),
			_ => None,
		}
	}

	/// Downcast a native value to a concrete host type.
	pub fn as_native<T: Any>(&self) -> Option<&T> {
		match self {
			Self::Native(item) => item.downcast_ref(),
			_ => None,
		}
	}

	/// Object field lookup; `None` for missing keys and non-objects.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|map| map.get(key))
	}

	/// Lift plain JSON data into a value tree without interpreting schemas.
	pub fn from_json(json: &Json) -> Self {
		match json {
			Json::Null => Self::Null,
			Json::Bool(v) => Self::Bool(*v),
			Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
			Json::String(s) => Self::String(s.as_str().into()),
			Json::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
			Json::Object(map) => Self::Object(map.iter().map(|(key, value)| (key.clone(), Self::from_json(value))).collect()),
		}
	}

	/// Render as plain JSON data.
	///
	/// Patterns render as `/source/flags` strings and non-finite numbers as
	/// `null`. Native values have no JSON form.
	pub fn to_json(&self) -> Result<Json> {
		Ok(match self {
			Self::Null => Json::Null,
			Self::Bool(v) => Json::Bool(*v),
			Self::Number(n) => number_to_json(*n).unwrap_or(Json::Null),
			Self::String(s) => Json::String(s.to_string()),
			Self::Pattern(p) => Json::String(p.to_string()),
			Self::Array(items) => Json::Array(items.iter().map(Self::to_json).collect::<Result<_>>()?),
			Self::Object(map) => Json::Object(
				map.iter()
					.map(|(key, value)| Ok((key.clone(), value.to_json()?)))
					.collect::<Result<_>>()?,
			),
			Self::Native(item) => {
				return Err(SchemaError::UnsupportedValue {
					value: format!("native {}", item.type_name()),
				});
			}
		})
	}
}

/// Convert a finite number to JSON, preferring integer form when exact.
pub(crate) fn number_to_json(n: f64) -> Option<Json> {
	if !n.is_finite() {
		return None;
	}
	let negative_zero = n == 0.0 && n.is_sign_negative();
	if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER && !negative_zero {
		return Some(Json::from(n as i64));
	}
	serde_json::Number::from_f64(n).map(Json::Number)
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Pattern> for Value {
	fn from(value: Pattern) -> Self {
		Self::Pattern(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(value: BTreeMap<String, Value>) -> Self {
		Self::Object(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Shared handle to an opaque host value.
///
/// Equality is identity: two handles are equal only when they share the same
/// allocation.
#[derive(Clone)]
pub struct NativeValue {
	type_name: &'static str,
	inner: Arc<dyn Any + Send + Sync>,
}

impl NativeValue {
	/// Wrap `value` in a new shared handle.
	pub fn new<T: Any + Send + Sync>(value: T) -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			inner: Arc::new(value),
		}
	}

	/// Rust type name of the wrapped value.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Downcast to a concrete host type.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		(*self.inner).downcast_ref::<T>()
	}
}

impl PartialEq for NativeValue {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
	}
}

impl fmt::Debug for NativeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Native({})", self.type_name)
	}
}
