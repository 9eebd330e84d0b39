//! Constructor schemas: a JSON-safe `{ ctor, args }` form for runtime values.
//!
//! [`encode`] turns a [`Value`] into a [`Schema`]; [`decode`] rebuilds a value
//! by calling constructors looked up in a caller-supplied [`Namespace`].
//! [`Namespace::builtins`] provides the constructors the encoder targets.

/// Builtin constructors and their names.
pub mod builtins;
/// Scalar coercions used by the builtin constructors.
pub mod coerce;
mod decode;
mod encode;
mod error;
mod namespace;
mod pattern;
mod value;
mod wire;

/// Schema decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_json, decode_json_with, decode_with};
/// Schema encoding entry points and options.
pub use encode::{EncodeOptions, encode, encode_json, encode_with};
/// Error and result aliases.
pub use error::{Result, SchemaError};
/// Constructor namespace and the constructor trait.
pub use namespace::{Constructor, Namespace};
/// Compiled pattern value.
pub use pattern::{EMPTY_SOURCE, Pattern};
/// Runtime value types.
pub use value::{NativeValue, Value};
/// Wire representation and recognizer.
pub use wire::{ARGS_FIELD, CTOR_FIELD, Schema, is_schema};
