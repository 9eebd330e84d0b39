use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors produced while encoding, decoding, and constructing values.
#[derive(Debug, Error)]
pub enum SchemaError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not valid JSON, or output could not be rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Schema constructor name has no entry in the namespace.
	#[error("unknown constructor: {ctor}")]
	UnknownConstructor {
		/// Constructor name taken from the schema.
		ctor: String,
	},
	/// Value kind has no schema mapping.
	#[error("unsupported value: {value}")]
	UnsupportedValue {
		/// Short rendering of the rejected value.
		value: String,
	},
	/// Top-level decode input does not carry the `ctor`/`args` shape.
	#[error("not a schema: expected an object with string `ctor` and array `args`")]
	NotASchema,
	/// Pattern source or flags were rejected by the `RegExp` constructor.
	#[error("invalid pattern /{pattern}/{flags}: {reason}")]
	InvalidPattern {
		/// Pattern source text.
		pattern: String,
		/// Pattern flag text.
		flags: String,
		/// Compiler or flag validation message.
		reason: String,
	},
	/// Encoder or decoder recursion exceeded the configured ceiling.
	#[error("depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Failure raised by a caller-supplied constructor, passed through verbatim.
	#[error(transparent)]
	Constructor(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SchemaError {
	/// Wrap a custom constructor failure without altering its message.
	pub fn custom(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Constructor(err.into())
	}
}
