use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::schema::builtins;
use crate::schema::{Result, Value};

/// Callable that builds a value from positional arguments.
///
/// Closures of shape `Fn(Vec<Value>) -> Result<Value>` implement this
/// automatically.
pub trait Constructor: Send + Sync {
	/// Build a value from already-decoded positional arguments.
	fn construct(&self, args: Vec<Value>) -> Result<Value>;
}

impl<F> Constructor for F
where
	F: Fn(Vec<Value>) -> Result<Value> + Send + Sync,
{
	fn construct(&self, args: Vec<Value>) -> Result<Value> {
		self(args)
	}
}

/// Mapping from constructor name to constructor, injected into the decoder.
///
/// There is no implicit fallback: a name resolves only if it was inserted.
#[derive(Clone, Default)]
pub struct Namespace {
	entries: HashMap<String, Arc<dyn Constructor>>,
}

impl Namespace {
	/// Create an empty namespace.
	pub fn new() -> Self {
		Self::default()
	}

	/// Namespace holding the six builtin constructors the encoder targets.
	pub fn builtins() -> Self {
		let mut ns = Self::new();
		builtins::register(&mut ns);
		ns
	}

	/// Register `ctor` under `name`, returning the entry it replaced.
	pub fn insert<C>(&mut self, name: impl Into<String>, ctor: C) -> Option<Arc<dyn Constructor>>
	where
		C: Constructor + 'static,
	{
		self.entries.insert(name.into(), Arc::new(ctor))
	}

	/// Builder-style [`Namespace::insert`].
	pub fn with<C>(mut self, name: impl Into<String>, ctor: C) -> Self
	where
		C: Constructor + 'static,
	{
		self.insert(name, ctor);
		self
	}

	/// Remove the entry registered under `name`.
	pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Constructor>> {
		self.entries.remove(name)
	}

	/// Resolve a constructor by name.
	pub fn get(&self, name: &str) -> Option<&dyn Constructor> {
		self.entries.get(name).map(|ctor| ctor.as_ref())
	}

	/// Whether `name` resolves to a constructor.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Registered names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of registered constructors.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no constructors are registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Copy every entry of `other` into `self`, replacing same-named entries.
	pub fn extend(&mut self, other: &Namespace) {
		for (name, ctor) in &other.entries {
			self.entries.insert(name.clone(), Arc::clone(ctor));
		}
	}
}

impl fmt::Debug for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Namespace").field("names", &self.names()).finish()
	}
}
