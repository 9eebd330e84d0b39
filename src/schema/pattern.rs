use std::borrow::Cow;
use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::schema::{Result, SchemaError};

/// Recognized flag letters in canonical output order.
const FLAG_ORDER: [char; 8] = ['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'];

/// Source text stored for a pattern built from an empty string.
pub const EMPTY_SOURCE: &str = "(?:)";

/// Compiled regular expression that remembers its source and flag text.
///
/// Only `i`, `m`, and `s` change how the expression compiles. The remaining
/// flags (`d`, `g`, `u`, `v`, `y`) are validated and carried so that the pattern
/// re-encodes with the same flag text it was built from.
///
/// `\d`, `\w`, and `\b` (and their negations) are ASCII-only, with or
/// without `u`/`v`; `\s` and `.` stay Unicode-aware.
#[derive(Debug, Clone)]
pub struct Pattern {
	source: Box<str>,
	flags: Box<str>,
	regex: Regex,
}

impl Pattern {
	/// Compile `source` with `flags`, normalizing flags to canonical order.
	pub fn new(source: &str, flags: &str) -> Result<Self> {
		let source = if source.is_empty() { EMPTY_SOURCE } else { source };
		let flags = canonical_flags(source, flags)?;

		let regex = RegexBuilder::new(&ascii_classes(source))
			.case_insensitive(flags.contains('i'))
			.multi_line(flags.contains('m'))
			.dot_matches_new_line(flags.contains('s'))
			.build()
			.map_err(|err| SchemaError::InvalidPattern {
				pattern: source.to_owned(),
				flags: flags.clone(),
				reason: err.to_string(),
			})?;

		Ok(Self {
			source: source.into(),
			flags: flags.into_boxed_str(),
			regex,
		})
	}

	/// Pattern source text.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Flag text in canonical order.
	pub fn flags(&self) -> &str {
		&self.flags
	}

	/// Compiled expression.
	pub fn regex(&self) -> &Regex {
		&self.regex
	}

	/// Whether the flag letter `flag` is set.
	pub fn has_flag(&self, flag: char) -> bool {
		self.flags.contains(flag)
	}

	/// Test whether the pattern matches anywhere in `haystack`.
	pub fn is_match(&self, haystack: &str) -> bool {
		self.regex.is_match(haystack)
	}
}

impl PartialEq for Pattern {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source && self.flags == other.flags
	}
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "/{}/{}", self.source, self.flags)
	}
}

/// Rewrite Perl classes and word boundaries to their ASCII forms, and escape
/// characters that open nested classes or set operators inside `[...]`.
fn ascii_classes(source: &str) -> Cow<'_, str> {
	if !source.contains(['\\', '[']) {
		return Cow::Borrowed(source);
	}

	let mut out = String::with_capacity(source.len() + 16);
	let mut in_class = false;
	let mut chars = source.chars().peekable();
	while let Some(ch) = chars.next() {
		match ch {
			'\\' => {
				let Some(next) = chars.next() else {
					out.push('\\');
					break;
				};
				match (in_class, next) {
					(false, 'b' | 'B') => {
						out.push_str("(?-u:\\");
						out.push(next);
						out.push(')');
					}
					(false, 'd') => out.push_str("[0-9]"),
					(false, 'D') => out.push_str("[^0-9]"),
					(false, 'w') => out.push_str("[A-Za-z0-9_]"),
					(false, 'W') => out.push_str("[^A-Za-z0-9_]"),
					(true, 'd') => out.push_str("0-9"),
					(true, 'D') => out.push_str("[^0-9]"),
					(true, 'w') => out.push_str("A-Za-z0-9_"),
					(true, 'W') => out.push_str("[^A-Za-z0-9_]"),
					// backspace inside a class
					(true, 'b') => out.push_str("\\x08"),
					_ => {
						out.push('\\');
						out.push(next);
					}
				}
			}
			'[' | '&' | '~' if in_class => {
				out.push('\\');
				out.push(ch);
			}
			'[' => {
				in_class = true;
				out.push('[');
				if chars.next_if_eq(&'^').is_some() {
					out.push('^');
				}
			}
			']' if in_class => {
				in_class = false;
				out.push(']');
			}
			_ => out.push(ch),
		}
	}
	Cow::Owned(out)
}

fn canonical_flags(source: &str, flags: &str) -> Result<String> {
	let invalid = |reason: String| SchemaError::InvalidPattern {
		pattern: source.to_owned(),
		flags: flags.to_owned(),
		reason,
	};

	let mut seen = [false; FLAG_ORDER.len()];
	for flag in flags.chars() {
		let Some(idx) = FLAG_ORDER.iter().position(|known| *known == flag) else {
			return Err(invalid(format!("unknown flag '{flag}'")));
		};
		if seen[idx] {
			return Err(invalid(format!("duplicate flag '{flag}'")));
		}
		seen[idx] = true;
	}

	let out: String = FLAG_ORDER.iter().zip(seen).filter(|(_, set)| *set).map(|(flag, _)| *flag).collect();
	if out.contains('u') && out.contains('v') {
		return Err(invalid("flags 'u' and 'v' are mutually exclusive".to_owned()));
	}
	Ok(out)
}
