use std::fmt::Write;

use ctorschema::schema::Value;
use ctorschema::schema::coerce::format_number;

/// Output truncation limits for printed value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single object.
	pub max_object_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_object_entries: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, options: PrintOptions) {
	print!("{}", render_value(value, options));
}

/// Render one decoded value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	render_into(&mut out, value, 0, 0, options);
	out
}

fn render_into(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => line(out, &pad, "null"),
		Value::Bool(v) => line(out, &pad, v),
		Value::Number(n) => line(out, &pad, format_number(*n)),
		Value::String(v) => line(out, &pad, format_args!("\"{}\"", truncate(v, options.max_string_len))),
		Value::Pattern(p) => line(out, &pad, p),
		Value::Native(item) => line(out, &pad, format_args!("<native {}>", item.type_name())),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("[... {} items]", items.len()));
				return;
			}
			line(out, &pad, "[");
			for item in items.iter().take(options.max_array_items) {
				render_into(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				line(out, &pad, format_args!("  ... {} more", items.len() - options.max_array_items));
			}
			line(out, &pad, "]");
		}
		Value::Object(map) => {
			if depth >= options.max_print_depth {
				line(out, &pad, format_args!("{{ ... {} entries }}", map.len()));
				return;
			}
			line(out, &pad, "{");
			for (key, item) in map.iter().take(options.max_object_entries) {
				let _ = write!(out, "{pad}  {key} = ");
				if matches!(item, Value::Object(_) | Value::Array(_)) {
					out.push('\n');
					render_into(out, item, indent + 4, depth + 1, options);
				} else {
					render_into(out, item, 0, depth + 1, options);
				}
			}
			if map.len() > options.max_object_entries {
				line(out, &pad, format_args!("  ... {} more entries", map.len() - options.max_object_entries));
			}
			line(out, &pad, "}");
		}
	}
}

fn line(out: &mut String, pad: &str, text: impl std::fmt::Display) {
	let _ = writeln!(out, "{pad}{text}");
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
