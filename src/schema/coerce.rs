//! Host-style scalar coercions backing the builtin `Number`, `String`, and
//! `Boolean` constructors.

use crate::schema::Value;

/// Coerce a value to a number.
///
/// Strings parse as trimmed numeric literals (empty is zero, junk is NaN);
/// composite values coerce through their text form.
pub fn to_number(value: &Value) -> f64 {
	match value {
		Value::Null => 0.0,
		Value::Bool(v) => f64::from(u8::from(*v)),
		Value::Number(n) => *n,
		Value::String(s) => parse_number(s),
		Value::Pattern(_) | Value::Array(_) | Value::Object(_) | Value::Native(_) => parse_number(&to_text(value)),
	}
}

/// Coerce a value to its text form.
pub fn to_text(value: &Value) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::Number(n) => format_number(*n),
		Value::String(s) => s.to_string(),
		Value::Pattern(p) => p.to_string(),
		Value::Array(items) => items
			.iter()
			.map(|item| if item.is_null() { String::new() } else { to_text(item) })
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".to_owned(),
		Value::Native(item) => format!("[object {}]", item.type_name()),
	}
}

/// Truthiness: false for null, `false`, zero, NaN, and the empty string.
pub fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(v) => *v,
		Value::Number(n) => *n != 0.0 && !n.is_nan(),
		Value::String(s) => !s.is_empty(),
		Value::Pattern(_) | Value::Array(_) | Value::Object(_) | Value::Native(_) => true,
	}
}

/// Shortest round-trip text for a number, using exponent form outside
/// `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_owned();
	}
	if n.is_infinite() {
		return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if n == 0.0 {
		return "0".to_owned();
	}

	let abs = n.abs();
	if abs >= 1e21 || abs < 1e-6 {
		let text = format!("{n:e}");
		return match text.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
			_ => text,
		};
	}
	format!("{n}")
}

/// Parse a numeric literal the way the `Number` constructor reads strings.
pub fn parse_number(text: &str) -> f64 {
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return 0.0;
	}

	match trimmed {
		"Infinity" | "+Infinity" => return f64::INFINITY,
		"-Infinity" => return f64::NEG_INFINITY,
		_ => {}
	}

	for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
		if let Some(digits) = trimmed.strip_prefix(prefix) {
			return parse_radix(digits, radix);
		}
	}

	if is_decimal_literal(trimmed) {
		trimmed.parse::<f64>().unwrap_or(f64::NAN)
	} else {
		f64::NAN
	}
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
	if digits.is_empty() {
		return f64::NAN;
	}

	let mut out = 0.0_f64;
	for ch in digits.chars() {
		let Some(digit) = ch.to_digit(radix) else {
			return f64::NAN;
		};
		out = out * f64::from(radix) + f64::from(digit);
	}
	out
}

// Rust's float parser also accepts `inf`/`nan` spellings, so the literal
// grammar is checked before handing off.
fn is_decimal_literal(text: &str) -> bool {
	let body = text.strip_prefix(['+', '-']).unwrap_or(text);
	let (mantissa, exponent) = match body.find(['e', 'E']) {
		Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
		None => (body, None),
	};
	let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

	let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
	if !all_digits(int) || !all_digits(frac) || (int.is_empty() && frac.is_empty()) {
		return false;
	}

	match exponent {
		None => true,
		Some(exp) => {
			let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
			!exp.is_empty() && all_digits(exp)
		}
	}
}
