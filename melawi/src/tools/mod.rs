pub mod escape;
pub mod generate;
pub mod object;
pub mod xml;

use anyhow::{Result, ensure};
use melawi_core::json::{JsonNumber, JsonValue};
use num_bigint::BigInt;

/// A `KEY=VALUE` pair from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
	pub key: String,
	pub value: String,
}

/// Parse `KEY=VALUE`, splitting at the first `=`. The value may be empty, the key may not.
pub fn parse_field(text: &str) -> Result<Field> {
	let (key, value) = text
		.split_once('=')
		.ok_or_else(|| anyhow::anyhow!("expected KEY=VALUE, got {text:?}"))?;
	ensure!(!key.trim().is_empty(), "empty key in {text:?}");
	Ok(Field {
		key: key.to_string(),
		value: value.to_string(),
	})
}

/// Guess the JSON type of a command line value: `null`, booleans, integers and decimals are
/// recognised, everything else stays a string.
pub fn infer_value(text: &str) -> JsonValue {
	match text {
		"null" => return JsonValue::Null,
		"true" => return JsonValue::Boolean(true),
		"false" => return JsonValue::Boolean(false),
		_ => {}
	}
	if let Ok(value) = text.parse::<i64>() {
		return JsonValue::from(value);
	}
	if let Ok(value) = text.parse::<BigInt>() {
		return JsonValue::from(value);
	}
	let numeric = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c));
	if numeric && let Ok(value) = text.parse::<f64>() && value.is_finite() {
		return JsonValue::Number(JsonNumber::Double(value));
	}
	JsonValue::from(text)
}
