//! Serialization of values into JSON text.
//!
//! Everything funnels through [`ToJson::write_json`], which writes into any [`fmt::Write`].
//! Strings are escaped by [`escape_json_string`]; numbers are written by their `Display`.

use super::{JsonArray, JsonNumber, JsonObject, JsonValue};
use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::{
	collections::{BTreeMap, HashMap},
	fmt::{self, Display, Write},
	io,
};

/// A value that can be written as compact JSON text.
pub trait ToJson {
	/// Write the compact JSON text of `self` into `out`.
	///
	/// # Errors
	/// Only propagates errors of `out`.
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result;

	/// Return the compact JSON text of `self`.
	fn to_json_string(&self) -> String {
		JsonText(self).to_string()
	}

	/// Stream the compact JSON text of `self` into an I/O sink.
	///
	/// # Errors
	/// Returns an error if the sink rejects a write.
	fn write_json_to<S: io::Write>(&self, mut sink: S) -> Result<()> {
		write!(sink, "{}", JsonText(self)).context("failed to write JSON to sink")?;
		sink.flush().context("failed to flush JSON sink")
	}
}

/// `Display` adapter that renders the wrapped value as compact JSON text.
pub struct JsonText<'a, T: ?Sized>(pub &'a T);

impl<T: ToJson + ?Sized> Display for JsonText<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.write_json(f)
	}
}

/// `Display` adapter that renders the wrapped string escaped, without surrounding quotes.
pub struct EscapedJson<'a>(pub &'a str);

impl Display for EscapedJson<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		escape_json_into(f, self.0)
	}
}

/// Write the escaped form of `input` into `out`, see [`escape_json_string`].
///
/// # Errors
/// Only propagates errors of `out`.
pub fn escape_json_into<W: Write + ?Sized>(out: &mut W, input: &str) -> fmt::Result {
	let mut start = 0;
	for (index, c) in input.char_indices() {
		let replacement = match c {
			'"' => "\\\"",
			'\\' => "\\\\",
			'/' => "\\/",
			'\u{08}' => "\\b",
			'\u{0c}' => "\\f",
			'\n' => "\\n",
			'\r' => "\\r",
			'\t' => "\\t",
			'\u{00}'..='\u{1f}' => "",
			_ => continue,
		};
		out.write_str(&input[start..index])?;
		if replacement.is_empty() {
			write!(out, "\\u{:04X}", u32::from(c))?;
		} else {
			out.write_str(replacement)?;
		}
		start = index + c.len_utf8();
	}
	out.write_str(&input[start..])
}

/// Escape `input` for use inside a JSON string literal.
///
/// `"`, `\` and `/` get a backslash, the control characters with a short form use it
/// (`\b`, `\f`, `\n`, `\r`, `\t`) and all other characters below U+0020 become `\u00XX`.
/// Everything else, non-ASCII included, is copied through unchanged.
///
/// ```rust
/// use melawi_core::json::escape_json_string;
///
/// assert_eq!(escape_json_string("a/b \"c\"\n"), r#"a\/b \"c\"\n"#);
/// assert_eq!(escape_json_string("\u{1}"), r"\u0001");
/// ```
#[must_use]
pub fn escape_json_string(input: &str) -> String {
	EscapedJson(input).to_string()
}

/// Compact JSON text of any value.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	json.to_json_string()
}

/// JSON text on a single line with a space after each separator.
#[must_use]
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(array) => array.stringify_pretty_single_line(),
		JsonValue::Object(object) => object.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

/// JSON text that breaks containers over several lines once they no longer fit in `max_width`.
///
/// `indentation` is the width already taken on the current line.
#[must_use]
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indentation: usize) -> String {
	let single_line = match json {
		JsonValue::Array(_) | JsonValue::Object(_) => stringify_pretty_single_line(json),
		_ => return stringify(json),
	};
	if single_line.len() + indentation <= max_width {
		return single_line;
	}
	match json {
		JsonValue::Array(array) => array.stringify_pretty_multi_line(max_width, depth),
		JsonValue::Object(object) => object.stringify_pretty_multi_line(max_width, depth),
		_ => single_line,
	}
}

fn write_string<W: Write + ?Sized>(text: &str, out: &mut W) -> fmt::Result {
	write!(out, "\"{}\"", EscapedJson(text))
}

fn write_sequence<'a, W, T, I>(items: I, out: &mut W) -> fmt::Result
where
	W: Write + ?Sized,
	T: ToJson + 'a,
	I: IntoIterator<Item = &'a T>,
{
	out.write_char('[')?;
	for (index, item) in items.into_iter().enumerate() {
		if index > 0 {
			out.write_char(',')?;
		}
		item.write_json(out)?;
	}
	out.write_char(']')
}

fn write_members<'a, W, K, V, I>(members: I, out: &mut W) -> fmt::Result
where
	W: Write + ?Sized,
	K: AsRef<str> + 'a,
	V: ToJson + 'a,
	I: IntoIterator<Item = (&'a K, &'a V)>,
{
	out.write_char('{')?;
	for (index, (key, value)) in members.into_iter().enumerate() {
		if index > 0 {
			out.write_char(',')?;
		}
		write_string(key.as_ref(), out)?;
		out.write_char(':')?;
		value.write_json(out)?;
	}
	out.write_char('}')
}

impl ToJson for JsonValue {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		match self {
			JsonValue::Array(array) => array.write_json(out),
			JsonValue::Boolean(value) => value.write_json(out),
			JsonValue::Null => out.write_str("null"),
			JsonValue::Number(number) => number.write_json(out),
			JsonValue::Object(object) => object.write_json(out),
			JsonValue::String(text) => write_string(text, out),
		}
	}
}

impl ToJson for JsonNumber {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write!(out, "{self}")
	}
}

impl ToJson for JsonArray {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_sequence(self.iter(), out)
	}
}

impl ToJson for JsonObject {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_members(self.iter(), out)
	}
}

impl ToJson for bool {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		out.write_str(if *self { "true" } else { "false" })
	}
}

macro_rules! impl_to_json_display {
	($($t:ty),+ $(,)?) => {
		$(
			impl ToJson for $t {
				fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
					write!(out, "{self}")
				}
			}
		)+
	};
}

impl_to_json_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, BigDecimal);

macro_rules! impl_to_json_float {
	($($t:ty),+) => {
		$(
			impl ToJson for $t {
				fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
					if self.is_finite() {
						write!(out, "{self}")
					} else {
						out.write_str("null")
					}
				}
			}
		)+
	};
}

impl_to_json_float!(f32, f64);

impl ToJson for str {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_string(self, out)
	}
}

impl ToJson for String {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_string(self, out)
	}
}

impl ToJson for char {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_string(self.encode_utf8(&mut [0; 4]), out)
	}
}

impl<T: ToJson> ToJson for Option<T> {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		match self {
			Some(value) => value.write_json(out),
			None => out.write_str("null"),
		}
	}
}

impl<T: ToJson> ToJson for [T] {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_sequence(self, out)
	}
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_sequence(self, out)
	}
}

impl<T: ToJson> ToJson for Vec<T> {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_sequence(self, out)
	}
}

impl<K: AsRef<str>, V: ToJson, S> ToJson for HashMap<K, V, S> {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_members(self, out)
	}
}

impl<K: AsRef<str>, V: ToJson> ToJson for BTreeMap<K, V> {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		write_members(self, out)
	}
}

impl<T: ToJson + ?Sized> ToJson for &T {
	fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
		(**self).write_json(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case("plain", "plain")]
	#[case("say \"hi\"", r#"say \"hi\""#)]
	#[case(r"back\slash", r"back\\slash")]
	#[case("a/b", r"a\/b")]
	#[case("\u{08}\u{0c}\n\r\t", r"\b\f\n\r\t")]
	#[case("\u{0}", r"\u0000")]
	#[case("\u{1f}", r"\u001F")]
	#[case("\u{0b}", r"\u000B")]
	#[case("\u{7f}", "\u{7f}")]
	#[case("ä 😊 €", "ä 😊 €")]
	#[case("", "")]
	fn escaping(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_json_string(input), expected);
	}

	#[test]
	fn escaping_is_not_idempotent() {
		let once = escape_json_string("\"/");
		assert_eq!(once, r#"\"\/"#);
		assert_eq!(escape_json_string(&once), r#"\\\"\\\/"#);
	}

	#[test]
	fn escaping_into_existing_text() {
		let mut out = String::from("\"");
		escape_json_into(&mut out, "a\tb").unwrap();
		out.push('"');
		assert_eq!(out, r#""a\tb""#);
	}

	#[test]
	fn escaping_preserves_length_without_special_characters() {
		let input = "The quick brown fox, 123 ÄÖÜ!";
		assert_eq!(escape_json_string(input).len(), input.len());
	}

	#[rstest]
	#[case(JsonValue::from("Hello, World!"), r#""Hello, World!""#)]
	#[case(JsonValue::from(42), "42")]
	#[case(JsonValue::from(true), "true")]
	#[case(JsonValue::Null, "null")]
	#[case(JsonValue::from(f64::NAN), "null")]
	#[case(JsonValue::from("Line1\nTab\t"), r#""Line1\nTab\t""#)]
	#[case(JsonValue::from(vec![JsonValue::from("item1"), JsonValue::from(123), JsonValue::from(false), JsonValue::Null]), r#"["item1",123,false,null]"#)]
	#[case(JsonValue::new_array(), "[]")]
	#[case(JsonValue::new_object(), "{}")]
	fn stringify_values(#[case] value: JsonValue, #[case] expected: &str) {
		assert_eq!(stringify(&value), expected);
	}

	#[test]
	fn stringify_nested() {
		let mut inner = JsonObject::new();
		inner.add_number("inner_key", 2.5);
		let mut nested = JsonObject::new();
		nested.insert("array", vec![JsonValue::from("value"), JsonValue::from(inner)]);
		nested.add_boolean("boolean", true);
		let value = JsonValue::from(JsonObject::from(vec![("nested", nested)]));

		assert_eq!(
			stringify(&value),
			r#"{"nested":{"array":["value",{"inner_key":2.5}],"boolean":true}}"#
		);
	}

	#[test]
	fn keys_are_escaped() {
		let object = JsonObject::from(vec![("a\"b", 1)]);
		assert_eq!(object.stringify(), r#"{"a\"b":1}"#);
	}

	#[test]
	fn plain_rust_values() {
		assert_eq!(vec![1, 2, 3].to_json_string(), "[1,2,3]");
		assert_eq!([0.5f32, f32::INFINITY].to_json_string(), "[0.5,null]");
		assert_eq!(Some("x").to_json_string(), r#""x""#);
		assert_eq!(None::<u8>.to_json_string(), "null");
		assert_eq!('/'.to_json_string(), r#""\/""#);
		assert_eq!(u64::MAX.to_json_string(), "18446744073709551615");

		let map = BTreeMap::from([("b", vec![true]), ("a", vec![])]);
		assert_eq!(map.to_json_string(), r#"{"a":[],"b":[true]}"#);

		let words: &[&str] = &["x", "y"];
		assert_eq!(words.to_json_string(), r#"["x","y"]"#);
	}

	#[test]
	fn pretty_single_line() {
		let value = JsonValue::from(JsonObject::from(vec![
			("a", JsonValue::from(vec![1, 2])),
			("b", JsonValue::new_object()),
		]));
		assert_eq!(stringify_pretty_single_line(&value), r#"{ "a": [ 1, 2 ], "b": {} }"#);
		assert_eq!(stringify_pretty_single_line(&JsonValue::from("s")), r#""s""#);
	}

	#[test]
	fn pretty_multi_line_wraps_long_containers() {
		let value = JsonValue::from(JsonObject::from(vec![
			("short", JsonValue::from(vec![1, 2])),
			("long", JsonValue::from(vec!["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc"])),
		]));
		assert_eq!(
			stringify_pretty_multi_line(&value, 30, 0, 0),
			"{\n  \"short\": [ 1, 2 ],\n  \"long\": [\n    \"aaaaaaaaaa\",\n    \"bbbbbbbbbb\",\n    \"cccccccccc\"\n  ]\n}"
		);
		assert_eq!(
			stringify_pretty_multi_line(&value, 200, 0, 0),
			stringify_pretty_single_line(&value)
		);
	}

	#[test]
	fn write_json_to_sink() -> Result<()> {
		let mut buffer = Vec::new();
		JsonObject::from(vec![("k", "v")]).write_json_to(&mut buffer)?;
		assert_eq!(String::from_utf8(buffer)?, r#"{"k":"v"}"#);
		Ok(())
	}

	struct BrokenSink;

	impl io::Write for BrokenSink {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::other("disk full"))
		}
		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn write_json_to_failing_sink() {
		let error = JsonValue::from("x").write_json_to(BrokenSink).unwrap_err();
		assert_eq!(error.to_string(), "failed to write JSON to sink");
		assert_eq!(error.root_cause().to_string(), "disk full");
	}

	#[test]
	fn json_text_display() {
		assert_eq!(format!("<{}>", JsonText(&JsonValue::from(1))), "<1>");
	}
}
