//! JSON array type and utilities for building, serializing, and converting to Rust types.
use crate::json::*;
use anyhow::{Result, anyhow};
use std::{
	fmt::{Debug, Display},
	ops::{Index, IndexMut},
};

#[derive(Clone, Default, PartialEq)]
/// A JSON array, backed by a `Vec<JsonValue>`.
///
/// Provides builder methods, the typed getters shared with [`JsonObject`], and compact or
/// pretty serialization.
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Create an array by running `configure` once against a fresh empty array.
	///
	/// # Errors
	/// Returns the error of `configure`.
	pub fn build<F>(configure: F) -> Result<JsonArray>
	where
		F: FnOnce(&mut JsonArray) -> Result<()>,
	{
		let mut array = JsonArray::new();
		configure(&mut array)?;
		Ok(array)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut JsonValue> {
		self.0.get_mut(index)
	}

	/// `true` if `index` is in range, even when the element is null.
	#[must_use]
	pub fn has(&self, index: usize) -> bool {
		index < self.0.len()
	}

	/// `true` if the element at `index` is an explicit null; `false` when out of range.
	#[must_use]
	pub fn is_null(&self, index: usize) -> bool {
		self.get(index).is_some_and(JsonValue::is_null)
	}

	/// `true` if an element equal to `value` is present.
	#[must_use]
	pub fn contains(&self, value: &JsonValue) -> bool {
		self.0.contains(value)
	}

	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	pub fn insert<T>(&mut self, index: usize, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(index, JsonValue::from(value));
	}

	pub fn remove(&mut self, index: usize) -> Option<JsonValue> {
		(index < self.0.len()).then(|| self.0.remove(index))
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn add_strings<I>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.0.extend(values.into_iter().map(|v| JsonValue::String(v.into())));
		self
	}

	pub fn add_numbers<I>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator,
		I::Item: Into<JsonNumber>,
	{
		self.0.extend(values.into_iter().map(|v| JsonValue::Number(v.into())));
		self
	}

	pub fn add_booleans<I>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = bool>,
	{
		self.0.extend(values.into_iter().map(JsonValue::Boolean));
		self
	}

	/// Append `count` explicit nulls.
	pub fn add_nulls(&mut self, count: usize) -> &mut Self {
		self.0.extend(std::iter::repeat_n(JsonValue::Null, count));
		self
	}

	/// Append the value if there is one. `None` leaves the array untouched.
	pub fn add_optional<T>(&mut self, value: Option<T>) -> &mut Self
	where
		JsonValue: From<T>,
	{
		if let Some(value) = value {
			self.0.push(JsonValue::from(value));
		}
		self
	}

	/// Build an object with `configure` and append it.
	///
	/// # Errors
	/// Returns the error of `configure`; nothing is appended in that case.
	pub fn add_object<F>(&mut self, configure: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut JsonObject) -> Result<()>,
	{
		let object = JsonObject::build(configure)?;
		self.0.push(JsonValue::Object(object));
		Ok(self)
	}

	/// Build a nested array with `configure` and append it.
	///
	/// # Errors
	/// Returns the error of `configure`; nothing is appended in that case.
	pub fn add_array<F>(&mut self, configure: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut JsonArray) -> Result<()>,
	{
		let array = JsonArray::build(configure)?;
		self.0.push(JsonValue::Array(array));
		Ok(self)
	}

	/// Serialize the JSON array to a compact string without extra whitespace.
	///
	/// # Examples
	///
	/// ```rust
	/// use melawi_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::Null, JsonValue::from("/")]);
	/// assert_eq!(arr.stringify(), r#"[1,null,"\/"]"#);
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json_string()
	}

	/// Serialize the array to a single-line, pretty-printed string with spaces.
	///
	/// E.g., `[ 1, 2, 3 ]`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.is_empty() {
			return String::from("[]");
		}
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

	/// Serialize the array to a multi-line, pretty-printed string.
	///
	/// `max_width` controls when to break lines, and `depth` sets the indentation level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		if self.is_empty() {
			return String::from("[]");
		}
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|value| {
				format!(
					"{indent}  {}",
					stringify_pretty_multi_line(value, max_width, depth + 1, depth * 2 + 2)
				)
			})
			.collect::<Vec<_>>();
		format!("[\n{}\n{}]", items.join(",\n"), indent)
	}

	/// Convert all elements to Rust `String`s, returning an error if any element is not a string.
	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self
			.0
			.iter()
			.map(|value| value.as_str().map(str::to_owned))
			.collect::<Result<Vec<_>>>()
	}

	/// Coerce every element with the same rules as the typed getters.
	pub fn as_vec_of<T: FromJsonValue>(&self) -> Result<Vec<T>> {
		(0..self.len()).map(|index| self.get_as::<T>(index)).collect()
	}

	/// Coerce every element into a fixed-size array, returning an error on length mismatch.
	pub fn as_array_of<T: FromJsonValue, const N: usize>(&self) -> Result<[T; N]> {
		self
			.as_vec_of::<T>()?
			.try_into()
			.map_err(|e: Vec<T>| anyhow!("vector length mismatch {} != {}", e.len(), N))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Get a reference to the underlying `Vec<JsonValue>`.
	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<JsonValue> {
		self.0
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.write_json(f)
	}
}

impl Index<usize> for JsonArray {
	type Output = JsonValue;

	fn index(&self, index: usize) -> &JsonValue {
		&self.0[index]
	}
}

impl IndexMut<usize> for JsonArray {
	fn index_mut(&mut self, index: usize) -> &mut JsonValue {
		&mut self.0[index]
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		input.into_iter().collect()
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		input.iter().cloned().collect()
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &[T; N]) -> Self {
		input.iter().cloned().collect()
	}
}

impl<T> FromIterator<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		JsonArray(iter.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> Extend<T> for JsonArray
where
	JsonValue: From<T>,
{
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.0.extend(iter.into_iter().map(JsonValue::from));
	}
}

impl IntoIterator for JsonArray {
	type Item = JsonValue;
	type IntoIter = std::vec::IntoIter<JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_stringify() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
			JsonValue::Null,
		]);

		assert_eq!(array.stringify(), r#"["hello",42,true,null]"#);
		assert_eq!(JsonArray::new().stringify(), "[]");
	}

	#[test]
	fn test_add_methods() -> Result<()> {
		let mut array = JsonArray::new();
		array
			.add_strings(["a", "b"])
			.add_numbers([1, 2])
			.add_booleans([true])
			.add_nulls(2)
			.add_object(|o| {
				o.add_number("x", 1);
				Ok(())
			})?
			.add_array(|a| {
				a.add_numbers([1.5]);
				Ok(())
			})?;

		assert_eq!(
			array.stringify(),
			r#"["a","b",1,2,true,null,null,{"x":1},[1.5]]"#
		);
		Ok(())
	}

	#[test]
	fn test_add_optional() {
		let mut array = JsonArray::new();
		array.add_optional(Some("x")).add_optional::<i32>(None);
		assert_eq!(array.len(), 1);
	}

	#[test]
	fn test_has_is_null_contains() {
		let array = JsonArray(vec![JsonValue::Null, JsonValue::from(1)]);

		assert!(array.has(0));
		assert!(array.is_null(0));
		assert!(!array.is_null(1));
		assert!(!array.has(2));
		assert!(!array.is_null(2));
		assert!(array.contains(&JsonValue::from(1)));
		assert!(!array.contains(&JsonValue::from(2)));
	}

	#[test]
	fn test_list_mutation() {
		let mut array = JsonArray::from(vec![1, 2, 3]);
		array.push("four");
		array.insert(0, 0);
		assert_eq!(array.remove(2), Some(JsonValue::from(2)));
		assert_eq!(array.remove(10), None);
		array[0] = JsonValue::from(false);

		assert_eq!(array.stringify(), r#"[false,1,3,"four"]"#);

		array.clear();
		assert!(array.is_empty());
	}

	#[test]
	fn test_as_string_vec() -> Result<()> {
		let array = JsonArray::from(vec!["hello", "world"]);

		assert_eq!(array.as_string_vec()?, vec!["hello", "world"]);
		assert_eq!(
			JsonArray::from(vec![1, 2]).as_string_vec().unwrap_err().to_string(),
			"expected a string, found a number"
		);

		Ok(())
	}

	#[test]
	fn test_as_vec_of() -> Result<()> {
		let array = JsonArray::from(vec![JsonValue::from(1), JsonValue::from("2")]);
		assert_eq!(array.as_vec_of::<i32>()?, vec![1, 2]);

		assert_eq!(
			JsonArray::from(vec!["a"]).as_vec_of::<f64>().unwrap_err().to_string(),
			"JsonArray[0] is not a Double"
		);
		Ok(())
	}

	#[test]
	fn test_as_array_of() -> Result<()> {
		let array = JsonArray::from(vec![1.5, 3.5, 5.5]);

		let number_array: [f64; 3] = array.as_array_of()?;
		assert_eq!(number_array, [1.5, 3.5, 5.5]);

		assert_eq!(
			array.as_array_of::<f64, 2>().unwrap_err().to_string(),
			"vector length mismatch 3 != 2"
		);
		Ok(())
	}

	#[test]
	fn test_debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);

		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(Double(42.0))]"#);
	}

	#[test]
	fn test_stringify_pretty_single_line() {
		let array = JsonArray(vec![JsonValue::from("hello"), JsonValue::from(42.0)]);
		assert_eq!(array.stringify_pretty_single_line(), "[ \"hello\", 42 ]");
	}

	#[test]
	fn test_stringify_pretty_multi_line() {
		let array = JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]);
		let expected = "[\n  \"a\",\n  \"b\"\n]";
		assert_eq!(array.stringify_pretty_multi_line(80, 0), expected);
	}

	#[test]
	fn test_from_ref_vec_and_array() {
		let v = vec![1, 2, 3];
		assert_eq!(JsonArray::from(&v).0, vec![JsonValue::from(1), JsonValue::from(2), JsonValue::from(3)]);

		let slice = [4, 5, 6];
		assert_eq!(JsonArray::from(&slice).len(), 3);
	}

	#[test]
	fn test_iteration() {
		let array: JsonArray = vec![1, 2, 3].into_iter().collect();
		let total: i32 = array.iter().map(|v| v.as_number().map_or(0, |_| 1)).sum();
		assert_eq!(total, 3);

		let values: Vec<JsonValue> = array.into_iter().collect();
		assert_eq!(values.len(), 3);
	}
}
