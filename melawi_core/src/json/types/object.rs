//! JSON object type: a key/value map with builder methods, coercing getters and serialization.
//!
//! Keys keep their insertion order, which is also the order used when serializing. Equality
//! ignores order.

use crate::json::*;
use anyhow::Result;
use indexmap::IndexMap;
use std::{
	collections::{BTreeMap, HashMap},
	fmt::{Debug, Display},
};

/// A JSON object backed by an `IndexMap<String, JsonValue>`.
///
/// Typed getters (`get_integer`, `get_string_or`, `get_object`, ...) are generated in the
/// `access` module and shared with [`JsonArray`].
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub IndexMap<String, JsonValue>);

impl JsonObject {
	/// Create a new, empty `JsonObject`.
	#[must_use]
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Create an object by running `configure` once against a fresh empty object.
	///
	/// # Errors
	/// Returns the error of `configure`.
	pub fn build<F>(configure: F) -> Result<JsonObject>
	where
		F: FnOnce(&mut JsonObject) -> Result<()>,
	{
		let mut object = JsonObject::new();
		configure(&mut object)?;
		Ok(object)
	}

	/// Merge entries from another `JsonObject` into this one, overwriting existing keys.
	pub fn assign(&mut self, object: JsonObject) {
		self.0.extend(object.0);
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Get a reference to the raw `JsonValue` for the specified key, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
		self.0.get_mut(key)
	}

	/// `true` if the key was inserted, even with a null value.
	#[must_use]
	pub fn has(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// `true` if the key is present and holds an explicit null.
	#[must_use]
	pub fn is_null(&self, key: &str) -> bool {
		self.get(key).is_some_and(JsonValue::is_null)
	}

	/// Insert a value, returning the previous value for that key.
	pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<JsonValue>
	where
		K: Into<String>,
		JsonValue: From<V>,
	{
		self.0.insert(key.into(), JsonValue::from(value))
	}

	/// Remove a key, keeping the order of the remaining entries.
	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.shift_remove(key)
	}

	pub fn add_string(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
		self.0.insert(key.to_owned(), JsonValue::String(value.into()));
		self
	}

	pub fn add_number(&mut self, key: &str, value: impl Into<JsonNumber>) -> &mut Self {
		self.0.insert(key.to_owned(), JsonValue::Number(value.into()));
		self
	}

	pub fn add_boolean(&mut self, key: &str, value: bool) -> &mut Self {
		self.0.insert(key.to_owned(), JsonValue::Boolean(value));
		self
	}

	/// Store an explicit null. `has(key)` and `is_null(key)` are both `true` afterwards.
	pub fn add_null(&mut self, key: &str) -> &mut Self {
		self.0.insert(key.to_owned(), JsonValue::Null);
		self
	}

	/// Store the value if there is one. `None` leaves the object untouched.
	pub fn add_optional<T>(&mut self, key: &str, value: Option<T>) -> &mut Self
	where
		JsonValue: From<T>,
	{
		if let Some(value) = value {
			self.0.insert(key.to_owned(), JsonValue::from(value));
		}
		self
	}

	/// Build a nested object with `configure` and store it under `key`.
	///
	/// # Errors
	/// Returns the error of `configure`; nothing is stored in that case.
	pub fn add_object<F>(&mut self, key: &str, configure: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut JsonObject) -> Result<()>,
	{
		let object = JsonObject::build(configure)?;
		self.0.insert(key.to_owned(), JsonValue::Object(object));
		Ok(self)
	}

	/// Build a nested array with `configure` and store it under `key`.
	///
	/// # Errors
	/// Returns the error of `configure`; nothing is stored in that case.
	pub fn add_array<F>(&mut self, key: &str, configure: F) -> Result<&mut Self>
	where
		F: FnOnce(&mut JsonArray) -> Result<()>,
	{
		let array = JsonArray::build(configure)?;
		self.0.insert(key.to_owned(), JsonValue::Array(array));
		Ok(self)
	}

	/// Serialize this `JsonObject` into a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json_string()
	}

	/// Serialize this `JsonObject` into a single-line, pretty-printed JSON string with spaces.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.is_empty() {
			return String::from("{}");
		}
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_single_line(value)
				)
			})
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	/// Serialize this `JsonObject` into a multi-line, pretty-printed JSON string with indentation.
	///
	/// `max_width` controls when to wrap lines, and `depth` sets the base indentation level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		if self.is_empty() {
			return String::from("{}");
		}
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let key_string = format!("{}  \"{}\": ", indent, escape_json_string(key));
				format!(
					"{key_string}{}",
					stringify_pretty_multi_line(value, max_width, depth + 1, key_string.len())
				)
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{}}}", items.join(",\n"), indent)
	}

	/// Return an iterator over key-value pairs in insertion order.
	pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonValue> {
		self.0.keys()
	}

	pub fn values(&self) -> indexmap::map::Values<'_, String, JsonValue> {
		self.0.values()
	}

	#[must_use]
	pub fn as_map(&self) -> &IndexMap<String, JsonValue> {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> IndexMap<String, JsonValue> {
		self.0
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.write_json(f)
	}
}

/// Convert a `Vec<(K, V)>` into a `JsonObject`, keeping the order of the pairs.
impl<K, V> From<Vec<(K, V)>> for JsonObject
where
	K: Into<String>,
	JsonValue: From<V>,
{
	fn from(input: Vec<(K, V)>) -> Self {
		input.into_iter().collect()
	}
}

/// Copy a native map. The new object owns its own key set.
impl<K, V, S> From<HashMap<K, V, S>> for JsonObject
where
	K: Into<String>,
	JsonValue: From<V>,
{
	fn from(input: HashMap<K, V, S>) -> Self {
		input.into_iter().collect()
	}
}

impl<K, V> From<BTreeMap<K, V>> for JsonObject
where
	K: Into<String>,
	JsonValue: From<V>,
{
	fn from(input: BTreeMap<K, V>) -> Self {
		input.into_iter().collect()
	}
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
	K: Into<String>,
	JsonValue: From<V>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		JsonObject(
			iter
				.into_iter()
				.map(|(key, value)| (key.into(), JsonValue::from(value)))
				.collect(),
		)
	}
}

impl<K, V> Extend<(K, V)> for JsonObject
where
	K: Into<String>,
	JsonValue: From<V>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self
			.0
			.extend(iter.into_iter().map(|(key, value)| (key.into(), JsonValue::from(value))));
	}
}

impl IntoIterator for JsonObject {
	type Item = (String, JsonValue);
	type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a JsonObject {
	type Item = (&'a String, &'a JsonValue);
	type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
