//! Typed, coercing getters shared by [`JsonObject`] (keyed by `&str`) and [`JsonArray`]
//! (indexed by `usize`).
//!
//! A strict getter such as `get_integer` returns the stored value when it already has the
//! requested type, parses it when a string is stored, and fails with
//! [`JsonError::TypeCoercion`] otherwise. Each strict getter has an `_or` twin that returns a
//! default instead of failing.
//!
//! ```rust
//! use melawi_core::json::JsonObject;
//!
//! let mut object = JsonObject::new();
//! object.add_string("port", "8080").add_number("ratio", 0.5);
//!
//! assert_eq!(object.get_integer("port").unwrap(), 8080);
//! assert_eq!(object.get_double("ratio").unwrap(), 0.5);
//! assert!(object.get_integer("ratio").is_err());
//! assert_eq!(object.get_integer_or("missing", 80), 80);
//! ```

use crate::json::*;
use anyhow::Result;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::borrow::Cow;

/// Types a stored [`JsonValue`] can be coerced into.
pub trait FromJsonValue: Sized {
	/// Type name used in coercion error messages.
	const TYPE_NAME: &'static str;

	/// `Some` if `value` holds this exact type, or a string that parses as it.
	fn from_json_value(value: &JsonValue) -> Option<Self>;
}

impl FromJsonValue for bool {
	const TYPE_NAME: &'static str = "Boolean";

	fn from_json_value(value: &JsonValue) -> Option<Self> {
		match value {
			JsonValue::Boolean(v) => Some(*v),
			JsonValue::String(text) if text.eq_ignore_ascii_case("true") => Some(true),
			JsonValue::String(text) if text.eq_ignore_ascii_case("false") => Some(false),
			_ => None,
		}
	}
}

impl FromJsonValue for String {
	const TYPE_NAME: &'static str = "String";

	fn from_json_value(value: &JsonValue) -> Option<Self> {
		match value {
			JsonValue::String(text) => Some(text.clone()),
			_ => None,
		}
	}
}

/// Numbers coerce only from their own `JsonNumber` variant or from a parseable string.
macro_rules! impl_from_json_number {
	($($t:ty => $variant:ident, $name:literal;)+) => {
		$(
			impl FromJsonValue for $t {
				const TYPE_NAME: &'static str = $name;

				#[allow(clippy::clone_on_copy)]
				fn from_json_value(value: &JsonValue) -> Option<Self> {
					match value {
						JsonValue::Number(JsonNumber::$variant(v)) => Some(v.clone()),
						JsonValue::String(text) => text.parse::<$t>().ok(),
						_ => None,
					}
				}
			}
		)+
	};
}

impl_from_json_number! {
	i8 => Byte, "Byte";
	i16 => Short, "Short";
	i32 => Integer, "Integer";
	i64 => Long, "Long";
	f32 => Float, "Float";
	f64 => Double, "Double";
	BigInt => BigInteger, "BigInteger";
	BigDecimal => BigDecimal, "BigDecimal";
}

/// Generates the accessor surface of a container. `$key` is the lookup type accepted by the
/// container's `get`, `$name` the container name used in error messages.
macro_rules! impl_typed_getters {
	($container:ident, $key:ty, $name:literal) => {
		impl $container {
			/// Coerce the value at `key` into `T`.
			///
			/// # Errors
			/// Fails with [`JsonError::TypeCoercion`] if the value is missing, has another type,
			/// or is a string that does not parse as `T`.
			pub fn get_as<T: FromJsonValue>(&self, key: $key) -> Result<T> {
				self
					.get(key)
					.and_then(T::from_json_value)
					.ok_or_else(|| JsonError::type_coercion($name, key, T::TYPE_NAME).into())
			}

			/// Coerce the value at `key` into `T`, or return `default`.
			pub fn get_as_or<T: FromJsonValue>(&self, key: $key, default: T) -> T {
				self.get(key).and_then(T::from_json_value).unwrap_or_else(|| {
					log::trace!("{}[{}] is not a {}, using default", $name, key, T::TYPE_NAME);
					default
				})
			}

			impl_typed_getters!(@scalar $key, get_boolean, get_boolean_or, bool);
			impl_typed_getters!(@scalar $key, get_byte, get_byte_or, i8);
			impl_typed_getters!(@scalar $key, get_short, get_short_or, i16);
			impl_typed_getters!(@scalar $key, get_integer, get_integer_or, i32);
			impl_typed_getters!(@scalar $key, get_long, get_long_or, i64);
			impl_typed_getters!(@scalar $key, get_float, get_float_or, f32);
			impl_typed_getters!(@scalar $key, get_double, get_double_or, f64);
			impl_typed_getters!(@scalar $key, get_big_integer, get_big_integer_or, BigInt);
			impl_typed_getters!(@scalar $key, get_big_decimal, get_big_decimal_or, BigDecimal);
			impl_typed_getters!(@scalar $key, get_string, get_string_or, String);

			/// The object at `key`.
			///
			/// A missing or null entry, or an empty value, yields a fresh empty object. A
			/// one-element array yields its element as an object.
			///
			/// # Errors
			/// Fails with [`JsonError::TypeCoercion`] for any other stored value.
			pub fn get_object(&self, key: $key) -> Result<Cow<'_, JsonObject>> {
				match self.get(key) {
					None | Some(JsonValue::Null) => Ok(Cow::Owned(JsonObject::new())),
					Some(JsonValue::Object(object)) => Ok(Cow::Borrowed(object)),
					Some(value) if value.is_empty() => Ok(Cow::Owned(JsonObject::new())),
					Some(JsonValue::Array(array)) if array.len() == 1 => {
						log::trace!("{}[{}] unwraps a one-element array", $name, key);
						array
							.get_object(0)
							.map_err(|_| JsonError::type_coercion($name, key, "JsonObject").into())
					}
					Some(_) => Err(JsonError::type_coercion($name, key, "JsonObject").into()),
				}
			}

			/// The array at `key`.
			///
			/// A missing or null entry, or an empty value, yields a fresh empty array. A stored
			/// object yields a new one-element array holding it.
			///
			/// # Errors
			/// Fails with [`JsonError::TypeCoercion`] for any other stored value.
			pub fn get_array(&self, key: $key) -> Result<Cow<'_, JsonArray>> {
				match self.get(key) {
					None | Some(JsonValue::Null) => Ok(Cow::Owned(JsonArray::new())),
					Some(JsonValue::Array(array)) => Ok(Cow::Borrowed(array)),
					Some(value) if value.is_empty() => Ok(Cow::Owned(JsonArray::new())),
					Some(JsonValue::Object(object)) => {
						log::trace!("{}[{}] wraps an object into an array", $name, key);
						Ok(Cow::Owned(JsonArray(vec![JsonValue::Object(object.clone())])))
					}
					Some(_) => Err(JsonError::type_coercion($name, key, "JsonArray").into()),
				}
			}

			/// `true` if `key` is absent, holds an empty string, or holds an empty container.
			#[must_use]
			pub fn is_empty_at(&self, key: $key) -> bool {
				self.get(key).is_none_or(JsonValue::is_empty)
			}
		}
	};
	(@scalar $key:ty, $get:ident, $get_or:ident, $t:ty) => {
		#[doc = concat!("Strict getter for `", stringify!($t), "`, see [`get_as`](Self::get_as).")]
		///
		/// # Errors
		/// Fails with [`JsonError::TypeCoercion`] if the value cannot be coerced.
		pub fn $get(&self, key: $key) -> Result<$t> {
			self.get_as::<$t>(key)
		}

		#[doc = concat!("Getter for `", stringify!($t), "` falling back to `default`.")]
		pub fn $get_or(&self, key: $key, default: $t) -> $t {
			self.get_as_or::<$t>(key, default)
		}
	};
}

impl_typed_getters!(JsonObject, &str, "JsonObject");
impl_typed_getters!(JsonArray, usize, "JsonArray");
