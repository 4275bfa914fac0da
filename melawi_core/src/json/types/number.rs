//! JSON number storage and conversions from Rust numeric types.
//!
//! Numbers are not unified into one representation: a [`JsonNumber`] remembers the numeric type it
//! was created from, and typed getters only hand it back unchanged as that same type.

use super::JsonValue;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt::{self, Display};

/// A JSON number tagged with the numeric type it was stored as.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonNumber {
	Byte(i8),
	Short(i16),
	Integer(i32),
	Long(i64),
	BigInteger(BigInt),
	Float(f32),
	Double(f64),
	BigDecimal(BigDecimal),
}

impl JsonNumber {
	/// Return the stored numeric type as a lowercase string (`"integer"`, `"double"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		match self {
			Self::Byte(_) => "byte",
			Self::Short(_) => "short",
			Self::Integer(_) => "integer",
			Self::Long(_) => "long",
			Self::BigInteger(_) => "big integer",
			Self::Float(_) => "float",
			Self::Double(_) => "double",
			Self::BigDecimal(_) => "big decimal",
		}
	}

	/// `false` for NaN and infinite floats, which have no JSON representation.
	#[must_use]
	pub fn is_finite(&self) -> bool {
		match self {
			JsonNumber::Float(v) => v.is_finite(),
			JsonNumber::Double(v) => v.is_finite(),
			_ => true,
		}
	}
}

/// Writes the number as JSON text. Non-finite floats are written as `null`.
impl Display for JsonNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if !self.is_finite() {
			return f.write_str("null");
		}
		match self {
			Self::Byte(v) => write!(f, "{v}"),
			Self::Short(v) => write!(f, "{v}"),
			Self::Integer(v) => write!(f, "{v}"),
			Self::Long(v) => write!(f, "{v}"),
			Self::BigInteger(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Double(v) => write!(f, "{v}"),
			Self::BigDecimal(v) => write!(f, "{v}"),
		}
	}
}

/// Implement `From<T>` for types that map one-to-one onto a `JsonNumber` variant.
macro_rules! impl_from_number_exact {
	($($t:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$t> for JsonNumber {
				fn from(input: $t) -> Self {
					JsonNumber::$variant(input)
				}
			}
		)+
	};
}

/// Implement `From<T>` for unsigned types, widened losslessly into the next signed variant.
macro_rules! impl_from_number_widened {
	($($t:ty => $variant:ident($target:ty)),+ $(,)?) => {
		$(
			impl From<$t> for JsonNumber {
				fn from(input: $t) -> Self {
					JsonNumber::$variant(<$target>::from(input))
				}
			}
		)+
	};
}

/// Implement `From<T>` for wide integers: `Long` when the value fits, `BigInteger` otherwise.
macro_rules! impl_from_number_wide {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonNumber {
				fn from(input: $t) -> Self {
					match i64::try_from(input) {
						Ok(value) => JsonNumber::Long(value),
						Err(_) => JsonNumber::BigInteger(BigInt::from(input)),
					}
				}
			}
		)+
	};
}

/// Implement `From<T>` for `JsonValue` by way of `JsonNumber`.
macro_rules! impl_value_from_number {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(JsonNumber::from(input))
				}
			}
		)+
	};
}

impl_from_number_exact!(
	i8 => Byte,
	i16 => Short,
	i32 => Integer,
	i64 => Long,
	f32 => Float,
	f64 => Double,
	BigInt => BigInteger,
	BigDecimal => BigDecimal,
);
impl_from_number_widened!(u8 => Short(i16), u16 => Integer(i32), u32 => Long(i64));
impl_from_number_wide!(u64, u128, usize, i128, isize);
impl_value_from_number!(
	i8, i16, i32, i64, f32, f64, u8, u16, u32, u64, u128, usize, i128, isize, BigInt, BigDecimal
);

impl From<JsonNumber> for JsonValue {
	fn from(input: JsonNumber) -> Self {
		JsonValue::Number(input)
	}
}
