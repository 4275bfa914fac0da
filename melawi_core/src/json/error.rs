//! Error kinds raised by the JSON value model and the JSON generator.
//!
//! Public functions return [`anyhow::Result`]; the error inside is a [`JsonError`] and can be
//! recovered with `error.downcast_ref::<JsonError>()`.

use super::ContainerKind;
use std::fmt::Display;
use thiserror::Error;

/// Failures of the JSON value model and the JSON generator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum JsonError {
	/// A strict typed getter could not produce the requested type.
	#[error("{container}[{key}] is not a {expected}")]
	TypeCoercion {
		container: &'static str,
		key: String,
		expected: &'static str,
	},

	/// The generator was asked to close or finish a malformed document.
	#[error(transparent)]
	Structure(#[from] StructureError),
}

impl JsonError {
	pub(crate) fn type_coercion(container: &'static str, key: impl Display, expected: &'static str) -> Self {
		JsonError::TypeCoercion {
			container,
			key: key.to_string(),
			expected,
		}
	}
}

/// Nesting and placement errors detected by a validating [`JsonGenerator`](super::JsonGenerator).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StructureError {
	#[error("cannot end {closing}: no container is open")]
	Unbalanced { closing: ContainerKind },

	#[error("cannot end {closing}: the innermost open container is an {open}")]
	Mismatched { closing: ContainerKind, open: ContainerKind },

	#[error("{depth} container(s) still open")]
	Unclosed { depth: usize },

	#[error("a named field was written outside an object")]
	FieldOutsideObject,

	#[error("an unnamed value was written outside an array")]
	ElementOutsideArray,

	#[error("a second top-level value was started")]
	SecondRoot,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_coercion_message() {
		let error = JsonError::type_coercion("JsonObject", "age", "Integer");
		assert_eq!(error.to_string(), "JsonObject[age] is not a Integer");

		let error = JsonError::type_coercion("JsonArray", 3, "Boolean");
		assert_eq!(error.to_string(), "JsonArray[3] is not a Boolean");
	}

	#[test]
	fn structure_messages() {
		let error = JsonError::from(StructureError::Mismatched {
			closing: ContainerKind::Object,
			open: ContainerKind::Array,
		});
		assert_eq!(
			error.to_string(),
			"cannot end object: the innermost open container is an array"
		);

		let error = JsonError::from(StructureError::Unbalanced {
			closing: ContainerKind::Array,
		});
		assert_eq!(error.to_string(), "cannot end array: no container is open");

		let error = JsonError::from(StructureError::Unclosed { depth: 2 });
		assert_eq!(error.to_string(), "2 container(s) still open");

		let error = JsonError::from(StructureError::FieldOutsideObject);
		assert_eq!(error.to_string(), "a named field was written outside an object");

		let error = JsonError::from(StructureError::SecondRoot);
		assert_eq!(error.to_string(), "a second top-level value was started");
	}

	#[test]
	fn downcast_from_anyhow() {
		let error = anyhow::Error::from(JsonError::type_coercion("JsonObject", "x", "Long"));
		assert_eq!(
			error.downcast_ref::<JsonError>(),
			Some(&JsonError::TypeCoercion {
				container: "JsonObject",
				key: "x".to_string(),
				expected: "Long",
			})
		);
	}
}
