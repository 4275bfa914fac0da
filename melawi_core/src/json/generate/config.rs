/// Behaviour switches of a [`JsonGenerator`](super::JsonGenerator).
///
/// The default escapes strings, validates nesting and trims whitespace around names and string
/// values. [`GeneratorConfig::legacy`] reproduces the unchecked, unescaped output of older
/// producers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Pass field names and string values through [`escape_json_string`](crate::json::escape_json_string).
	pub escape_strings: bool,
	/// Track open containers and reject mismatched or unbalanced ends.
	pub validate_structure: bool,
	/// Trim leading and trailing whitespace of field names and string values.
	pub trim_whitespace: bool,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			escape_strings: true,
			validate_structure: true,
			trim_whitespace: true,
		}
	}
}

impl GeneratorConfig {
	/// Verbatim strings, no structure checks, whitespace trimmed.
	#[must_use]
	pub fn legacy() -> Self {
		Self {
			escape_strings: false,
			validate_structure: false,
			trim_whitespace: true,
		}
	}

	#[must_use]
	pub fn with_escape_strings(mut self, escape_strings: bool) -> Self {
		self.escape_strings = escape_strings;
		self
	}

	#[must_use]
	pub fn with_validate_structure(mut self, validate_structure: bool) -> Self {
		self.validate_structure = validate_structure;
		self
	}

	#[must_use]
	pub fn with_trim_whitespace(mut self, trim_whitespace: bool) -> Self {
		self.trim_whitespace = trim_whitespace;
		self
	}
}
