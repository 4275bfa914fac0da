use super::{ContainerKind, GeneratorConfig};
use crate::json::{JsonError, JsonNumber, JsonValue, StructureError, ToJson, escape_json_into};
use anyhow::Result;
use std::fmt::{self, Display};

/// Builds JSON text by appending fields and containers in document order.
///
/// Every value is written followed by a `,`; closing a container or reading the result strips
/// that trailing separator again. With [`GeneratorConfig::validate_structure`] enabled the
/// generator keeps a stack of open containers and rejects ends that do not match. Named fields
/// outside an object, unnamed values outside an array and a second top-level value are
/// remembered and reported by [`finish`](Self::finish).
///
/// ```rust
/// use melawi_core::json::JsonGenerator;
/// # fn main() -> anyhow::Result<()> {
/// let mut generator = JsonGenerator::new();
/// generator
/// 	.start_object()
/// 	.write_string("name", "Bob")
/// 	.start_array("scores")
/// 	.write_array([7, 9])
/// 	.end_array()?
/// 	.end_object()?;
/// assert_eq!(generator.finish()?, r#"{"name":"Bob","scores":[7,9]}"#);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonGenerator {
	buffer: String,
	open: Vec<ContainerKind>,
	config: GeneratorConfig,
	root_started: bool,
	misplaced: Option<StructureError>,
}

impl JsonGenerator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_config(config: GeneratorConfig) -> Self {
		Self {
			buffer: String::new(),
			open: Vec::new(),
			config,
			root_started: false,
			misplaced: None,
		}
	}

	#[must_use]
	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Number of containers currently open.
	#[must_use]
	pub fn depth(&self) -> usize {
		self.open.len()
	}

	/// Open a nameless object, either at the top level or as an array element.
	pub fn start_object(&mut self) -> &mut Self {
		self.check_nameless_container();
		self.open_container(ContainerKind::Object)
	}

	/// Open an object stored under `field`.
	pub fn start_object_field(&mut self, field: &str) -> &mut Self {
		self.write_field_name(field);
		self.open_container(ContainerKind::Object)
	}

	/// Open an array stored under `field`.
	pub fn start_array(&mut self, field: &str) -> &mut Self {
		self.write_field_name(field);
		self.open_container(ContainerKind::Array)
	}

	/// Open a nameless array, as an element of an enclosing array.
	pub fn start_array_element(&mut self) -> &mut Self {
		self.check_nameless_container();
		self.open_container(ContainerKind::Array)
	}

	/// Close the innermost object.
	///
	/// # Errors
	/// With structure validation enabled, fails with [`JsonError::Structure`] if no container is
	/// open or the innermost one is an array. The buffer is left untouched in that case.
	pub fn end_object(&mut self) -> Result<&mut Self> {
		self.close_container(ContainerKind::Object)
	}

	/// Close the innermost array.
	///
	/// # Errors
	/// With structure validation enabled, fails with [`JsonError::Structure`] if no container is
	/// open or the innermost one is an object. The buffer is left untouched in that case.
	pub fn end_array(&mut self) -> Result<&mut Self> {
		self.close_container(ContainerKind::Array)
	}

	pub fn write_string(&mut self, field: &str, value: &str) -> &mut Self {
		self.write_field_name(field);
		self.write_quoted(value);
		self.buffer.push(',');
		self
	}

	/// Write a number under `field`. Non-finite floats are written as `null`.
	pub fn write_number(&mut self, field: &str, value: impl Into<JsonNumber>) -> &mut Self {
		let number: JsonNumber = value.into();
		self.write_field_name(field);
		self.push_json(&number);
		self.buffer.push(',');
		self
	}

	pub fn write_boolean(&mut self, field: &str, value: bool) -> &mut Self {
		self.write_field_name(field);
		self.buffer.push_str(if value { "true" } else { "false" });
		self.buffer.push(',');
		self
	}

	pub fn write_null(&mut self, field: &str) -> &mut Self {
		self.write_field_name(field);
		self.buffer.push_str("null,");
		self
	}

	/// Write a run of array elements of one type. The brackets come from
	/// [`start_array`](Self::start_array) and [`end_array`](Self::end_array).
	///
	/// String elements are trimmed and escaped according to the config, like
	/// [`write_strings`](Self::write_strings).
	pub fn write_array<I, T>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = T>,
		T: Into<JsonValue>,
	{
		self.check_element();
		for value in values {
			let value: JsonValue = value.into();
			match value {
				JsonValue::String(text) => self.write_quoted(&text),
				other => self.push_json(&other),
			}
			self.buffer.push(',');
		}
		self
	}

	/// Write a run of string array elements, trimmed and escaped according to the config.
	pub fn write_strings<I, S>(&mut self, values: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.check_element();
		for value in values {
			self.write_quoted(value.as_ref());
			self.buffer.push(',');
		}
		self
	}

	/// The text written so far, without the pending trailing separator.
	///
	/// Open containers are not checked, so the snapshot may be incomplete JSON.
	#[must_use]
	pub fn as_json(&self) -> &str {
		self.buffer.strip_suffix(',').unwrap_or(&self.buffer)
	}

	/// Consume the generator and return the finished JSON text.
	///
	/// # Errors
	/// With structure validation enabled, fails with [`JsonError::Structure`] if a value was
	/// written in the wrong place or containers are still open.
	pub fn finish(mut self) -> Result<String> {
		if self.config.validate_structure {
			if let Some(error) = self.misplaced {
				return Err(self.structure_error(error));
			}
			if !self.open.is_empty() {
				return Err(self.structure_error(StructureError::Unclosed { depth: self.open.len() }));
			}
		}
		self.trim_separator();
		Ok(self.buffer)
	}

	fn open_container(&mut self, kind: ContainerKind) -> &mut Self {
		if self.open.is_empty() {
			self.root_started = true;
		}
		self.open.push(kind);
		self.buffer.push(match kind {
			ContainerKind::Object => '{',
			ContainerKind::Array => '[',
		});
		self
	}

	fn close_container(&mut self, kind: ContainerKind) -> Result<&mut Self> {
		if self.config.validate_structure {
			match self.open.last() {
				None => return Err(self.structure_error(StructureError::Unbalanced { closing: kind })),
				Some(&open) if open != kind => {
					return Err(self.structure_error(StructureError::Mismatched { closing: kind, open }));
				}
				Some(_) => {}
			}
		}
		self.open.pop();
		self.trim_separator();
		self.buffer.push(kind.closing_bracket());
		self.buffer.push(',');
		Ok(self)
	}

	fn check_nameless_container(&mut self) {
		if !self.open.is_empty() {
			self.check_element();
		} else if self.root_started {
			self.record_misplaced(StructureError::SecondRoot);
		}
	}

	fn check_element(&mut self) {
		if self.open.last() != Some(&ContainerKind::Array) {
			self.record_misplaced(StructureError::ElementOutsideArray);
		}
	}

	fn check_field(&mut self) {
		if self.open.last() != Some(&ContainerKind::Object) {
			self.record_misplaced(StructureError::FieldOutsideObject);
		}
	}

	// Only the first misplaced write is kept.
	fn record_misplaced(&mut self, error: StructureError) {
		if self.config.validate_structure && self.misplaced.is_none() {
			log::debug!("misplaced JSON value after {} bytes: {error}", self.buffer.len());
			self.misplaced = Some(error);
		}
	}

	fn structure_error(&self, error: StructureError) -> anyhow::Error {
		log::debug!("rejected JSON structure after {} bytes: {error}", self.buffer.len());
		JsonError::from(error).into()
	}

	fn trim_separator(&mut self) {
		if self.buffer.ends_with(',') {
			self.buffer.pop();
		}
	}

	fn write_field_name(&mut self, field: &str) {
		self.check_field();
		self.write_quoted(field);
		self.buffer.push(':');
	}

	fn write_quoted(&mut self, text: &str) {
		let text = if self.config.trim_whitespace { text.trim() } else { text };
		self.buffer.push('"');
		if self.config.escape_strings {
			if let Err(error) = escape_json_into(&mut self.buffer, text) {
				log::warn!("failed to escape JSON string: {error}");
			}
		} else {
			self.buffer.push_str(text);
		}
		self.buffer.push('"');
	}

	fn push_json(&mut self, value: &impl ToJson) {
		if let Err(error) = value.write_json(&mut self.buffer) {
			log::warn!("failed to write JSON value: {error}");
		}
	}
}

impl Display for JsonGenerator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_json())
	}
}
