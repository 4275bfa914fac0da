use std::fmt::{self, Display};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Appends XML elements to a document that starts with the XML declaration.
///
/// Element names and field values are trimmed. Field values are escaped as text content; element
/// names are written as given and must already be valid XML names.
///
/// ```rust
/// use melawi_core::xml::XmlGenerator;
///
/// let mut xml = XmlGenerator::new();
/// xml.start_element("person").add_field(" name ", " Bob & Alice ").end_element("person");
/// assert_eq!(
/// 	xml.into_string(),
/// 	r#"<?xml version="1.0" encoding="UTF-8"?><person><name>Bob &amp; Alice</name></person>"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct XmlGenerator {
	buffer: String,
}

impl Default for XmlGenerator {
	fn default() -> Self {
		Self {
			buffer: String::from(DECLARATION),
		}
	}
}

impl XmlGenerator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `<name>`.
	pub fn start_element(&mut self, name: &str) -> &mut Self {
		self.buffer.push('<');
		self.buffer.push_str(name.trim());
		self.buffer.push('>');
		self
	}

	/// Append `<name>value</name>`.
	pub fn add_field(&mut self, name: &str, value: &str) -> &mut Self {
		self.start_element(name);
		self.buffer.push_str(&escape_xml_text(value.trim()));
		self.end_element(name)
	}

	/// Append `</name>`.
	pub fn end_element(&mut self, name: &str) -> &mut Self {
		self.buffer.push_str("</");
		self.buffer.push_str(name.trim());
		self.buffer.push('>');
		self
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.buffer
	}

	#[must_use]
	pub fn into_string(self) -> String {
		self.buffer
	}
}

impl Display for XmlGenerator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.buffer)
	}
}

/// Replace the five XML special characters with their predefined entities.
#[must_use]
pub fn escape_xml_text(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&apos;"),
			c => output.push(c),
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn empty_document_is_declaration() {
		assert_eq!(XmlGenerator::new().to_string(), DECLARATION);
	}

	#[test]
	fn nested_elements() {
		let mut xml = XmlGenerator::new();
		xml
			.start_element("config")
			.add_field("host", "localhost")
			.start_element(" limits ")
			.add_field("max", " 10 ")
			.end_element("limits ")
			.end_element("config");
		assert_eq!(
			xml.as_str().strip_prefix(DECLARATION),
			Some("<config><host>localhost</host><limits><max>10</max></limits></config>")
		);
	}

	#[rstest]
	#[case("plain", "plain")]
	#[case("a < b && c > d", "a &lt; b &amp;&amp; c &gt; d")]
	#[case(r#"say "hi" it's"#, "say &quot;hi&quot; it&apos;s")]
	#[case("ünïcödé", "ünïcödé")]
	fn text_escaping(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_xml_text(input), expected);
	}

	#[test]
	fn empty_field() {
		let mut xml = XmlGenerator::new();
		xml.add_field("note", "   ");
		assert!(xml.into_string().ends_with("<note></note>"));
	}
}
