//! Minimal XML text builder. Shares nothing with the JSON modules.

mod generator;

pub use generator::{XmlGenerator, escape_xml_text};
