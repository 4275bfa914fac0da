//! Append-only JSON text generation without building a value tree first.

mod config;
mod generator;

pub use config::GeneratorConfig;
pub use generator::JsonGenerator;

use std::fmt::{self, Display};

/// The kind of container a generator has open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
	Object,
	Array,
}

impl ContainerKind {
	fn closing_bracket(self) -> char {
		match self {
			ContainerKind::Object => '}',
			ContainerKind::Array => ']',
		}
	}
}

impl Display for ContainerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ContainerKind::Object => "object",
			ContainerKind::Array => "array",
		})
	}
}
