//! JSON values, typed accessors, serialization and incremental generation.

mod access;
mod error;
mod generate;
mod stringify;
mod types;

pub use access::FromJsonValue;
pub use error::{JsonError, StructureError};
pub use generate::{ContainerKind, GeneratorConfig, JsonGenerator};
pub use stringify::*;
pub use types::{JsonArray, JsonNumber, JsonObject, JsonValue};
