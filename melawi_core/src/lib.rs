//! JSON value model, JSON serializer and incremental JSON generator, plus a small XML text builder.
//!
//! # Examples
//!
//! ```rust
//! use melawi_core::json::{JsonGenerator, JsonObject};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut object = JsonObject::new();
//!     object.add_string("name", "Bob").add_number("age", 30);
//!     assert_eq!(object.get_integer("age")?, 30);
//!     assert_eq!(object.stringify(), r#"{"name":"Bob","age":30}"#);
//!
//!     let mut generator = JsonGenerator::new();
//!     generator
//!         .start_object()
//!         .write_string("name", "Bob")
//!         .write_number("age", 30)
//!         .end_object()?;
//!     assert_eq!(generator.finish()?, r#"{"name":"Bob","age":30}"#);
//!     Ok(())
//! }
//! ```

pub mod json;

pub mod xml;
