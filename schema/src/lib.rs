//! This is a Rust library holding the schema descriptors and runtime decode
//! plans behind detag-derived tagged-union decoders. A descriptor describes a
//! sum type's wire format (discriminator key plus per-variant wire names);
//! compiling it yields a plan that decodes tagged JSON objects.
//!
//! ```
//! use detag_schema::*;
//!
//! let schema = SchemaDescriptor::new("Event", "tag", vec![
//!     VariantDescriptor::new("hello", None),
//!     VariantDescriptor::new("world", Some("Int")),
//! ]);
//!
//! let plan = DecodePlan::compile(&schema);
//! let decoded = plan.decode_str(r#"{"tag": "World", "world": 1}"#).unwrap();
//! assert_eq!(decoded.name, "world");
//! assert_eq!(decoded.payload.unwrap().as_int(), 1);
//! ```

pub mod descriptor;
pub mod error;
pub mod naming;
pub mod plan;
pub mod value;

pub use descriptor::*;
pub use error::*;
pub use plan::*;
pub use value::*;
