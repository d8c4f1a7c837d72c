//! detag-compiler
//!
//! This crate implements:
//!  1) The host declaration model (`Declaration`, `VariantDecl`, `ParamDecl`),
//!  2) Schema extraction (`extract_schema` → `SchemaDescriptor`),
//!  3) A schema verifier (duplicate variant names),
//!  4) Code generation (`compile_schema_to_rust` → `String`),
//!  5) Diagnostics (`Diagnostic`), and the `FromTagged` trait.

pub mod derive;
pub mod error;
pub mod extract;
pub mod gen_rust;
pub mod traits;
pub mod types;
pub mod verify;

pub use derive::derive_decoder;
pub use derive::derive_schema;
pub use derive::DeriveOptions;
pub use derive::DEFAULT_DISCRIMINATOR_KEY;
pub use extract::extract_schema;
pub use gen_rust::compile_schema_to_rust;
pub use verify::verify_schema;
