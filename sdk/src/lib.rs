//! detag
//!
//! This crate is the facade for deriving tagged-union decoders from sum-type
//! declarations.
//!
//! - `FromTagged` trait (re-exported from compiler)
//! - Declaration model, derivation pipeline, and Rust code generation
//! - Schema descriptors, decode plans, and payload values

pub use detag_compiler::derive::{
    derive_decoder, derive_schema, DeriveOptions, DEFAULT_DISCRIMINATOR_KEY,
};
pub use detag_compiler::error::{Diagnostic, DiagnosticKind, Severity};
pub use detag_compiler::gen_rust::compile_schema_to_rust;
pub use detag_compiler::traits::FromTagged;
pub use detag_compiler::types::{Declaration, DeclarationKind, ParamDecl, VariantDecl};
pub use detag_schema::{
    decode_payload, DecodeError, DecodePlan, DecodedVariant, EncodeError, Payload, PayloadError,
    PayloadShape, SchemaDescriptor, VariantDescriptor, WireNames,
};

/// Pretty-print a schema descriptor as JSON.
pub fn schema_to_json(schema: &SchemaDescriptor) -> String {
    serde_json::to_string_pretty(schema).unwrap()
}

pub mod traits {
    pub use detag_compiler::traits::FromTagged;
}

pub mod error {
    pub use detag_compiler::error::{Diagnostic, DiagnosticKind, Severity};
    pub use detag_schema::{DecodeError, EncodeError, PayloadError};
}

pub mod schema {
    pub use detag_schema::{
        DecodePlan, DecodedVariant, Payload, SchemaDescriptor, VariantDescriptor, WireNames,
    };
}

pub mod naming {
    pub use detag_schema::naming::{to_pascal_case, to_snake_case};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[derive(Debug, PartialEq)]
    enum Test {
        Hello,
        ReallyCamel,
        World(i32),
    }

    // Hand-written in the shape a generated extension takes.
    impl FromTagged for Test {
        fn from_tagged(value: &Value) -> Result<Self, DecodeError> {
            let tag = match value.get("tag") {
                Some(Value::String(tag)) => tag.as_str(),
                _ => return Err(DecodeError::MissingDiscriminator("tag".to_string())),
            };
            match tag {
                "Hello" => Ok(Test::Hello),
                "ReallyCamel" => Ok(Test::ReallyCamel),
                "World" => Ok(Test::World(decode_payload::<i32>(value, "world", "world")?)),
                _ => Err(DecodeError::UnknownDiscriminator(tag.to_string())),
            }
        }
    }

    #[test]
    fn from_tagged_str_decodes_json_text() {
        let result = Test::from_tagged_str(r#"{"tag": "World", "world": 1}"#).unwrap();
        assert_eq!(result, Test::World(1));
        assert_eq!(
            Test::from_tagged_str(r#"{"tag": "ReallyCamel"}"#).unwrap(),
            Test::ReallyCamel
        );
        assert!(matches!(
            Test::from_tagged_str("not json"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn schema_to_json_pretty_prints() {
        let schema = SchemaDescriptor::new(
            "Test",
            "tag",
            vec![VariantDescriptor::new("reallyCamel", None)],
        );
        let json = schema_to_json(&schema);
        assert!(json.contains("\"discriminator_key\": \"tag\""));
        assert!(json.contains("\"really_camel\""));
    }
}
