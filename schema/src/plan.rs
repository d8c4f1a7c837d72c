use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    descriptor::SchemaDescriptor,
    error::{DecodeError, EncodeError, PayloadError},
    value::Payload,
};

/// Wire shapes a payload type reference can resolve to.
///
/// Resolution happens once, when the plan is compiled; decoding is a pure
/// dispatch afterwards. Type references are otherwise opaque, so only the
/// spelling is consulted, accepting the common host spellings for each
/// native shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadShape {
    Bool,
    Int,
    UInt,
    Int64,
    UInt64,
    Float,
    Double,
    Str,
    Opaque,
}

impl PayloadShape {
    /// Resolves a payload type reference against the native wire shapes.
    /// Unrecognized references decode as opaque passthrough values.
    pub fn resolve(type_ref: &str) -> PayloadShape {
        match type_ref {
            "bool" | "Bool" => PayloadShape::Bool,
            "int" | "Int" | "Int32" | "i32" => PayloadShape::Int,
            "uint" | "UInt" | "UInt32" | "u32" => PayloadShape::UInt,
            "int64" | "Int64" | "i64" => PayloadShape::Int64,
            "uint64" | "UInt64" | "u64" => PayloadShape::UInt64,
            "float" | "Float" | "f32" => PayloadShape::Float,
            "double" | "Double" | "f64" => PayloadShape::Double,
            "string" | "String" | "str" => PayloadShape::Str,
            _ => PayloadShape::Opaque,
        }
    }

    fn decode(self, raw: &Value) -> Result<Payload, PayloadError> {
        match self {
            PayloadShape::Bool => raw
                .as_bool()
                .map(Payload::Bool)
                .ok_or_else(|| mismatch("a boolean", raw)),
            PayloadShape::Int => raw
                .as_i64()
                .and_then(|value| i32::try_from(value).ok())
                .map(Payload::Int)
                .ok_or_else(|| mismatch("a 32-bit integer", raw)),
            PayloadShape::UInt => raw
                .as_u64()
                .and_then(|value| u32::try_from(value).ok())
                .map(Payload::UInt)
                .ok_or_else(|| mismatch("a 32-bit unsigned integer", raw)),
            PayloadShape::Int64 => raw
                .as_i64()
                .map(Payload::Int64)
                .ok_or_else(|| mismatch("a 64-bit integer", raw)),
            PayloadShape::UInt64 => raw
                .as_u64()
                .map(Payload::UInt64)
                .ok_or_else(|| mismatch("a 64-bit unsigned integer", raw)),
            PayloadShape::Float => raw
                .as_f64()
                .map(|value| Payload::Float(value as f32))
                .ok_or_else(|| mismatch("a number", raw)),
            PayloadShape::Double => raw
                .as_f64()
                .map(Payload::Double)
                .ok_or_else(|| mismatch("a number", raw)),
            PayloadShape::Str => raw
                .as_str()
                .map(|value| Payload::String(value.to_string()))
                .ok_or_else(|| mismatch("a string", raw)),
            PayloadShape::Opaque => Ok(Payload::Opaque(raw.clone())),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> PayloadError {
    PayloadError::Mismatch {
        expected,
        found: json_type_name(found),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One baked dispatch arm: the variant's declared name, its wire names, and
/// the resolved payload shape (`None` for payload-less variants).
#[derive(Debug, Clone, PartialEq)]
struct PlanArm {
    name: String,
    tag: String,
    key: String,
    shape: Option<PayloadShape>,
}

/// The decode procedure derived from a validated schema.
///
/// A plan is compiled once per schema; all wire names are baked in at that
/// point and never re-derived while decoding. Decoding is synchronous, reads
/// nothing but the provided JSON value, and holds no mutable state, so one
/// plan may serve any number of concurrent decodes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodePlan {
    type_name: String,
    discriminator_key: String,
    arms: Vec<PlanArm>,
}

/// One decoded value of the sum type. Name and tag borrow from the plan, so
/// a decoded variant can outlive the JSON it was parsed from but not the
/// plan that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedVariant<'a> {
    pub name: &'a str,
    pub tag: &'a str,
    pub payload: Option<Payload>,
}

impl DecodePlan {
    /// Bakes the dispatch table for `schema`, one arm per variant in
    /// declaration order.
    pub fn compile(schema: &SchemaDescriptor) -> DecodePlan {
        let arms = schema
            .variants
            .iter()
            .map(|variant| PlanArm {
                name: variant.name.clone(),
                tag: variant.wire.tag.clone(),
                key: variant.wire.key.clone(),
                shape: variant.payload.as_deref().map(PayloadShape::resolve),
            })
            .collect();

        DecodePlan {
            type_name: schema.name.clone(),
            discriminator_key: schema.discriminator_key.clone(),
            arms,
        }
    }

    /// Name of the sum type this plan decodes.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Wire name of the discriminator field.
    pub fn discriminator_key(&self) -> &str {
        &self.discriminator_key
    }

    /// Decodes one tagged JSON object into a variant of the sum type.
    ///
    /// Reads the discriminator field, dispatches to the matching arm in
    /// declaration order, and decodes the payload at the variant's wire key
    /// when the variant carries one. All failures propagate as
    /// [`DecodeError`]s; nothing is defaulted.
    pub fn decode<'a>(&'a self, value: &Value) -> Result<DecodedVariant<'a>, DecodeError> {
        let tag = match value.get(&self.discriminator_key) {
            Some(Value::String(tag)) => tag.as_str(),
            _ => {
                return Err(DecodeError::MissingDiscriminator(
                    self.discriminator_key.clone(),
                ))
            }
        };

        let arm = self
            .arms
            .iter()
            .find(|arm| arm.tag == tag)
            .ok_or_else(|| DecodeError::UnknownDiscriminator(tag.to_string()))?;

        let payload = match arm.shape {
            None => None,
            Some(shape) => {
                let raw = value.get(&arm.key).ok_or_else(|| {
                    DecodeError::PayloadDecodeFailed {
                        variant: arm.name.clone(),
                        source: PayloadError::MissingField(arm.key.clone()),
                    }
                })?;
                let payload =
                    shape
                        .decode(raw)
                        .map_err(|source| DecodeError::PayloadDecodeFailed {
                            variant: arm.name.clone(),
                            source,
                        })?;
                Some(payload)
            }
        };

        Ok(DecodedVariant {
            name: &arm.name,
            tag: &arm.tag,
            payload,
        })
    }

    /// Parses `text` as JSON, then decodes it. See [`decode`](Self::decode).
    pub fn decode_str<'a>(&'a self, text: &str) -> Result<DecodedVariant<'a>, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DecodeError::Json(err.to_string()))?;
        self.decode(&value)
    }

    /// Re-encodes a variant through the same baked name mapping: the minimal
    /// object carrying the discriminator tag, plus the payload field when the
    /// variant takes one.
    pub fn encode(&self, variant: &str, payload: Option<Payload>) -> Result<Value, EncodeError> {
        let arm = self
            .arms
            .iter()
            .find(|arm| arm.name == variant)
            .ok_or_else(|| EncodeError::UnknownVariant(variant.to_string()))?;

        let mut fields = serde_json::Map::new();
        fields.insert(
            self.discriminator_key.clone(),
            Value::String(arm.tag.clone()),
        );
        match (arm.shape, payload) {
            (None, None) => {}
            (Some(_), Some(payload)) => {
                fields.insert(arm.key.clone(), payload.to_json());
            }
            (Some(_), None) => return Err(EncodeError::MissingPayload(arm.name.clone())),
            (None, Some(_)) => return Err(EncodeError::UnexpectedPayload(arm.name.clone())),
        }

        Ok(Value::Object(fields))
    }
}

/// Decodes the payload field `key` of `value` as `T` on behalf of a
/// generated decoder, reporting failures against `variant`.
pub fn decode_payload<T: DeserializeOwned>(
    value: &Value,
    key: &str,
    variant: &str,
) -> Result<T, DecodeError> {
    let raw = value.get(key).ok_or_else(|| DecodeError::PayloadDecodeFailed {
        variant: variant.to_string(),
        source: PayloadError::MissingField(key.to_string()),
    })?;
    serde_json::from_value(raw.clone()).map_err(|err| DecodeError::PayloadDecodeFailed {
        variant: variant.to_string(),
        source: PayloadError::Invalid(err.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::VariantDescriptor;
    use serde_json::json;

    fn test_schema() -> SchemaDescriptor {
        SchemaDescriptor::new(
            "Test",
            "tag",
            vec![
                VariantDescriptor::new("hello", None),
                VariantDescriptor::new("reallyCamel", None),
                VariantDescriptor::new("world", Some("Int")),
            ],
        )
    }

    #[test]
    fn plan_decodes_payload_variant() {
        let plan = DecodePlan::compile(&test_schema());
        let decoded = plan.decode(&json!({"tag": "World", "world": 1})).unwrap();
        assert_eq!(decoded.name, "world");
        assert_eq!(decoded.tag, "World");
        assert_eq!(decoded.payload, Some(Payload::Int(1)));
    }

    #[test]
    fn plan_decodes_unit_variants() {
        let plan = DecodePlan::compile(&test_schema());

        let decoded = plan.decode(&json!({"tag": "Hello"})).unwrap();
        assert_eq!(decoded.name, "hello");
        assert_eq!(decoded.payload, None);

        let decoded = plan.decode(&json!({"tag": "ReallyCamel"})).unwrap();
        assert_eq!(decoded.name, "reallyCamel");
        assert_eq!(decoded.payload, None);
    }

    #[test]
    fn plan_rejects_unknown_discriminator() {
        let plan = DecodePlan::compile(&test_schema());
        assert_eq!(
            plan.decode(&json!({"tag": "Unknown"})),
            Err(DecodeError::UnknownDiscriminator("Unknown".to_string()))
        );
    }

    #[test]
    fn plan_rejects_missing_or_malformed_discriminator() {
        let plan = DecodePlan::compile(&test_schema());
        assert_eq!(
            plan.decode(&json!({})),
            Err(DecodeError::MissingDiscriminator("tag".to_string()))
        );
        assert_eq!(
            plan.decode(&json!({"tag": 3})),
            Err(DecodeError::MissingDiscriminator("tag".to_string()))
        );
    }

    #[test]
    fn plan_rejects_mistyped_payload() {
        let plan = DecodePlan::compile(&test_schema());
        let err = plan.decode(&json!({"tag": "World", "world": "x"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadDecodeFailed {
                variant: "world".to_string(),
                source: PayloadError::Mismatch {
                    expected: "a 32-bit integer",
                    found: "a string",
                },
            }
        );
    }

    #[test]
    fn plan_rejects_missing_payload_field() {
        let plan = DecodePlan::compile(&test_schema());
        let err = plan.decode(&json!({"tag": "World"})).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadDecodeFailed {
                variant: "world".to_string(),
                source: PayloadError::MissingField("world".to_string()),
            }
        );
    }

    #[test]
    fn plan_decode_str_reports_bad_json() {
        let plan = DecodePlan::compile(&test_schema());
        let decoded = plan.decode_str(r#"{"tag": "World", "world": 1}"#).unwrap();
        assert_eq!(decoded.name, "world");

        assert!(matches!(
            plan.decode_str("{not json"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn plan_round_trips_unit_variants() {
        let plan = DecodePlan::compile(&test_schema());
        for name in ["hello", "reallyCamel"] {
            let encoded = plan.encode(name, None).unwrap();
            let decoded = plan.decode(&encoded).unwrap();
            assert_eq!(decoded.name, name);
            assert_eq!(decoded.payload, None);
        }
    }

    #[test]
    fn plan_round_trips_payload_variant() {
        let plan = DecodePlan::compile(&test_schema());
        let encoded = plan.encode("world", Some(Payload::Int(42))).unwrap();
        assert_eq!(encoded, json!({"tag": "World", "world": 42}));
        let decoded = plan.decode(&encoded).unwrap();
        assert_eq!(decoded.payload, Some(Payload::Int(42)));
    }

    #[test]
    fn plan_encode_enforces_payload_arity() {
        let plan = DecodePlan::compile(&test_schema());
        assert_eq!(
            plan.encode("world", None),
            Err(EncodeError::MissingPayload("world".to_string()))
        );
        assert_eq!(
            plan.encode("hello", Some(Payload::Int(1))),
            Err(EncodeError::UnexpectedPayload("hello".to_string()))
        );
        assert_eq!(
            plan.encode("nope", None),
            Err(EncodeError::UnknownVariant("nope".to_string()))
        );
    }

    #[test]
    fn plan_passes_opaque_payloads_through() {
        let schema = SchemaDescriptor::new(
            "Envelope",
            "tag",
            vec![VariantDescriptor::new("custom", Some("Metadata"))],
        );
        let plan = DecodePlan::compile(&schema);
        let decoded = plan
            .decode(&json!({"tag": "Custom", "custom": {"a": [1, 2]}}))
            .unwrap();
        assert_eq!(
            decoded.payload.unwrap().as_opaque(),
            Some(&json!({"a": [1, 2]}))
        );
    }

    #[test]
    fn payload_shape_resolution() {
        assert_eq!(PayloadShape::resolve("Int"), PayloadShape::Int);
        assert_eq!(PayloadShape::resolve("i32"), PayloadShape::Int);
        assert_eq!(PayloadShape::resolve("String"), PayloadShape::Str);
        assert_eq!(PayloadShape::resolve("Double"), PayloadShape::Double);
        assert_eq!(PayloadShape::resolve("Metadata"), PayloadShape::Opaque);
    }

    #[test]
    fn decode_payload_helper() {
        let value = json!({"world": 1});
        assert_eq!(decode_payload::<i32>(&value, "world", "world").unwrap(), 1);

        let err = decode_payload::<i32>(&value, "other", "other").unwrap_err();
        assert_eq!(
            err,
            DecodeError::PayloadDecodeFailed {
                variant: "other".to_string(),
                source: PayloadError::MissingField("other".to_string()),
            }
        );

        let err = decode_payload::<i32>(&json!({"world": "x"}), "world", "world").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::PayloadDecodeFailed { variant, source: PayloadError::Invalid(_) }
                if variant == "world"
        ));
    }
}
