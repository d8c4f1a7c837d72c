use std::fmt;

/// This type holds a decoded variant payload.
///
/// Payloads whose declared type resolves to a native wire shape are decoded
/// into the matching typed variant; every other payload is carried through as
/// [`Opaque`](#variant.Opaque) raw JSON for the host to decode itself.
#[derive(Clone, PartialEq)]
pub enum Payload {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
    Double(f64),
    String(String),
    Int64(i64),
    UInt64(u64),
    Opaque(serde_json::Value),
}

impl Payload {
    /// A convenience method to extract the value out of a [Bool](#variant.Bool).
    /// Returns `false` for other payload kinds.
    pub fn as_bool(&self) -> bool {
        match *self {
            Payload::Bool(value) => value,
            _ => false,
        }
    }

    /// A convenience method to extract the value out of an [Int](#variant.Int).
    /// Returns `0` for other payload kinds.
    pub fn as_int(&self) -> i32 {
        match *self {
            Payload::Int(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [UInt](#variant.UInt).
    /// Returns `0` for other payload kinds.
    pub fn as_uint(&self) -> u32 {
        match *self {
            Payload::UInt(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of an [Int64](#variant.Int64).
    /// Returns `0` for other payload kinds.
    pub fn as_int64(&self) -> i64 {
        match *self {
            Payload::Int64(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [UInt64](#variant.UInt64).
    /// Returns `0` for other payload kinds.
    pub fn as_uint64(&self) -> u64 {
        match *self {
            Payload::UInt64(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [Float](#variant.Float).
    /// Returns `0.0` for other payload kinds.
    pub fn as_float(&self) -> f32 {
        match *self {
            Payload::Float(value) => value,
            _ => 0.0,
        }
    }

    /// A convenience method to extract the value out of a [Double](#variant.Double).
    /// Returns `0.0` for other payload kinds.
    pub fn as_double(&self) -> f64 {
        match *self {
            Payload::Double(value) => value,
            _ => 0.0,
        }
    }

    /// A convenience method to extract the value out of a [String](#variant.String).
    /// Returns `""` for other payload kinds.
    pub fn as_string(&self) -> &str {
        match *self {
            Payload::String(ref value) => value.as_str(),
            _ => "",
        }
    }

    /// A convenience method to borrow the raw JSON out of an
    /// [Opaque](#variant.Opaque). Returns `None` for typed payload kinds.
    pub fn as_opaque(&self) -> Option<&serde_json::Value> {
        match *self {
            Payload::Opaque(ref value) => Some(value),
            _ => None,
        }
    }

    /// Converts this payload back into its JSON wire representation.
    pub fn to_json(&self) -> serde_json::Value {
        match *self {
            Payload::Bool(value) => serde_json::Value::Bool(value),
            Payload::Int(value) => serde_json::Value::from(value),
            Payload::UInt(value) => serde_json::Value::from(value),
            Payload::Float(value) => serde_json::Value::from(value),
            Payload::Double(value) => serde_json::Value::from(value),
            Payload::String(ref value) => serde_json::Value::from(value.as_str()),
            Payload::Int64(value) => serde_json::Value::from(value),
            Payload::UInt64(value) => serde_json::Value::from(value),
            Payload::Opaque(ref value) => value.clone(),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            Payload::Bool(value) => value.fmt(f),
            Payload::Int(value) => value.fmt(f),
            Payload::UInt(value) => value.fmt(f),
            Payload::Float(value) => value.fmt(f),
            Payload::Double(value) => value.fmt(f),
            Payload::String(ref value) => value.fmt(f),
            Payload::Int64(value) => value.fmt(f),
            Payload::UInt64(value) => value.fmt(f),
            Payload::Opaque(ref value) => value.fmt(f),
        }
    }
}
