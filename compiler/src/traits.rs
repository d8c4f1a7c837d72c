use detag_schema::DecodeError;
use serde_json::Value;

/// All detag-derived types decode from a tagged JSON object and return
/// `Result<Self, DecodeError>`. We require `Sized` so that `Self` can be
/// constructed.
pub trait FromTagged: Sized {
    fn from_tagged(value: &Value) -> Result<Self, DecodeError>;

    /// Parses `text` as JSON, then decodes the resulting object.
    fn from_tagged_str(text: &str) -> Result<Self, DecodeError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DecodeError::Json(err.to_string()))?;
        Self::from_tagged(&value)
    }
}
