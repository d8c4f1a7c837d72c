use thiserror::Error;

/// Errors produced when a derived decode procedure runs against wire data.
///
/// These are decode-time failures, distinct from the generation-time
/// diagnostics the compiler reports: they occur only once a decoder exists
/// and is handed a real JSON object.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The discriminator field is absent, or present but not a string.
    #[error("missing discriminator field {0:?}")]
    MissingDiscriminator(String),

    /// The discriminator string matches none of the variant tags.
    #[error("unknown discriminator value {0:?}")]
    UnknownDiscriminator(String),

    /// The selected variant's payload field could not be decoded.
    #[error("failed to decode payload for variant {variant:?}")]
    PayloadDecodeFailed {
        variant: String,
        #[source]
        source: PayloadError,
    },

    /// Input text handed to a string entry point was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(String),
}

/// The underlying cause of a [`DecodeError::PayloadDecodeFailed`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadError {
    #[error("missing required field {0:?}")]
    MissingField(String),

    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Errors produced when re-encoding a variant through a decode plan's baked
/// name mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("unknown variant {0:?}")]
    UnknownVariant(String),

    #[error("variant {0:?} requires a payload")]
    MissingPayload(String),

    #[error("variant {0:?} does not take a payload")]
    UnexpectedPayload(String),
}
