use std::fmt;
use thiserror::Error;

/// Generation-time failure categories. Each one is fatal to its generation
/// request: no decode logic is emitted for the offending schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosticKind {
    #[error("a decoder can only be derived for a sum type")]
    NotASumType,

    #[error("the sum type must declare at least one variant")]
    EmptyVariantSet,

    #[error("the payload of variant {0:?} must be a single unnamed value")]
    InvalidPayloadShape(String),

    #[error("the variant name {0:?} is declared twice")]
    DuplicateVariantName(String),
}

/// This system produces no warnings; every diagnostic is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A located generation-time failure, attached to the offending declaration
/// or variant so the host tool can present it in place.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error at line {line}, column {column}: {kind}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub column: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, line: usize, column: usize) -> Diagnostic {
        Diagnostic { kind, line, column }
    }

    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    /// The human-readable message for this diagnostic's kind.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
