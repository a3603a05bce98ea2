//! Error types for decoding and for the inspector CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a raw payload into a [`CompletionResponse`](crate::structs::completion::completion_response::CompletionResponse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not a well-formed JSON object.
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },

    /// A required field is absent or has the wrong JSON type.
    /// `index` is the position in `choices` when the field belongs to a choice.
    #[error("missing or invalid field `{field}`{}", .index.map(|i| format!(" in choice {}", i)).unwrap_or_default())]
    MissingOrInvalidField { field: String, index: Option<usize> },
}

impl DecodeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload { reason: reason.into() }
    }

    pub fn field(field: &str) -> Self {
        Self::MissingOrInvalidField {
            field: field.to_string(),
            index: None,
        }
    }

    pub fn choice_field(field: &str, index: usize) -> Self {
        Self::MissingOrInvalidField {
            field: field.to_string(),
            index: Some(index),
        }
    }

    /// Name of the offending field, if this is a field error.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Self::MissingOrInvalidField { field, .. } => Some(field),
            Self::MalformedPayload { .. } => None,
        }
    }

    /// Position of the offending choice, if the error belongs to one.
    pub fn choice_index(&self) -> Option<usize> {
        match self {
            Self::MissingOrInvalidField { index, .. } => *index,
            Self::MalformedPayload { .. } => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload { .. })
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedPayload {
            reason: error.to_string(),
        }
    }
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors raised by the inspector around the decoder: config, files, output.
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("configuration file error at '{}': {reason}", .path.display())]
    ConfigurationFileError { path: PathBuf, reason: String },

    #[error("configuration error: {0}")]
    ConfigurationError(String),

    #[error("failed to read payload from {source_name}: {reason}")]
    PayloadReadError { source_name: String, reason: String },

    #[error("{source_name}: {error}")]
    DecodeFailed {
        source_name: String,
        #[source]
        error: DecodeError,
    },

    #[error("{source_name}: usage totals do not add up (expected {expected}, reported {reported})")]
    UsageMismatch {
        source_name: String,
        expected: u64,
        reported: u64,
    },

    #[error("{failed} of {total} payloads failed checks")]
    CheckFailed { failed: usize, total: usize },

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectorError {
    pub fn decode_failed(source_name: &str, error: DecodeError) -> Self {
        Self::DecodeFailed {
            source_name: source_name.to_string(),
            error,
        }
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(error: serde_json::Error) -> Self {
        Self::SerializationError(error.to_string())
    }
}

/// Result type alias for inspector operations
pub type InspectorResult<T> = Result<T, InspectorError>;
