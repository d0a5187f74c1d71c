use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("invalid timestamp {value}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("record is missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has the wrong type: expected {expected}")]
    WrongFieldType {
        field: String,
        expected: &'static str,
    },

    #[error("class not registered: {0}")]
    UnknownClass(String),
}
