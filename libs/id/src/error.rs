//! Error types for Base32 decoding and ID parsing.

use thiserror::Error;

/// Errors produced by the Base32 codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base32Error {
    /// The input contains a symbol outside the alphabet.
    #[error("illegal character: {0:?}")]
    IllegalCharacter(char),

    /// The input is too long to encode.
    #[error("input too long to encode: {len} bytes (limit {max})")]
    InputTooLong { len: usize, max: usize },
}

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty or only whitespace.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ID contains more than one underscore separator.
    #[error("ID must contain exactly one underscore separator, found {found}")]
    TooManySeparators { found: usize },

    /// The ID has an invalid prefix.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The payload segment is not valid Base32.
    #[error("invalid ID payload: {0}")]
    InvalidEncoding(#[from] Base32Error),

    /// The payload segment decodes to the wrong number of bytes.
    #[error("invalid ID payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength { expected: usize, actual: usize },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, IdError::InvalidPrefix { .. })
    }
}
