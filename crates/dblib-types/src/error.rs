//! Codec error types.

use thiserror::Error;

/// Errors from converting between Rust values and their storage text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The text is not a well-known-text point.
    #[error("not a POINT value: `{0}`")]
    InvalidPoint(String),

    /// The text is not a hyphenated GUID.
    #[error("not a uniqueidentifier value: `{0}`")]
    InvalidGuid(String),

    /// The text does not parse as a stored datetime.
    #[error("not a datetime value: `{0}`")]
    InvalidDateTime(String),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
