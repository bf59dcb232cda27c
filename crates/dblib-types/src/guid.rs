//! `UNIQUEIDENTIFIER` codec.
//!
//! The dblib transport returns GUID columns as the hyphenated 36-char
//! text form. Validation goes through [`uuid::Uuid`] so that malformed
//! values are caught before they reach application code.

use uuid::Uuid;

use crate::error::{CodecError, Result};

/// Length of the hyphenated text form.
const GUID_TEXT_LENGTH: usize = 36;

/// Parse a stored `UNIQUEIDENTIFIER` value.
///
/// Only the hyphenated form is accepted; braced or compact forms never
/// appear on this transport.
pub fn guid_from_storage(text: &str) -> Result<Uuid> {
    if text.len() != GUID_TEXT_LENGTH {
        return Err(CodecError::InvalidGuid(text.to_owned()));
    }
    Uuid::try_parse(text).map_err(|_| CodecError::InvalidGuid(text.to_owned()))
}

/// Render a GUID in the form the server stores.
#[must_use]
pub fn guid_to_storage(guid: &Uuid) -> String {
    guid.hyphenated().to_string().to_ascii_uppercase()
}
