//! `DATETIME2(6)` codec.

use chrono::NaiveDateTime;

use crate::error::{CodecError, Result};

/// Storage format matching a `DATETIME2(6)` column.
const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format used when the server omits the fractional part.
const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a datetime in the form the server stores, microseconds included.
#[must_use]
pub fn datetime_to_storage(value: &NaiveDateTime) -> String {
    value.format(STORAGE_FORMAT).to_string()
}

/// Parse a stored datetime.
///
/// Older transports drop the fractional seconds on whole-second values,
/// so both forms are accepted.
pub fn datetime_from_storage(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    NaiveDateTime::parse_from_str(trimmed, STORAGE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, WHOLE_SECONDS_FORMAT))
        .map_err(|_| CodecError::InvalidDateTime(text.to_owned()))
}
