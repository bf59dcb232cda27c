//! Geographic point codec.
//!
//! SQL Server stores geographic points as `GEOGRAPHY` values; over the
//! dblib wire they travel as well-known text (`POINT(lon lat)`). The
//! conversion expressions wrap a column or placeholder so the server does
//! the binary conversion on its side.

use crate::error::{CodecError, Result};

/// A geographic point (WGS 84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Point {
    /// Create a point from latitude and longitude.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Render the well-known-text form, longitude first.
    #[must_use]
    pub fn to_storage(&self) -> String {
        format!("POINT({} {})", self.longitude, self.latitude)
    }

    /// Parse a well-known-text point as produced by `STAsText()`.
    pub fn from_storage(text: &str) -> Result<Self> {
        let invalid = || CodecError::InvalidPoint(text.to_owned());
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("POINT")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let mut parts = body.split_whitespace();
        let longitude: f64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let latitude: f64 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// SQL fragment converting a `GEOGRAPHY` expression to its text form.
    #[must_use]
    pub fn read_expression(expr: &str) -> String {
        format!("{expr}.STAsText()")
    }

    /// SQL fragment converting a text expression to a `GEOGRAPHY` value.
    #[must_use]
    pub fn write_expression(expr: &str) -> String {
        format!("geography::STPointFromText({expr}, 4326)")
    }
}
