//! Raw catalog rows.
//!
//! The transport hands back catalog query results as name/value rows.
//! Catalog column names arrive with whatever case the server (or the
//! `sp_*` procedure) chose, so lookups are case-insensitive.

use std::collections::HashMap;

use crate::error::{Result, SchemaError};

/// One value in a raw catalog row.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValue {
    /// SQL `NULL`.
    Null,
    /// An integral value.
    Int(i64),
    /// A character value.
    Str(String),
}

impl CatalogValue {
    /// The value as a string, when it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer; numeric strings are accepted because the
    /// dblib transport returns most catalog numbers as text.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
            Self::Null => None,
        }
    }

    /// Whether this is SQL `NULL`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Interpret the value as a flag (`1`/`true`/non-zero).
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Int(n) => *n != 0,
            Self::Str(s) => {
                let s = s.trim();
                s == "1" || s.eq_ignore_ascii_case("true")
            }
            Self::Null => false,
        }
    }
}

impl From<i64> for CatalogValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for CatalogValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for CatalogValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<CatalogValue>> From<Option<T>> for CatalogValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A raw catalog result row: case-insensitive column name → value.
#[derive(Debug, Clone, Default)]
pub struct CatalogRow {
    values: HashMap<String, CatalogValue>,
}

impl CatalogRow {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for assembling rows by hand.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<CatalogValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value under `name` (case-folded).
    pub fn insert(&mut self, name: &str, value: impl Into<CatalogValue>) {
        self.values.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Look up a value by column name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogValue> {
        self.values.get(&name.to_ascii_lowercase())
    }

    /// Look up a value that the translation cannot proceed without.
    pub(crate) fn require(&self, column: &'static str) -> Result<&CatalogValue> {
        self.get(column)
            .ok_or(SchemaError::MissingColumn { column })
    }

    /// Required string column.
    pub(crate) fn require_str(&self, column: &'static str) -> Result<&str> {
        self.require(column)?
            .as_str()
            .ok_or_else(|| SchemaError::InvalidValue {
                column,
                detail: "expected a string".into(),
            })
    }

    /// Optional integer column; `NULL` and absent both yield `None`.
    pub(crate) fn int_opt(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(CatalogValue::as_i64)
    }

    /// Optional string column; `NULL` and absent both yield `None`.
    pub(crate) fn str_opt(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CatalogValue::as_str)
    }
}

impl<K: Into<String>, V: Into<CatalogValue>> FromIterator<(K, V)> for CatalogRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (name, value) in iter {
            row.insert(&name.into(), value);
        }
        row
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let row = CatalogRow::new().with("COLUMN_NAME", "id");
        assert_eq!(row.get("column_name").unwrap().as_str(), Some("id"));
        assert_eq!(row.get("Column_Name").unwrap().as_str(), Some("id"));
    }

    #[test]
    fn numeric_strings_read_as_integers() {
        let row = CatalogRow::new().with("numeric_scale", " 4 ");
        assert_eq!(row.int_opt("numeric_scale"), Some(4));
    }

    #[test]
    fn truthiness() {
        assert!(CatalogValue::Int(1).truthy());
        assert!(CatalogValue::from("true").truthy());
        assert!(CatalogValue::from("1").truthy());
        assert!(!CatalogValue::Int(0).truthy());
        assert!(!CatalogValue::from("0").truthy());
        assert!(!CatalogValue::Null.truthy());
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let row = CatalogRow::new();
        assert!(matches!(
            row.require("data_type"),
            Err(SchemaError::MissingColumn { column: "data_type" })
        ));
    }

    #[test]
    fn option_converts_to_null() {
        let row = CatalogRow::new().with("column_default", None::<&str>);
        assert!(row.get("column_default").unwrap().is_null());
        assert_eq!(row.str_opt("column_default"), None);
    }
}
