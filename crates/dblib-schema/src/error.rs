//! Schema introspection error types.

use thiserror::Error;

/// Errors that can occur while translating catalog rows into descriptors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A catalog row is missing a column the translation requires.
    #[error("catalog row is missing required column `{column}`")]
    MissingColumn {
        /// Name of the missing raw column.
        column: &'static str,
    },

    /// A catalog value could not be interpreted.
    #[error("invalid value in catalog column `{column}`: {detail}")]
    InvalidValue {
        /// Name of the raw column.
        column: &'static str,
        /// What was wrong with the value.
        detail: String,
    },
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
