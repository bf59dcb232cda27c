//! Driver error types.

use thiserror::Error;

/// Errors surfaced by the driver facade and the transaction session.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The transport cannot perform the requested operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// `commit` or `rollback` was called outside a transaction.
    #[error("no active transaction")]
    NoActiveTransaction,

    /// A statement failed on the transport.
    #[error("statement execution failed: {0}")]
    Execute(String),

    /// A query rewrite failed before the statement reached the transport.
    #[error(transparent)]
    Dialect(#[from] dblib_dialect::DialectError),
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;
