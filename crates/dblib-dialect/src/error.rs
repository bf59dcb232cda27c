//! Dialect error types.

use thiserror::Error;

/// Errors that can occur while rewriting or rendering SQL.
#[derive(Debug, Error)]
pub enum DialectError {
    /// Pagination was requested with a negative offset, or a limit/offset
    /// pair whose row window is not representable.
    #[error("invalid limit/offset: limit={limit}, offset={offset}")]
    InvalidArgument {
        /// Requested row count.
        limit: i64,
        /// Requested number of leading rows to skip.
        offset: i64,
    },

    /// The input statement could not be located/split safely, so no rewrite
    /// was attempted.
    ///
    /// The rewriter never emits a plausible-looking but semantically wrong
    /// query; anything it cannot parse is rejected with this error.
    #[error("malformed query: {0}")]
    MalformedQuery(String),

    /// An `ORDER BY` expression could not be matched to any select-list
    /// item or alias.
    #[error("ordering expression `{0}` does not resolve to a select-list alias")]
    UnresolvedOrderingAlias(String),
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
