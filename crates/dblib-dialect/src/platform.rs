//! The dblib platform dialect.
//!
//! [`DblibDialect`] bundles the SQL Server syntax rules the adapter needs:
//! pagination rewriting, current-timestamp/GUID expressions, lock hints,
//! and the capability flags the transport imposes (no savepoints). It is
//! an immutable value; variant behavior is selected through configuration,
//! not subtyping.

use crate::error::Result;
use crate::mapping::TypeMappings;
use crate::pagination::{self, PaginationStrategy};

/// Lock mode for the `appendLockHint`-style `FROM`-clause decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockMode {
    /// No locking hint.
    #[default]
    None,
    /// Shared lock held for the transaction (`HOLDLOCK, ROWLOCK`).
    PessimisticRead,
    /// Update lock (`UPDLOCK, ROWLOCK`).
    PessimisticWrite,
}

/// SQL Server dialect as spoken over a dblib transport.
#[derive(Debug, Clone, Default)]
pub struct DblibDialect {
    pagination: PaginationStrategy,
    mappings: TypeMappings,
}

impl DblibDialect {
    /// Create a dialect with the default (`RowNumber`) pagination strategy
    /// and the built-in type mapping table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the pagination strategy.
    #[must_use]
    pub fn with_pagination(mut self, strategy: PaginationStrategy) -> Self {
        self.pagination = strategy;
        self
    }

    /// Replace the type mapping table.
    #[must_use]
    pub fn with_mappings(mut self, mappings: TypeMappings) -> Self {
        self.mappings = mappings;
        self
    }

    /// Platform name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "mssql"
    }

    /// The configured pagination strategy.
    #[must_use]
    pub fn pagination(&self) -> PaginationStrategy {
        self.pagination
    }

    /// The configured type mapping table.
    #[must_use]
    pub fn mappings(&self) -> &TypeMappings {
        &self.mappings
    }

    /// Rewrite `sql` to return the `[offset+1, offset+limit]` row window.
    ///
    /// See [`pagination::rewrite`] for the full contract.
    pub fn modify_limit_query(&self, sql: &str, limit: i64, offset: i64) -> Result<String> {
        pagination::rewrite(self.pagination, sql, limit, offset)
    }

    /// Expression yielding the current timestamp. SQL Server has a single
    /// `GETDATE()` regardless of whether a date, time, or timestamp is
    /// wanted.
    #[must_use]
    pub fn now_expression(&self) -> &'static str {
        "GETDATE()"
    }

    /// Expression yielding a new globally unique identifier.
    #[must_use]
    pub fn guid_expression(&self) -> &'static str {
        "NEWID()"
    }

    /// Whether the platform supports savepoints. The dblib transport does
    /// not.
    #[must_use]
    pub fn supports_savepoints(&self) -> bool {
        false
    }

    /// `TRUNCATE TABLE` statement for `table`.
    #[must_use]
    pub fn truncate_table_sql(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {table}")
    }

    /// Decorate a `FROM` clause with the lock hint for `mode`.
    #[must_use]
    pub fn append_lock_hint(&self, from_clause: &str, mode: LockMode) -> String {
        match mode {
            LockMode::None => from_clause.to_owned(),
            LockMode::PessimisticRead => format!("{from_clause} WITH (HOLDLOCK, ROWLOCK)"),
            LockMode::PessimisticWrite => format!("{from_clause} WITH (UPDLOCK, ROWLOCK)"),
        }
    }
}
