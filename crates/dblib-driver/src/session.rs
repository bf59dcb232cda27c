//! Transaction session management.
//!
//! The dblib transport silently resets connection options whenever a
//! transaction boundary is crossed, so every `begin`, `commit`, and
//! `rollback` replays the session settings before issuing the boundary
//! statement. The transport also has no savepoint support; nesting
//! attempts fail loudly instead of corrupting transaction state.

use async_trait::async_trait;

use crate::error::{DriverError, Result};

/// Connection options replayed before every transaction boundary, in the
/// order the server expects them.
pub const SESSION_SETTINGS: [&str; 5] = [
    "SET ANSI_WARNINGS ON",
    "SET ANSI_PADDING ON",
    "SET ANSI_NULLS ON",
    "SET QUOTED_IDENTIFIER ON",
    "SET CONCAT_NULL_YIELDS_NULL ON",
];

/// The statement execution seam the session drives.
///
/// Implementations wrap a live dblib connection; tests substitute a
/// recording mock.
#[async_trait]
pub trait StatementExecutor: Send {
    /// Execute a statement, discarding any result set.
    async fn execute(&mut self, sql: &str) -> Result<()>;

    /// Execute a query expected to return a single scalar value.
    async fn query_scalar(&mut self, sql: &str) -> Result<Option<i64>>;
}

/// A logical connection session with transaction tracking.
#[derive(Debug)]
pub struct Session<E> {
    executor: E,
    in_transaction: bool,
}

impl<E: StatementExecutor> Session<E> {
    /// Wrap an executor in a fresh session with no open transaction.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            in_transaction: false,
        }
    }

    /// Whether a transaction is currently open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.in_transaction
    }

    /// Access the underlying executor, e.g. to run ordinary statements.
    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    /// Unwrap the session, discarding transaction state.
    pub fn into_inner(self) -> E {
        self.executor
    }

    /// Open a transaction.
    pub async fn begin(&mut self) -> Result<()> {
        if self.in_transaction {
            return Err(DriverError::UnsupportedOperation(
                "nested transactions are not available on this transport",
            ));
        }
        self.replay_settings().await?;
        self.executor.execute("BEGIN TRANSACTION").await?;
        self.in_transaction = true;
        tracing::debug!("transaction started");
        Ok(())
    }

    /// Commit the open transaction.
    pub async fn commit(&mut self) -> Result<()> {
        if !self.in_transaction {
            return Err(DriverError::NoActiveTransaction);
        }
        self.replay_settings().await?;
        self.executor.execute("COMMIT TRANSACTION").await?;
        self.in_transaction = false;
        tracing::debug!("transaction committed");
        Ok(())
    }

    /// Roll back the open transaction.
    pub async fn rollback(&mut self) -> Result<()> {
        if !self.in_transaction {
            return Err(DriverError::NoActiveTransaction);
        }
        self.replay_settings().await?;
        self.executor.execute("ROLLBACK TRANSACTION").await?;
        self.in_transaction = false;
        tracing::debug!("transaction rolled back");
        Ok(())
    }

    /// Savepoints are not available on this transport.
    pub fn savepoint(&mut self, name: &str) -> Result<()> {
        tracing::warn!(savepoint = name, "savepoint requested on dblib transport");
        Err(DriverError::UnsupportedOperation(
            "savepoints are not available on this transport",
        ))
    }

    /// Identity value generated by the last insert on this session.
    pub async fn last_insert_id(&mut self) -> Result<Option<i64>> {
        self.executor.query_scalar("SELECT SCOPE_IDENTITY()").await
    }

    async fn replay_settings(&mut self) -> Result<()> {
        for setting in SESSION_SETTINGS {
            self.executor.execute(setting).await?;
        }
        Ok(())
    }
}
