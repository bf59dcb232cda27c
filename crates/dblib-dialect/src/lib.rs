//! # dblib-dialect
//!
//! SQL Server dialect support for dblib-based drivers.
//!
//! The core of this crate is the pagination rewrite engine: it takes an
//! arbitrary `SELECT` statement plus a limit/offset pair and rewrites it
//! into T-SQL that returns exactly the requested row window, preserving
//! the original `ORDER BY` semantics and respecting `DISTINCT`. Around it
//! sit the stateless pieces of the dialect: type-declaration formatting,
//! the database-to-logical type mapping table, catalog listing SQL, and
//! transaction isolation levels.
//!
//! Everything in this crate is pure and `Send + Sync`: no I/O, no shared
//! mutable state, bounded allocation-only work.
//!
//! ## Example
//!
//! ```rust
//! use dblib_dialect::DblibDialect;
//!
//! let dialect = DblibDialect::new();
//! let sql = dialect
//!     .modify_limit_query("SELECT id, name FROM users ORDER BY name", 10, 20)
//!     .expect("rewritable query");
//! assert!(sql.contains("ROW_NUMBER()"));
//! assert!(sql.contains("BETWEEN 21 AND 30"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod catalog;
pub mod declarations;
pub mod error;
pub mod isolation;
pub mod mapping;
pub mod pagination;
pub mod platform;
mod scan;

pub use declarations::ColumnSpec;
pub use error::{DialectError, Result};
pub use isolation::IsolationLevel;
pub use mapping::{LogicalType, TypeMappings, TypeMappingsBuilder};
pub use pagination::{OrderDirection, PaginationStrategy};
pub use platform::{DblibDialect, LockMode};
