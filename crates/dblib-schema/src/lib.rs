//! Schema introspection for the dblib SQL Server adapter.
//!
//! Translates raw catalog query rows (as produced by the queries in
//! `dblib-dialect`) into structured descriptors for tables, columns,
//! indexes, foreign keys, and sequence-emulation tables. The translation
//! is pure: callers run the catalog SQL over their own transport and feed
//! the resulting rows in.
//!
//! # Example
//!
//! ```
//! use dblib_schema::{columns_from_rows, CatalogRow};
//! use dblib_dialect::LogicalType;
//!
//! let rows = [CatalogRow::new()
//!     .with("COLUMN_NAME", "is_active")
//!     .with("DATA_TYPE", "char")
//!     .with("CHARACTER_MAXIMUM_LENGTH", 1)
//!     .with("IS_NULLABLE", "NO")];
//! let columns = columns_from_rows(&rows)?;
//! assert_eq!(columns[0].logical, LogicalType::Boolean);
//! assert!(columns[0].not_null);
//! # Ok::<(), dblib_schema::SchemaError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod descriptor;
mod error;
mod introspect;
mod row;

pub use descriptor::{
    ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, SequenceDescriptor, TableDescriptor,
};
pub use error::{Result, SchemaError};
pub use introspect::{
    columns_from_rows, foreign_keys_from_rows, indexes_from_rows, sequences_from_rows,
    tables_from_rows,
};
pub use row::{CatalogRow, CatalogValue};
