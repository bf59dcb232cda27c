//! Structured schema descriptors.

use dblib_dialect::LogicalType;

/// A user table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    /// Table name.
    pub name: String,
}

/// A sequence-emulation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDescriptor {
    /// Sequence (table) name.
    pub name: String,
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Logical type the raw database type classified to.
    pub logical: LogicalType,
    /// Character length, for string columns.
    pub length: Option<u32>,
    /// Total digits, for numeric columns.
    pub precision: Option<u32>,
    /// Fractional digits, for numeric columns.
    pub scale: Option<u32>,
    /// Whether the column rejects `NULL`.
    pub not_null: bool,
    /// Fixed-width character column.
    pub fixed: bool,
    /// Declared default, when one exists and is not the `NULL` literal.
    pub default: Option<String>,
}

/// An index on a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    /// Index (key) name.
    pub name: String,
    /// Covered columns, in index-column order.
    pub columns: Vec<String>,
    /// Whether this is the primary key.
    pub primary: bool,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
}

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyDescriptor {
    /// Constraint name.
    pub name: String,
    /// Referencing columns, in constraint order.
    pub local_columns: Vec<String>,
    /// Referenced table.
    pub foreign_table: String,
    /// Referenced columns, paired with `local_columns`.
    pub foreign_columns: Vec<String>,
    /// Delete rule; `NO ACTION` is normalized away.
    pub on_delete: Option<String>,
}
