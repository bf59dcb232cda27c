//! Catalog row translation.
//!
//! Pure data-shape translation: each function takes the raw rows of one
//! catalog query and produces structured descriptors. Nothing here talks
//! to the database.

use dblib_dialect::LogicalType;

use crate::descriptor::{
    ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, SequenceDescriptor, TableDescriptor,
};
use crate::error::Result;
use crate::row::{CatalogRow, CatalogValue};

/// Translate `sysobjects` table-listing rows.
pub fn tables_from_rows(rows: &[CatalogRow]) -> Result<Vec<TableDescriptor>> {
    let tables = rows
        .iter()
        .map(|row| {
            Ok(TableDescriptor {
                name: row.require_str("name")?.to_owned(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = tables.len(), "translated table rows");
    Ok(tables)
}

/// Translate sequence-emulation table rows.
pub fn sequences_from_rows(rows: &[CatalogRow]) -> Result<Vec<SequenceDescriptor>> {
    rows.iter()
        .map(|row| {
            Ok(SequenceDescriptor {
                name: row.require_str("name")?.to_owned(),
            })
        })
        .collect()
}

/// Translate column-listing rows into column descriptors.
///
/// Classification of the raw `data_type` follows a fixed table with two
/// special cases: numeric types with a non-zero scale become decimals,
/// and a single-character fixed string whose name starts with `is` or
/// `has` is treated as a boolean flag.
pub fn columns_from_rows(rows: &[CatalogRow]) -> Result<Vec<ColumnDescriptor>> {
    let columns = rows
        .iter()
        .map(column_from_row)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = columns.len(), "translated column rows");
    Ok(columns)
}

fn column_from_row(row: &CatalogRow) -> Result<ColumnDescriptor> {
    let name = row.require_str("column_name")?.to_owned();
    let db_type = row.require_str("data_type")?.to_ascii_lowercase();
    let raw_length = row
        .int_opt("character_maximum_length")
        .and_then(|n| u32::try_from(n).ok());
    let raw_precision = row
        .int_opt("numeric_precision")
        .and_then(|n| u32::try_from(n).ok());
    let raw_scale = row
        .int_opt("numeric_scale")
        .and_then(|n| u32::try_from(n).ok());
    let not_null = row
        .str_opt("is_nullable")
        .is_some_and(|v| v.eq_ignore_ascii_case("NO"));
    // the transport reports a missing default as the literal string NULL
    let default = row
        .str_opt("column_default")
        .filter(|v| !v.eq_ignore_ascii_case("null"))
        .map(str::to_owned);

    let mut length = raw_length;
    let mut precision = None;
    let mut scale = None;
    let mut fixed = false;

    let logical = match db_type.as_str() {
        "int" | "integer" | "bigint" | "tinyint" | "smallint" | "numeric" | "decimal" => {
            length = None;
            if raw_scale.unwrap_or(0) > 0 {
                precision = raw_precision;
                scale = raw_scale;
                LogicalType::Decimal
            } else {
                LogicalType::Integer
            }
        }
        "bit" => {
            length = None;
            LogicalType::Boolean
        }
        "char" | "nchar" => {
            fixed = true;
            if raw_length == Some(1) && (name.starts_with("is") || name.starts_with("has")) {
                LogicalType::Boolean
            } else {
                LogicalType::String
            }
        }
        "varchar" | "nvarchar" => LogicalType::String,
        "text" | "ntext" | "clob" | "nclob" => {
            length = None;
            LogicalType::Text
        }
        "datetime" | "datetime2" | "smalldatetime" | "timestamp" => {
            length = None;
            LogicalType::DateTime
        }
        // dblib reports floats with precision/scale; they round-trip as decimals
        "float" | "real" => {
            length = None;
            precision = raw_precision;
            scale = raw_scale;
            LogicalType::Decimal
        }
        "binary" | "varbinary" | "image" => {
            length = None;
            LogicalType::Blob
        }
        "uniqueidentifier" => {
            length = None;
            LogicalType::UniqueIdentifier
        }
        _ => {
            length = None;
            LogicalType::String
        }
    };

    Ok(ColumnDescriptor {
        name,
        logical,
        length,
        precision,
        scale,
        not_null,
        fixed,
        default,
    })
}

/// Translate `sys.indexes` join rows, aggregating columns per key name.
pub fn indexes_from_rows(rows: &[CatalogRow]) -> Result<Vec<IndexDescriptor>> {
    struct Pending {
        name: String,
        primary: bool,
        unique: bool,
        columns: Vec<(i64, String)>,
    }

    let mut pending: Vec<Pending> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let name = row.require_str("key_name")?.to_owned();
        let column = row.require_str("column_name")?.to_owned();
        let ordinal = row.int_opt("index_column_id").unwrap_or(i as i64);
        match pending.iter_mut().find(|p| p.name == name) {
            Some(p) => p.columns.push((ordinal, column)),
            None => pending.push(Pending {
                name,
                primary: row.get("is_primary_key").is_some_and(CatalogValue::truthy),
                unique: row.get("is_unique").is_some_and(CatalogValue::truthy),
                columns: vec![(ordinal, column)],
            }),
        }
    }

    Ok(pending
        .into_iter()
        .map(|mut p| {
            p.columns.sort_by_key(|(ordinal, _)| *ordinal);
            IndexDescriptor {
                name: p.name,
                columns: p.columns.into_iter().map(|(_, c)| c).collect(),
                primary: p.primary,
                unique: p.unique,
            }
        })
        .collect())
}

/// Translate foreign-key listing rows, grouping by constraint name.
pub fn foreign_keys_from_rows(rows: &[CatalogRow]) -> Result<Vec<ForeignKeyDescriptor>> {
    struct Pending {
        name: String,
        foreign_table: String,
        on_delete: Option<String>,
        pairs: Vec<(i64, String, String)>,
    }

    let mut pending: Vec<Pending> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let name = row.require_str("pkconstraint_name")?.to_owned();
        let local = row.require_str("pkcolumn_name")?.to_owned();
        let foreign = row.require_str("fkcolumn_name")?.to_owned();
        let ordinal = row.int_opt("deferrability").unwrap_or(i as i64);
        match pending.iter_mut().find(|p| p.name == name) {
            Some(p) => p.pairs.push((ordinal, local, foreign)),
            None => pending.push(Pending {
                name,
                foreign_table: row.require_str("fktable_name")?.to_owned(),
                on_delete: row
                    .str_opt("delete_rule")
                    .filter(|rule| !rule.eq_ignore_ascii_case("NO ACTION"))
                    .map(str::to_owned),
                pairs: vec![(ordinal, local, foreign)],
            }),
        }
    }

    Ok(pending
        .into_iter()
        .map(|mut p| {
            p.pairs.sort_by_key(|(ordinal, _, _)| *ordinal);
            let (local_columns, foreign_columns) = p
                .pairs
                .into_iter()
                .map(|(_, local, foreign)| (local, foreign))
                .unzip();
            ForeignKeyDescriptor {
                name: p.name,
                local_columns,
                foreign_table: p.foreign_table,
                foreign_columns,
                on_delete: p.on_delete,
            }
        })
        .collect())
}
