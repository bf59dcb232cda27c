//! End-to-end catalog translation scenarios.

#![allow(clippy::unwrap_used)]

use dblib_dialect::LogicalType;
use dblib_schema::{
    columns_from_rows, foreign_keys_from_rows, indexes_from_rows, tables_from_rows, CatalogRow,
    SchemaError,
};

fn users_column_rows() -> Vec<CatalogRow> {
    vec![
        CatalogRow::new()
            .with("COLUMN_NAME", "id")
            .with("DATA_TYPE", "int")
            .with("IS_NULLABLE", "NO")
            .with("COLUMN_DEFAULT", None::<&str>),
        CatalogRow::new()
            .with("COLUMN_NAME", "email")
            .with("DATA_TYPE", "nvarchar")
            .with("CHARACTER_MAXIMUM_LENGTH", 254)
            .with("IS_NULLABLE", "NO")
            .with("COLUMN_DEFAULT", None::<&str>),
        CatalogRow::new()
            .with("COLUMN_NAME", "balance")
            .with("DATA_TYPE", "decimal")
            .with("NUMERIC_PRECISION", 12)
            .with("NUMERIC_SCALE", 2)
            .with("IS_NULLABLE", "YES")
            .with("COLUMN_DEFAULT", "((0))"),
        CatalogRow::new()
            .with("COLUMN_NAME", "is_verified")
            .with("DATA_TYPE", "char")
            .with("CHARACTER_MAXIMUM_LENGTH", 1)
            .with("IS_NULLABLE", "YES")
            .with("COLUMN_DEFAULT", "NULL"),
        CatalogRow::new()
            .with("COLUMN_NAME", "created_at")
            .with("DATA_TYPE", "datetime2")
            .with("IS_NULLABLE", "NO")
            .with("COLUMN_DEFAULT", None::<&str>),
    ]
}

#[test]
fn full_table_translation() {
    let columns = columns_from_rows(&users_column_rows()).unwrap();
    assert_eq!(columns.len(), 5);

    assert_eq!(columns[0].logical, LogicalType::Integer);
    assert!(columns[0].not_null);

    assert_eq!(columns[1].logical, LogicalType::String);
    assert_eq!(columns[1].length, Some(254));

    assert_eq!(columns[2].logical, LogicalType::Decimal);
    assert_eq!(columns[2].precision, Some(12));
    assert_eq!(columns[2].scale, Some(2));
    assert_eq!(columns[2].default.as_deref(), Some("((0))"));

    assert_eq!(columns[3].logical, LogicalType::Boolean);
    assert!(columns[3].fixed);
    assert_eq!(columns[3].default, None);

    assert_eq!(columns[4].logical, LogicalType::DateTime);
}

#[test]
fn descriptor_order_follows_row_order() {
    let columns = columns_from_rows(&users_column_rows()).unwrap();
    let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["id", "email", "balance", "is_verified", "created_at"]
    );
}

#[test]
fn composite_index_columns_are_ordered_by_position() {
    // rows arrive in whatever order the join produced
    let rows = [
        CatalogRow::new()
            .with("key_name", "IX_orders_user_date")
            .with("column_name", "placed_at")
            .with("index_column_id", "2")
            .with("is_primary_key", "0")
            .with("is_unique", "0"),
        CatalogRow::new()
            .with("key_name", "IX_orders_user_date")
            .with("column_name", "user_id")
            .with("index_column_id", "1")
            .with("is_primary_key", "0")
            .with("is_unique", "0"),
    ];
    let indexes = indexes_from_rows(&rows).unwrap();
    assert_eq!(indexes.len(), 1);
    assert_eq!(indexes[0].columns, vec!["user_id", "placed_at"]);
}

#[test]
fn flag_columns_accept_text_booleans() {
    let rows = [CatalogRow::new()
        .with("key_name", "PK_users")
        .with("column_name", "id")
        .with("index_column_id", "1")
        .with("is_primary_key", "true")
        .with("is_unique", "1")];
    let indexes = indexes_from_rows(&rows).unwrap();
    assert!(indexes[0].primary);
    assert!(indexes[0].unique);
}

#[test]
fn missing_required_column_reports_which_one() {
    let rows = [CatalogRow::new().with("data_type", "int")];
    let err = columns_from_rows(&rows).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::MissingColumn {
            column: "column_name"
        }
    ));
}

#[test]
fn empty_catalog_results_translate_to_empty_lists() {
    assert!(tables_from_rows(&[]).unwrap().is_empty());
    assert!(columns_from_rows(&[]).unwrap().is_empty());
    assert!(indexes_from_rows(&[]).unwrap().is_empty());
    assert!(foreign_keys_from_rows(&[]).unwrap().is_empty());
}
