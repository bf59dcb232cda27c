//! Catalog listing SQL.
//!
//! Fixed statements against `sysobjects` and the `sys.indexes` family,
//! issued by the schema introspector. Table names land in string-literal
//! position and are escaped; this is catalog plumbing, not a general
//! quoting layer.

use crate::platform::DblibDialect;

/// Escape a value for string-literal position.
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

impl DblibDialect {
    /// List user tables, excluding the `dtproperties` bookkeeping table.
    #[must_use]
    pub fn list_tables_sql(&self) -> &'static str {
        "SELECT name FROM sysobjects WHERE type = 'U' AND name <> 'dtproperties' ORDER BY name"
    }

    /// List views.
    #[must_use]
    pub fn list_views_sql(&self) -> &'static str {
        "SELECT name FROM sysobjects WHERE xtype = 'V'"
    }

    /// List all triggers.
    #[must_use]
    pub fn list_triggers_sql(&self) -> &'static str {
        "SELECT name FROM sysobjects WHERE xtype = 'TR'"
    }

    /// List triggers attached to `table`.
    #[must_use]
    pub fn list_table_triggers_sql(&self, table: &str) -> String {
        format!(
            "SELECT name FROM sysobjects WHERE xtype = 'TR' AND object_name(parent_obj) = '{}'",
            escape_literal(table)
        )
    }

    /// List index metadata for `table` from the `sys.indexes` family.
    #[must_use]
    pub fn list_table_indexes_sql(&self, table: &str) -> String {
        format!(
            "SELECT \
             IND.NAME [KEY_NAME], IND.INDEX_ID, IC.INDEX_COLUMN_ID, COL.NAME [COLUMN_NAME], \
             IND.IS_PRIMARY_KEY, IND.IS_UNIQUE \
             FROM SYS.INDEXES IND \
             INNER JOIN SYS.INDEX_COLUMNS IC ON \
             IND.OBJECT_ID = IC.OBJECT_ID AND IND.INDEX_ID = IC.INDEX_ID \
             INNER JOIN SYS.COLUMNS COL ON \
             IC.OBJECT_ID = COL.OBJECT_ID AND IC.COLUMN_ID = COL.COLUMN_ID \
             INNER JOIN SYS.TABLES T ON \
             IND.OBJECT_ID = T.OBJECT_ID \
             WHERE T.NAME = '{}'",
            escape_literal(&table.to_uppercase())
        )
    }

    /// List sequence-emulation tables.
    ///
    /// SQL Server 2000-era engines have no sequences; the adapter emulates
    /// them with single-column `IDENTITY` tables, so listing sequences is
    /// listing user tables.
    #[must_use]
    pub fn list_sequences_sql(&self) -> &'static str {
        "SELECT name FROM sysobjects WHERE xtype = 'U'"
    }

    /// Statements creating a sequence-emulation table starting at `start`.
    ///
    /// The first statement creates the `IDENTITY(start, 1)` table; when
    /// `start > 1` a seed row is inserted under `IDENTITY_INSERT` so the
    /// next generated value is `start + 1`.
    #[must_use]
    pub fn create_sequence_sql(&self, name: &str, start: i64) -> Vec<String> {
        let mut statements = vec![format!(
            "CREATE TABLE {name} (seq_col INT PRIMARY KEY CLUSTERED IDENTITY({start}, 1) NOT NULL)"
        )];
        if start > 1 {
            statements.push(format!(
                "SET IDENTITY_INSERT {name} ON INSERT INTO {name} (seq_col) VALUES ({start})"
            ));
        }
        statements
    }
}
