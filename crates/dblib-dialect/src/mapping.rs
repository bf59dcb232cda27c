//! Database-type to logical-type mapping.
//!
//! The mapping table is an immutable configuration value built once and
//! shared freely; dialect variants that need extra entries extend it
//! through [`TypeMappingsBuilder`], which produces a new configuration
//! instead of mutating shared state.

use std::collections::HashMap;

/// Logical column type the adapter maps raw SQL Server type names onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    /// 64-bit integer.
    BigInt,
    /// 32-bit integer.
    Integer,
    /// 16-bit integer.
    SmallInt,
    /// Exact numeric with precision and scale.
    Decimal,
    /// Approximate numeric.
    Float,
    /// Single-bit flag.
    Boolean,
    /// Bounded character data.
    String,
    /// Unbounded character data.
    Text,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time.
    DateTime,
    /// Date and time with timezone offset.
    DateTimeTz,
    /// Binary large object.
    Blob,
    /// GUID / `uniqueidentifier`.
    UniqueIdentifier,
}

impl LogicalType {
    /// Stable lowercase name of this logical type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigInt => "bigint",
            Self::Integer => "integer",
            Self::SmallInt => "smallint",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::DateTimeTz => "datetimetz",
            Self::Blob => "blob",
            Self::UniqueIdentifier => "uniqueidentifier",
        }
    }
}

/// Built-in mapping table for the dblib dialect.
///
/// `smallmoney`/`money` map to integers and the binary family to text:
/// that is what the dblib transport actually hands back for those types.
const BUILTIN: &[(&str, LogicalType)] = &[
    ("bigint", LogicalType::BigInt),
    ("numeric", LogicalType::Decimal),
    ("bit", LogicalType::Boolean),
    ("smallint", LogicalType::SmallInt),
    ("decimal", LogicalType::Decimal),
    ("smallmoney", LogicalType::Integer),
    ("int", LogicalType::Integer),
    ("tinyint", LogicalType::SmallInt),
    ("money", LogicalType::Integer),
    ("float", LogicalType::Float),
    ("real", LogicalType::Float),
    ("double", LogicalType::Float),
    ("double precision", LogicalType::Float),
    ("date", LogicalType::Date),
    ("datetimeoffset", LogicalType::DateTimeTz),
    ("datetime2", LogicalType::DateTime),
    ("datetime", LogicalType::DateTime),
    ("smalldatetime", LogicalType::DateTime),
    ("time", LogicalType::Time),
    ("char", LogicalType::String),
    ("varchar", LogicalType::String),
    ("text", LogicalType::Text),
    ("nchar", LogicalType::String),
    ("nvarchar", LogicalType::String),
    ("ntext", LogicalType::Text),
    ("binary", LogicalType::Text),
    ("varbinary", LogicalType::Text),
    ("image", LogicalType::Text),
    ("uniqueidentifier", LogicalType::UniqueIdentifier),
];

/// Immutable, case-insensitive mapping from SQL Server type names to
/// logical types.
#[derive(Debug, Clone)]
pub struct TypeMappings {
    map: HashMap<String, LogicalType>,
}

impl Default for TypeMappings {
    fn default() -> Self {
        Self {
            map: BUILTIN
                .iter()
                .map(|(name, logical)| ((*name).to_owned(), *logical))
                .collect(),
        }
    }
}

impl TypeMappings {
    /// The built-in dblib mapping table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the logical type for a raw database type name.
    #[must_use]
    pub fn lookup(&self, db_type: &str) -> Option<LogicalType> {
        self.map.get(&db_type.to_ascii_lowercase()).copied()
    }

    /// Number of known database type names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table is empty (never true for the built-in table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Start building an extended copy of this mapping table.
    #[must_use]
    pub fn extended(&self) -> TypeMappingsBuilder {
        TypeMappingsBuilder {
            map: self.map.clone(),
        }
    }
}

/// Builder for an extended [`TypeMappings`] table.
#[derive(Debug)]
pub struct TypeMappingsBuilder {
    map: HashMap<String, LogicalType>,
}

impl TypeMappingsBuilder {
    /// Map (or remap) a database type name.
    #[must_use]
    pub fn map(mut self, db_type: &str, logical: LogicalType) -> Self {
        self.map.insert(db_type.to_ascii_lowercase(), logical);
        self
    }

    /// Finish building the new mapping table.
    #[must_use]
    pub fn build(self) -> TypeMappings {
        TypeMappings { map: self.map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookups() {
        let mappings = TypeMappings::new();
        assert_eq!(mappings.lookup("int"), Some(LogicalType::Integer));
        assert_eq!(mappings.lookup("tinyint"), Some(LogicalType::SmallInt));
        assert_eq!(mappings.lookup("double precision"), Some(LogicalType::Float));
        assert_eq!(
            mappings.lookup("uniqueidentifier"),
            Some(LogicalType::UniqueIdentifier)
        );
        assert_eq!(mappings.lookup("image"), Some(LogicalType::Text));
        assert_eq!(mappings.lookup("geography"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mappings = TypeMappings::new();
        assert_eq!(mappings.lookup("NVARCHAR"), Some(LogicalType::String));
        assert_eq!(mappings.lookup("DateTime2"), Some(LogicalType::DateTime));
    }

    #[test]
    fn extension_does_not_touch_the_source_table() {
        let base = TypeMappings::new();
        let extended = base.extended().map("geography", LogicalType::Text).build();
        assert_eq!(extended.lookup("geography"), Some(LogicalType::Text));
        assert_eq!(base.lookup("geography"), None);
        assert_eq!(extended.len(), base.len() + 1);
    }

    #[test]
    fn extension_can_remap_existing_entries() {
        let remapped = TypeMappings::new()
            .extended()
            .map("money", LogicalType::Decimal)
            .build();
        assert_eq!(remapped.lookup("money"), Some(LogicalType::Decimal));
    }

    #[test]
    fn logical_type_names() {
        assert_eq!(LogicalType::UniqueIdentifier.name(), "uniqueidentifier");
        assert_eq!(LogicalType::DateTimeTz.name(), "datetimetz");
    }
}
