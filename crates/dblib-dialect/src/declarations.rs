//! Column type declaration formatting.
//!
//! Stateless mapping from an abstract column specification to the literal
//! T-SQL type-declaration fragment. These functions do no I/O and hold no
//! state; they are safe to call from any thread.

/// Length above which a variable string column falls back to `TEXT`.
///
/// Legacy cap carried by the dblib adapter lineage; lengths above it are
/// not representable as `VARCHAR(n)` here.
pub const VARCHAR_MAX_LENGTH: u32 = 255;

/// Abstract column specification consumed by the declaration formatters.
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    /// Character length for string columns.
    pub length: Option<u32>,
    /// Total digits for numeric columns.
    pub precision: Option<u32>,
    /// Fractional digits for numeric columns.
    pub scale: Option<u32>,
    /// Fixed-width string (`CHAR`) instead of variable (`VARCHAR`).
    pub fixed: bool,
    /// Identity column.
    pub autoincrement: bool,
    /// Declared default value, if any.
    pub default: Option<String>,
}

impl ColumnSpec {
    /// Create an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character length.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Set precision and scale.
    #[must_use]
    pub fn precision_scale(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Mark the column fixed-width.
    #[must_use]
    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Mark the column as an identity column.
    #[must_use]
    pub fn autoincrement(mut self, autoincrement: bool) -> Self {
        self.autoincrement = autoincrement;
        self
    }

    /// Set the declared default value.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Identity suffix shared by the integer declarations.
fn identity_suffix(spec: &ColumnSpec) -> &'static str {
    if spec.autoincrement { " IDENTITY(1,1)" } else { "" }
}

/// `INT` declaration.
#[must_use]
pub fn integer_declaration(spec: &ColumnSpec) -> String {
    format!("INT{}", identity_suffix(spec))
}

/// `BIGINT` declaration.
#[must_use]
pub fn bigint_declaration(spec: &ColumnSpec) -> String {
    format!("BIGINT{}", identity_suffix(spec))
}

/// `SMALLINT` declaration.
#[must_use]
pub fn smallint_declaration(spec: &ColumnSpec) -> String {
    format!("SMALLINT{}", identity_suffix(spec))
}

/// String declaration: `CHAR(n)` / `VARCHAR(n)`, falling back to
/// `CHAR(255)` for fixed columns without a length and `TEXT` for variable
/// columns whose length is missing or above [`VARCHAR_MAX_LENGTH`].
///
/// A column with a declared default but no length gets the maximum
/// `VARCHAR` length rather than `TEXT`, since `TEXT` columns cannot carry
/// a default.
#[must_use]
pub fn varchar_declaration(spec: &ColumnSpec) -> String {
    let length = spec
        .length
        .or_else(|| spec.default.is_some().then_some(VARCHAR_MAX_LENGTH))
        .filter(|l| *l <= VARCHAR_MAX_LENGTH);
    if spec.fixed {
        match length {
            Some(l) => format!("CHAR({l})"),
            None => "CHAR(255)".to_owned(),
        }
    } else {
        match length {
            Some(l) => format!("VARCHAR({l})"),
            None => "TEXT".to_owned(),
        }
    }
}

/// Character large object declaration.
#[must_use]
pub fn clob_declaration(_spec: &ColumnSpec) -> String {
    "TEXT".to_owned()
}

/// Date-and-time declaration. The 6 is microsecond precision, matching
/// the storage format used by the datetime codec.
#[must_use]
pub fn datetime_declaration(_spec: &ColumnSpec) -> String {
    "DATETIME2(6)".to_owned()
}

/// Date declaration, sized for `YYYY-MM-DD`.
#[must_use]
pub fn date_declaration(_spec: &ColumnSpec) -> String {
    "CHAR(10)".to_owned()
}

/// Time declaration, sized for `HH:MM:SS`.
#[must_use]
pub fn time_declaration(_spec: &ColumnSpec) -> String {
    "CHAR(8)".to_owned()
}

/// Boolean declaration.
#[must_use]
pub fn boolean_declaration(_spec: &ColumnSpec) -> String {
    "BIT".to_owned()
}

/// `DECIMAL(p, s)` declaration, defaulting to `DECIMAL(10, 0)`.
#[must_use]
pub fn decimal_declaration(spec: &ColumnSpec) -> String {
    let precision = spec.precision.unwrap_or(10);
    let scale = spec.scale.unwrap_or(0);
    format!("DECIMAL({precision}, {scale})")
}
