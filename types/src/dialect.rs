//! SQL dialect identification.
//!
//! The expression layer is dialect-agnostic; a dialect only matters when a
//! [`ColumnKind`](crate::ColumnKind) has to be spelled out as SQL text, e.g.
//! as the target of a `CAST`.

/// SQL dialect for database-specific type spelling
///
/// # Examples
///
/// ```
/// use sqlkind_types::Dialect;
///
/// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
/// assert!(Dialect::MySQL.has_unsigned_integers());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - type affinity only (INTEGER, REAL, NUMERIC, TEXT, BLOB)
    #[default]
    SQLite,

    /// PostgreSQL - no unsigned integers, unsigned kinds widen on output
    PostgreSQL,

    /// MySQL - native `UNSIGNED` integer modifiers
    MySQL,
}

impl Dialect {
    /// Returns `true` if the dialect can spell an unsigned integer type.
    #[inline]
    #[must_use]
    pub const fn has_unsigned_integers(&self) -> bool {
        matches!(self, Dialect::MySQL)
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect")]
pub struct DialectParseError;
