//! Tables and columns as produced by a schema generator.

use compact_str::CompactString;
use sqlkind_types::ColumnKind;

/// A table reference, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    name: CompactString,
    alias: Option<CompactString>,
}

impl Table {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<CompactString>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name columns are qualified with: the alias when present.
    #[must_use]
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// A column of this table.
    pub fn column(&self, name: impl Into<CompactString>, kind: ColumnKind) -> Column {
        Column {
            table: Some(self.qualifier().into()),
            name: name.into(),
            kind,
        }
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::new(name)
    }
}

impl From<&Table> for Table {
    fn from(table: &Table) -> Self {
        table.clone()
    }
}

/// A typed column reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    table: Option<CompactString>,
    name: CompactString,
    kind: ColumnKind,
}

impl Column {
    /// An unqualified column.
    pub fn new(name: impl Into<CompactString>, kind: ColumnKind) -> Self {
        Self {
            table: None,
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }
}

impl From<&Column> for Column {
    fn from(column: &Column) -> Self {
        column.clone()
    }
}
