use sqlkind_types::promote;

use super::{Statement, condition};
use crate::error::{Error, Result};
use crate::expr::{Expr, reject};
use crate::schema::{Column, Table};

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: Table,
    assignments: Vec<(Column, Expr)>,
    filter: Option<Expr>,
}

/// `UPDATE table`
pub fn update(table: impl Into<Table>) -> Update {
    Update {
        table: table.into(),
        assignments: Vec::new(),
        filter: None,
    }
}

impl Update {
    /// `SET column = value`; `value` must be compatible with the column.
    pub fn set(mut self, column: impl Into<Column>, value: impl Into<Expr>) -> Result<Self> {
        let (column, value) = (column.into(), value.into());
        if !promote::compatible(column.kind(), value.kind()) {
            return Err(reject(Error::KindMismatch {
                op: "SET",
                left: column.kind(),
                right: value.kind(),
            }));
        }
        self.assignments.push((column, value));
        Ok(self)
    }

    pub fn r#where(mut self, cond: impl Into<Expr>) -> Result<Self> {
        self.filter = Some(condition("WHERE", cond)?);
        Ok(self)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn assignments(&self) -> &[(Column, Expr)] {
        &self.assignments
    }

    #[must_use]
    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    /// Fails without at least one `set`.
    pub fn into_statement(self) -> Result<Statement> {
        if self.assignments.is_empty() {
            return Err(reject(Error::ArityViolation {
                op: "UPDATE",
                expected: 1,
                found: 0,
            }));
        }
        Ok(Statement::Update(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{add, eq, now};
    use sqlkind_types::ColumnKind;

    #[test]
    fn test_update_checks_assignments() {
        let posts = Table::new("posts");
        let views = posts.column("views", ColumnKind::bigint_unsigned());
        let edited = posts.column("edited", ColumnKind::DateTime);
        let id = posts.column("id", ColumnKind::int());

        assert!(update(&posts).into_statement().is_err());

        let err = update(&posts).set(&views, "many").unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                op: "SET",
                left: ColumnKind::bigint_unsigned(),
                right: ColumnKind::varchar(),
            }
        );

        let stmt = update(&posts)
            .set(&views, add(&views, 1u8).unwrap())
            .unwrap()
            .set(&edited, now())
            .unwrap()
            .r#where(eq(&id, 7).unwrap())
            .unwrap()
            .into_statement()
            .unwrap();
        let Statement::Update(update) = stmt else {
            panic!("expected UPDATE");
        };
        assert_eq!(update.assignments().len(), 2);
        assert!(update.filter().is_some());
    }
}
