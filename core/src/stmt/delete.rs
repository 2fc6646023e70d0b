use super::{Statement, condition};
use crate::error::Result;
use crate::expr::Expr;
use crate::schema::Table;

/// A DELETE statement. Without a WHERE it removes every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: Table,
    filter: Option<Expr>,
}

/// `DELETE FROM table`
pub fn delete_from(table: impl Into<Table>) -> Delete {
    Delete {
        table: table.into(),
        filter: None,
    }
}

impl Delete {
    pub fn r#where(mut self, cond: impl Into<Expr>) -> Result<Self> {
        self.filter = Some(condition("WHERE", cond)?);
        Ok(self)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    pub fn into_statement(self) -> Result<Statement> {
        Ok(Statement::Delete(self))
    }
}
