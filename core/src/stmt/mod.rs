//! Statements: the roots that expression trees hang from.
//!
//! Builders validate as they go and [`into_statement`](Select::into_statement)
//! performs the whole-statement checks (an INSERT needs a source, an UPDATE
//! needs at least one assignment).

mod delete;
mod insert;
mod select;
mod update;

pub use delete::{Delete, delete_from};
pub use insert::{Insert, InsertSource, insert_into};
pub use select::{Projection, Select, select, select_distinct};
pub use update::{Update, update};

use sqlkind_types::ColumnKind;

use crate::error::{Error, Result};
use crate::expr::{Expr, reject};

/// Any complete statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// Leading SQL keyword.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
        }
    }
}

/// WHERE / HAVING conditions must be BOOLEAN.
pub(crate) fn condition(op: &'static str, cond: impl Into<Expr>) -> Result<Expr> {
    let cond = cond.into();
    if cond.kind().is_boolean() {
        Ok(cond)
    } else {
        Err(reject(Error::KindMismatch {
            op,
            left: cond.kind(),
            right: ColumnKind::Boolean,
        }))
    }
}
