use sqlkind_types::promote;

use super::{Select, Statement};
use crate::error::{Error, Result};
use crate::expr::{Expr, reject};
use crate::schema::{Column, Table};

/// Rows for an INSERT.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    Values(Vec<Vec<Expr>>),
    Select(Box<Select>),
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: Table,
    columns: Vec<Column>,
    source: Option<InsertSource>,
}

/// `INSERT INTO table (columns...)`; at least one column.
pub fn insert_into<I>(table: impl Into<Table>, columns: I) -> Result<Insert>
where
    I: IntoIterator,
    I::Item: Into<Column>,
{
    let columns: Vec<Column> = columns.into_iter().map(Into::into).collect();
    if columns.is_empty() {
        return Err(reject(Error::ArityViolation {
            op: "INSERT",
            expected: 1,
            found: 0,
        }));
    }
    Ok(Insert {
        table: table.into(),
        columns,
        source: None,
    })
}

impl Insert {
    /// Append a row of values, one per column, each compatible with its column.
    /// Replaces a previous `select` source.
    pub fn values<I>(mut self, row: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let row: Vec<Expr> = row.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(reject(Error::ArityViolation {
                op: "VALUES",
                expected: self.columns.len(),
                found: row.len(),
            }));
        }
        for (column, value) in self.columns.iter().zip(&row) {
            if !promote::compatible(column.kind(), value.kind()) {
                return Err(reject(Error::KindMismatch {
                    op: "VALUES",
                    left: column.kind(),
                    right: value.kind(),
                }));
            }
        }
        match &mut self.source {
            Some(InsertSource::Values(rows)) => rows.push(row),
            source => *source = Some(InsertSource::Values(vec![row])),
        }
        Ok(self)
    }

    /// `INSERT ... SELECT`. The query's projection must line up with the
    /// columns. Replaces any rows added with `values`.
    pub fn select(mut self, query: Select) -> Result<Self> {
        let projection = query.projection_kind();
        if projection.arity() != self.columns.len() {
            return Err(reject(Error::ArityViolation {
                op: "INSERT SELECT",
                expected: self.columns.len(),
                found: projection.arity(),
            }));
        }
        let kinds = (0..projection.arity()).filter_map(|index| projection.kind_at(index));
        for (column, kind) in self.columns.iter().zip(kinds) {
            if !promote::compatible(column.kind(), kind) {
                return Err(reject(Error::KindMismatch {
                    op: "INSERT SELECT",
                    left: column.kind(),
                    right: kind,
                }));
            }
        }
        self.source = Some(InsertSource::Select(Box::new(query)));
        Ok(self)
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn source(&self) -> Option<&InsertSource> {
        self.source.as_ref()
    }

    /// Fails when neither `values` nor `select` was supplied.
    pub fn into_statement(self) -> Result<Statement> {
        if self.source.is_none() {
            return Err(reject(Error::ArityViolation {
                op: "INSERT",
                expected: 1,
                found: 0,
            }));
        }
        Ok(Statement::Insert(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expr, now};
    use crate::stmt::select;
    use sqlkind_types::ColumnKind;

    fn users() -> (Table, Column, Column) {
        let users = Table::new("users");
        let id = users.column("id", ColumnKind::int_unsigned());
        let name = users.column("name", ColumnKind::varchar());
        (users, id, name)
    }

    #[test]
    fn test_values_checks_arity_and_kinds() {
        let (table, id, name) = users();
        let insert = insert_into(&table, [id.clone(), name.clone()]).unwrap();

        let short = insert.clone().values([Expr::from(1u32)]).unwrap_err();
        assert_eq!(
            short,
            Error::ArityViolation {
                op: "VALUES",
                expected: 2,
                found: 1
            }
        );

        let wrong = insert
            .clone()
            .values([Expr::from("x"), Expr::from("y")])
            .unwrap_err();
        assert!(matches!(wrong, Error::KindMismatch { op: "VALUES", .. }));

        let ok = insert
            .values([Expr::from(1u32), Expr::from("alice")])
            .unwrap()
            .values([Expr::from(2u32), Expr::null(ColumnKind::varchar())])
            .unwrap();
        match ok.source() {
            Some(InsertSource::Values(rows)) => assert_eq!(rows.len(), 2),
            other => panic!("unexpected source {other:?}"),
        }
        assert!(ok.into_statement().is_ok());
    }

    #[test]
    fn test_insert_needs_columns_and_source() {
        let (table, id, _) = users();
        let none: [Column; 0] = [];
        assert!(matches!(
            insert_into(&table, none),
            Err(Error::ArityViolation { op: "INSERT", .. })
        ));
        assert!(insert_into(&table, [id]).unwrap().into_statement().is_err());
    }

    #[test]
    fn test_insert_select_lines_up_columns() {
        let (table, id, name) = users();
        let archive = Table::new("archive");
        let created = archive.column("created", ColumnKind::DateTime);

        let ok = insert_into(&table, [id.clone(), name.clone()])
            .unwrap()
            .select(select([Expr::from(&id), Expr::from(&name)]).unwrap());
        assert!(ok.is_ok());

        let err = insert_into(&archive, [created])
            .unwrap()
            .select(select([Expr::from(&name)]).unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::KindMismatch { .. }));

        let mismatch = insert_into(&table, [id])
            .unwrap()
            .select(select([now()]).unwrap())
            .unwrap_err();
        assert!(matches!(mismatch, Error::KindMismatch { .. }));
    }
}
