use smallvec::SmallVec;
use sqlkind_types::ColumnKind;

use super::{Statement, condition};
use crate::error::{Error, Result};
use crate::expr::{Expr, reject};
use crate::schema::Table;

/// Shape of a SELECT's projection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Exactly one column; usable as a scalar or quantified subquery
    Single(ColumnKind),
    /// Several columns of the same kind
    Uniform { kind: ColumnKind, arity: usize },
    Composite(Vec<ColumnKind>),
}

impl Projection {
    fn of(kinds: &[ColumnKind]) -> Self {
        match kinds {
            [kind] => Projection::Single(*kind),
            [first, rest @ ..] if rest.iter().all(|kind| kind == first) => Projection::Uniform {
                kind: *first,
                arity: kinds.len(),
            },
            _ => Projection::Composite(kinds.to_vec()),
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Projection::Single(_) => 1,
            Projection::Uniform { arity, .. } => *arity,
            Projection::Composite(kinds) => kinds.len(),
        }
    }

    #[must_use]
    pub const fn single(&self) -> Option<ColumnKind> {
        match self {
            Projection::Single(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Kind of the column at `index`.
    #[must_use]
    pub fn kind_at(&self, index: usize) -> Option<ColumnKind> {
        match self {
            Projection::Single(kind) => (index == 0).then_some(*kind),
            Projection::Uniform { kind, arity } => (index < *arity).then_some(*kind),
            Projection::Composite(kinds) => kinds.get(index).copied(),
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    distinct: bool,
    projections: Vec<Expr>,
    from: SmallVec<[Table; 1]>,
    filter: Option<Expr>,
    group_by: Vec<Expr>,
    having: Option<Expr>,
    order_by: Vec<Expr>,
    limit: Option<usize>,
    offset: Option<usize>,
}

fn build<I>(distinct: bool, projections: I) -> Result<Select>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let projections: Vec<Expr> = projections.into_iter().map(Into::into).collect();
    if projections.is_empty() {
        return Err(reject(Error::ArityViolation {
            op: "SELECT",
            expected: 1,
            found: 0,
        }));
    }
    Ok(Select {
        distinct,
        projections,
        from: SmallVec::new(),
        filter: None,
        group_by: Vec::new(),
        having: None,
        order_by: Vec::new(),
        limit: None,
        offset: None,
    })
}

/// `SELECT a, b, ...`
pub fn select<I>(projections: I) -> Result<Select>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    build(false, projections)
}

/// `SELECT DISTINCT a, b, ...`
pub fn select_distinct<I>(projections: I) -> Result<Select>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    build(true, projections)
}

impl Select {
    /// Kind of the first projection. The projection list is never empty.
    #[must_use]
    pub fn leading_kind(&self) -> ColumnKind {
        self.projections[0].kind()
    }

    /// Add a table to the FROM list.
    #[must_use]
    pub fn from(mut self, table: impl Into<Table>) -> Self {
        self.from.push(table.into());
        self
    }

    /// Set the WHERE condition; must be BOOLEAN.
    pub fn r#where(mut self, cond: impl Into<Expr>) -> Result<Self> {
        self.filter = Some(condition("WHERE", cond)?);
        Ok(self)
    }

    #[must_use]
    pub fn group_by<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.group_by.extend(exprs.into_iter().map(Into::into));
        self
    }

    /// Set the HAVING condition; must be BOOLEAN.
    pub fn having(mut self, cond: impl Into<Expr>) -> Result<Self> {
        self.having = Some(condition("HAVING", cond)?);
        Ok(self)
    }

    /// Append ORDER BY terms. Plain expressions sort ascending; wrap with
    /// [`desc`](crate::expr::desc) to reverse.
    #[must_use]
    pub fn order_by<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.order_by.extend(exprs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    #[must_use]
    pub fn projections(&self) -> &[Expr] {
        &self.projections
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.from
    }

    #[must_use]
    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn grouping(&self) -> &[Expr] {
        &self.group_by
    }

    #[must_use]
    pub fn having_condition(&self) -> Option<&Expr> {
        self.having.as_ref()
    }

    #[must_use]
    pub fn ordering(&self) -> &[Expr] {
        &self.order_by
    }

    #[must_use]
    pub const fn limit_value(&self) -> Option<usize> {
        self.limit
    }

    #[must_use]
    pub const fn offset_value(&self) -> Option<usize> {
        self.offset
    }

    /// Kinds of the projected columns.
    #[must_use]
    pub fn projection_kind(&self) -> Projection {
        let kinds: SmallVec<[ColumnKind; 4]> =
            self.projections.iter().map(Expr::kind).collect();
        Projection::of(&kinds)
    }

    /// Use this query as a scalar subquery expression.
    pub fn as_scalar(self) -> Result<Expr> {
        let projection = self.projection_kind();
        let kind = projection.single().ok_or_else(|| {
            reject(Error::ArityViolation {
                op: "scalar subquery",
                expected: 1,
                found: projection.arity(),
            })
        })?;
        Ok(Expr::subquery(kind, self))
    }

    pub fn into_statement(self) -> Result<Statement> {
        Ok(Statement::Select(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{count_star, desc, gt};
    use crate::schema::Column;

    #[test]
    fn test_projection_shapes() {
        let a = Column::new("a", ColumnKind::int());
        let b = Column::new("b", ColumnKind::int());
        let c = Column::new("c", ColumnKind::varchar());

        assert_eq!(
            select([&a]).unwrap().projection_kind(),
            Projection::Single(ColumnKind::int())
        );
        assert_eq!(
            select([&a, &b]).unwrap().projection_kind(),
            Projection::Uniform {
                kind: ColumnKind::int(),
                arity: 2
            }
        );
        let composite = select([&a, &c]).unwrap().projection_kind();
        assert_eq!(composite.arity(), 2);
        assert_eq!(composite.kind_at(1), Some(ColumnKind::varchar()));
        assert_eq!(composite.single(), None);
    }

    #[test]
    fn test_select_requires_projection() {
        let empty: [Expr; 0] = [];
        assert_eq!(
            select(empty),
            Err(Error::ArityViolation {
                op: "SELECT",
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_where_requires_boolean() {
        let users = Table::new("users");
        let age = users.column("age", ColumnKind::int());

        let err = select([&age]).unwrap().r#where(&age).unwrap_err();
        assert_eq!(
            err,
            Error::KindMismatch {
                op: "WHERE",
                left: ColumnKind::int(),
                right: ColumnKind::Boolean,
            }
        );

        let query = select([count_star()])
            .unwrap()
            .from(&users)
            .r#where(gt(&age, 18).unwrap())
            .unwrap()
            .order_by([desc(&age)])
            .limit(10)
            .offset(5);
        assert!(query.filter().is_some());
        assert_eq!(query.tables().len(), 1);
        assert_eq!(query.limit_value(), Some(10));
        assert_eq!(query.offset_value(), Some(5));
    }

    #[test]
    fn test_as_scalar_requires_single_column() {
        let a = Column::new("a", ColumnKind::bigint_unsigned());
        let scalar = select([&a]).unwrap().as_scalar().unwrap();
        assert_eq!(scalar.kind(), ColumnKind::bigint_unsigned());

        let err = select([&a, &a]).unwrap().as_scalar().unwrap_err();
        assert!(matches!(
            err,
            Error::ArityViolation {
                expected: 1,
                found: 2,
                ..
            }
        ));
    }
}
