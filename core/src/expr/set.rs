//! Set membership and existence predicates.
//!
//! `IN` accepts either a literal candidate list or a one-column subquery.
//! Every candidate must be compatible with the target.

use sqlkind_types::{ColumnKind, promote};

use super::{Expr, InList, Node, reject};
use crate::error::{Error, Result};
use crate::stmt::Select;

fn membership(target: Expr, candidates: InList, negated: bool) -> Result<Expr> {
    let op = if negated { "NOT IN" } else { "IN" };
    let candidate_kinds: Vec<ColumnKind> = match &candidates {
        InList::Values(values) => values.iter().map(Expr::kind).collect(),
        InList::Subquery(select) => vec![single_column(op, select)?],
    };
    if candidate_kinds.is_empty() {
        return Err(reject(Error::ArityViolation {
            op,
            expected: 1,
            found: 0,
        }));
    }
    if let Some(&bad) = candidate_kinds
        .iter()
        .find(|&&kind| !promote::compatible(target.kind(), kind))
    {
        return Err(reject(Error::KindMismatch {
            op,
            left: target.kind(),
            right: bad,
        }));
    }
    Ok(Expr::from_node(
        ColumnKind::Boolean,
        Node::In {
            target,
            candidates,
            negated,
        },
    ))
}

/// Kind of a subquery that must project exactly one column.
pub(crate) fn single_column(op: &'static str, select: &Select) -> Result<ColumnKind> {
    let projection = select.projection_kind();
    projection.single().ok_or_else(|| {
        reject(Error::ArityViolation {
            op,
            expected: 1,
            found: projection.arity(),
        })
    })
}

/// `target IN (a, b, ...)`. An empty list is rejected.
pub fn in_list<I>(target: impl Into<Expr>, candidates: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let values = candidates.into_iter().map(Into::into).collect();
    membership(target.into(), InList::Values(values), false)
}

/// `target NOT IN (a, b, ...)`
pub fn not_in_list<I>(target: impl Into<Expr>, candidates: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let values = candidates.into_iter().map(Into::into).collect();
    membership(target.into(), InList::Values(values), true)
}

/// `target IN (SELECT ...)`
pub fn in_subquery(target: impl Into<Expr>, subquery: Select) -> Result<Expr> {
    membership(target.into(), InList::Subquery(Box::new(subquery)), false)
}

/// `target NOT IN (SELECT ...)`
pub fn not_in_subquery(target: impl Into<Expr>, subquery: Select) -> Result<Expr> {
    membership(target.into(), InList::Subquery(Box::new(subquery)), true)
}

/// `EXISTS (SELECT ...)`
#[must_use]
pub fn exists(subquery: Select) -> Expr {
    Expr::from_node(
        ColumnKind::Boolean,
        Node::Exists {
            subquery: Box::new(subquery),
            negated: false,
        },
    )
}

/// `NOT EXISTS (SELECT ...)`
#[must_use]
pub fn not_exists(subquery: Select) -> Expr {
    Expr::from_node(
        ColumnKind::Boolean,
        Node::Exists {
            subquery: Box::new(subquery),
            negated: true,
        },
    )
}
