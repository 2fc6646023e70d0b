//! Kinded expression trees.
//!
//! Every operator in this module is a free function that validates its
//! operands, resolves the result kind through
//! [`sqlkind_types::promote`](mod@sqlkind_types::promote), and returns a new
//! [`Expr`] owning a freshly built [`Node`]. Operands are taken by value;
//! reuse a sub-expression by cloning it.
//!
//! # Example
//!
//! ```
//! use sqlkind_core::expr::*;
//! use sqlkind_core::schema::Table;
//! use sqlkind_types::ColumnKind;
//!
//! let users = Table::new("users");
//! let age = users.column("age", ColumnKind::int());
//!
//! let adult = gte(age.clone(), 18).unwrap();
//! assert_eq!(adult.kind(), ColumnKind::Boolean);
//! assert_eq!(adult.node().map(|n| n.tag()), Some(">="));
//! ```

mod agg;
mod case;
mod cast;
mod cmp;
mod datetime;
mod logical;
mod math;
mod node;
mod null;
mod ops;
mod order;
mod set;
mod string;
mod subquery;

pub use agg::*;
pub use case::*;
pub use cast::*;
pub use cmp::*;
pub use datetime::*;
pub use logical::*;
pub use math::*;
pub use node::{InList, Node, Operands};
pub use null::*;
pub use ops::*;
pub use order::*;
pub use set::*;
pub use string::*;
pub use subquery::*;

use sqlkind_types::{ColumnKind, PromotionError};

use crate::deferred::Deferred;
use crate::error::{Error, Result};
use crate::literal::Literal;
use crate::schema::Column;
use crate::stmt::Select;
use crate::{sqlkind_trace_build, sqlkind_trace_reject};

// =============================================================================
// Expr
// =============================================================================

/// An expression together with its resolved kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    kind: ColumnKind,
    term: Term,
}

/// What an [`Expr`] refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Column(Column),
    Literal(Literal),
    /// Typed `NULL`
    Null,
    /// Scalar subquery
    Subquery(Box<Select>),
    Node(Box<Node>),
}

impl Expr {
    /// Wrap an already built node; `kind` must be the kind the node resolves to.
    #[must_use]
    pub fn from_node(kind: ColumnKind, node: Node) -> Self {
        sqlkind_trace_build!(node.tag(), kind);
        Self {
            kind,
            term: Term::Node(Box::new(node)),
        }
    }

    #[must_use]
    pub fn literal(value: impl Into<Literal>) -> Self {
        let value = value.into();
        Self {
            kind: value.kind(),
            term: Term::Literal(value),
        }
    }

    /// A `NULL` carrying `kind`, for positions that need an explicit kind.
    #[must_use]
    pub const fn null(kind: ColumnKind) -> Self {
        Self {
            kind,
            term: Term::Null,
        }
    }

    #[must_use]
    pub fn column(column: Column) -> Self {
        Self {
            kind: column.kind(),
            term: Term::Column(column),
        }
    }

    pub(crate) fn subquery(kind: ColumnKind, select: Select) -> Self {
        Self {
            kind,
            term: Term::Subquery(Box::new(select)),
        }
    }

    /// The deferred value `deferred` as an expression. Nothing is evaluated.
    #[must_use]
    pub fn deferred(deferred: Deferred) -> Self {
        Self::from_node(deferred.kind(), Node::Deferred(deferred))
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn term(&self) -> &Term {
        &self.term
    }

    /// The operator node, if this is not a plain reference.
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        match &self.term {
            Term::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_node(self) -> Option<Node> {
        match self.term {
            Term::Node(node) => Some(*node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.term, Term::Null)
    }
}

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::column(column)
    }
}

impl From<&Column> for Expr {
    fn from(column: &Column) -> Self {
        Expr::column(column.clone())
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::literal(value)
    }
}

impl From<Deferred> for Expr {
    fn from(deferred: Deferred) -> Self {
        Expr::deferred(deferred)
    }
}

impl From<&Deferred> for Expr {
    fn from(deferred: &Deferred) -> Self {
        Expr::deferred(deferred.clone())
    }
}

// =============================================================================
// Internal Helpers
// =============================================================================

/// Convert a promotion failure, logging the rejection.
pub(crate) fn resolve<T>(result: core::result::Result<T, PromotionError>) -> Result<T> {
    result.map_err(|err| reject(Error::from(err)))
}

pub(crate) fn reject(err: Error) -> Error {
    sqlkind_trace_reject!(err);
    err
}

/// Collect variadic operands, enforcing a minimum count.
pub(crate) fn collect<I>(op: &'static str, minimum: usize, operands: I) -> Result<Operands>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let operands: Operands = operands.into_iter().map(Into::into).collect();
    if operands.len() < minimum {
        return Err(reject(Error::ArityViolation {
            op,
            expected: minimum,
            found: operands.len(),
        }));
    }
    Ok(operands)
}

pub(crate) fn kinds(operands: &[Expr]) -> smallvec::SmallVec<[ColumnKind; 4]> {
    operands.iter().map(Expr::kind).collect()
}
