//! Boolean connectives.
//!
//! `and` / `or` take two or more BOOLEAN operands; a single operand is an
//! arity error rather than a silent pass-through.

use core::ops;

use sqlkind_types::{ColumnKind, LogicOp, OperatorFamily, promote};

use super::{Expr, Node, collect, kinds, reject, resolve};
use crate::error::{Error, Result};

fn connective<I>(op: LogicOp, operands: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let operands = collect(op.as_str(), 2, operands)?;
    let kind = resolve(promote::logical(op, &kinds(&operands)))?;
    Ok(Expr::from_node(kind, Node::Logical { op, operands }))
}

/// `a AND b AND ...`
///
/// ```
/// use sqlkind_core::expr::{and, eq, gt};
/// use sqlkind_core::schema::Column;
/// use sqlkind_core::Error;
/// use sqlkind_types::ColumnKind;
///
/// let age = Column::new("age", ColumnKind::int());
/// let both = and([gt(&age, 18).unwrap(), eq(&age, 30).unwrap()]).unwrap();
/// assert_eq!(both.kind(), ColumnKind::Boolean);
///
/// let one = and([gt(&age, 18).unwrap()]);
/// assert!(matches!(one, Err(Error::ArityViolation { expected: 2, found: 1, .. })));
/// ```
pub fn and<I>(operands: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    connective(LogicOp::And, operands)
}

/// `a OR b OR ...`
pub fn or<I>(operands: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    connective(LogicOp::Or, operands)
}

/// `NOT operand`
pub fn not(operand: impl Into<Expr>) -> Result<Expr> {
    let operand = operand.into();
    let kind = operand.kind();
    if !kind.supports(OperatorFamily::Logical) {
        return Err(reject(Error::UnsupportedOperand { op: "NOT", kind }));
    }
    Ok(Expr::from_node(ColumnKind::Boolean, Node::Not(operand)))
}

impl<R: Into<Expr>> ops::BitAnd<R> for Expr {
    type Output = Result<Expr>;

    fn bitand(self, rhs: R) -> Self::Output {
        and([self, rhs.into()])
    }
}

impl<R: Into<Expr>> ops::BitOr<R> for Expr {
    type Output = Result<Expr>;

    fn bitor(self, rhs: R) -> Self::Output {
        or([self, rhs.into()])
    }
}

impl ops::Not for Expr {
    type Output = Result<Expr>;

    fn not(self) -> Self::Output {
        not(self)
    }
}
