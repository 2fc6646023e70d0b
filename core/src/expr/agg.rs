//! Aggregate functions.
//!
//! | function | result                                                   |
//! |----------|----------------------------------------------------------|
//! | COUNT    | BIGINT                                                   |
//! | SUM      | BIGINT for small integers, DECIMAL(38,0) for BIGINT,     |
//! |          | DOUBLE for floats, DECIMAL(38,s) for DECIMAL(p,s)        |
//! | AVG      | DOUBLE, or DECIMAL with scale at least 4 for DECIMAL     |
//! | MIN/MAX  | operand kind                                             |

use sqlkind_types::{AggFn, ColumnKind, promote};

use super::{Expr, Node, resolve};
use crate::error::Result;

fn aggregate(func: AggFn, operand: impl Into<Expr>, distinct: bool) -> Result<Expr> {
    let operand = operand.into();
    let kind = resolve(promote::aggregate(func, operand.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::Aggregate {
            func,
            operand,
            distinct,
        },
    ))
}

/// `COUNT(*)`
#[must_use]
pub fn count_star() -> Expr {
    Expr::from_node(ColumnKind::bigint(), Node::CountStar)
}

/// `COUNT(expr)`, counts non-NULL values
pub fn count(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Count, operand, false)
}

/// `COUNT(DISTINCT expr)`
pub fn count_distinct(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Count, operand, true)
}

/// `SUM(expr)`; numeric operands only
pub fn sum(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Sum, operand, false)
}

/// `SUM(DISTINCT expr)`
pub fn sum_distinct(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Sum, operand, true)
}

/// `AVG(expr)`; numeric operands only
pub fn avg(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Avg, operand, false)
}

/// `AVG(DISTINCT expr)`
pub fn avg_distinct(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Avg, operand, true)
}

pub fn min(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Min, operand, false)
}

pub fn max(operand: impl Into<Expr>) -> Result<Expr> {
    aggregate(AggFn::Max, operand, false)
}
