//! Comparison and single-row predicates.
//!
//! Every function here yields BOOLEAN. Operands must be compatible:
//!
//! - `eq`, `ne`, `gt`, `gte`, `lt`, `lte`: numeric with numeric, text with
//!   text or enum, DATE with DATETIME, and so on
//! - `like`, `not_like`: text-like target and pattern
//! - `between`: target compatible with both bounds
//! - `is_null`, `is_not_null`: any kind

use sqlkind_types::{CmpOp, ColumnKind, OperatorFamily, promote};

use super::{Expr, Node, reject, resolve};
use crate::error::{Error, Result};

fn compare(op: CmpOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    let (left, right) = (left.into(), right.into());
    let kind = resolve(promote::comparison(op, left.kind(), right.kind()))?;
    Ok(Expr::from_node(kind, Node::Comparison { op, left, right }))
}

// =============================================================================
// Equality and Ordering
// =============================================================================

/// `left = right`
pub fn eq(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Eq, left, right)
}

/// `left <> right`
pub fn ne(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Ne, left, right)
}

/// `left < right`
pub fn lt(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Lt, left, right)
}

/// `left <= right`
pub fn lte(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Lte, left, right)
}

/// `left > right`
pub fn gt(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Gt, left, right)
}

/// `left >= right`
pub fn gte(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    compare(CmpOp::Gte, left, right)
}

// =============================================================================
// Pattern Matching
// =============================================================================

fn like_pattern(
    target: impl Into<Expr>,
    pattern: impl Into<Expr>,
    negated: bool,
) -> Result<Expr> {
    let (target, pattern) = (target.into(), pattern.into());
    let op = if negated { "NOT LIKE" } else { "LIKE" };
    for kind in [target.kind(), pattern.kind()] {
        if !kind.supports(OperatorFamily::Pattern) {
            return Err(reject(Error::UnsupportedOperand { op, kind }));
        }
    }
    Ok(Expr::from_node(
        ColumnKind::Boolean,
        Node::Like {
            target,
            pattern,
            negated,
        },
    ))
}

/// `target LIKE pattern`
pub fn like(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
    like_pattern(target, pattern, false)
}

/// `target NOT LIKE pattern`
pub fn not_like(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Result<Expr> {
    like_pattern(target, pattern, true)
}

// =============================================================================
// Range
// =============================================================================

fn range(
    target: impl Into<Expr>,
    lower: impl Into<Expr>,
    upper: impl Into<Expr>,
    negated: bool,
) -> Result<Expr> {
    let (target, lower, upper) = (target.into(), lower.into(), upper.into());
    let op = if negated { "NOT BETWEEN" } else { "BETWEEN" };
    for bound in [lower.kind(), upper.kind()] {
        if !promote::compatible(target.kind(), bound) {
            return Err(reject(Error::KindMismatch {
                op,
                left: target.kind(),
                right: bound,
            }));
        }
    }
    Ok(Expr::from_node(
        ColumnKind::Boolean,
        Node::Between {
            family: target.kind().domain(),
            target,
            lower,
            upper,
            negated,
        },
    ))
}

/// `target BETWEEN lower AND upper`
pub fn between(
    target: impl Into<Expr>,
    lower: impl Into<Expr>,
    upper: impl Into<Expr>,
) -> Result<Expr> {
    range(target, lower, upper, false)
}

/// `target NOT BETWEEN lower AND upper`
pub fn not_between(
    target: impl Into<Expr>,
    lower: impl Into<Expr>,
    upper: impl Into<Expr>,
) -> Result<Expr> {
    range(target, lower, upper, true)
}

// =============================================================================
// NULL Checks
// =============================================================================

/// `target IS NULL`
#[must_use]
pub fn is_null(target: impl Into<Expr>) -> Expr {
    Expr::from_node(
        ColumnKind::Boolean,
        Node::IsNull {
            target: target.into(),
            negated: false,
        },
    )
}

/// `target IS NOT NULL`
#[must_use]
pub fn is_not_null(target: impl Into<Expr>) -> Expr {
    Expr::from_node(
        ColumnKind::Boolean,
        Node::IsNull {
            target: target.into(),
            negated: true,
        },
    )
}
