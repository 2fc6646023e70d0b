//! Arithmetic operators.
//!
//! The free functions are the primary API. `Expr` also implements the
//! `std::ops` traits with `Output = Result<Expr>`, so `(price * qty)?` reads
//! naturally while still surfacing kind errors.
//!
//! Result kinds follow the numeric widening table in
//! [`sqlkind_types::promote`](mod@sqlkind_types::promote); DATE/DATETIME
//! plus or minus an INTERVAL keeps the temporal kind.

use core::ops;

use smallvec::smallvec;
use sqlkind_types::{ArithOp, promote};

use super::{Expr, Node, resolve};
use crate::error::Result;

fn binary(op: ArithOp, left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    let (left, right) = (left.into(), right.into());
    let kind = resolve(promote::arithmetic(op, left.kind(), right.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::Arithmetic {
            op,
            operands: smallvec![left, right],
        },
    ))
}

/// `left + right`
pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    binary(ArithOp::Add, left, right)
}

/// `left - right`
pub fn sub(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    binary(ArithOp::Sub, left, right)
}

/// `left * right`
pub fn mul(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    binary(ArithOp::Mul, left, right)
}

/// `left / right`
///
/// Integer division stays integral; use [`cast`](super::cast) for a
/// fractional quotient.
pub fn div(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    binary(ArithOp::Div, left, right)
}

/// `left % right`
pub fn rem(left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    binary(ArithOp::Mod, left, right)
}

/// Unary minus. An unsigned operand becomes its signed counterpart.
pub fn neg(operand: impl Into<Expr>) -> Result<Expr> {
    let operand = operand.into();
    let kind = resolve(promote::negate(operand.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::Arithmetic {
            op: ArithOp::Neg,
            operands: smallvec![operand],
        },
    ))
}

// =============================================================================
// Operator Traits
// =============================================================================

macro_rules! impl_arith_op {
    ($($trait:ident::$method:ident => $func:ident),* $(,)?) => {
        $(
            impl<R: Into<Expr>> ops::$trait<R> for Expr {
                type Output = Result<Expr>;

                fn $method(self, rhs: R) -> Self::Output {
                    $func(self, rhs)
                }
            }
        )*
    };
}

impl_arith_op! {
    Add::add => add,
    Sub::sub => sub,
    Mul::mul => mul,
    Div::div => div,
    Rem::rem => rem,
}

impl ops::Neg for Expr {
    type Output = Result<Expr>;

    fn neg(self) -> Self::Output {
        neg(self)
    }
}
