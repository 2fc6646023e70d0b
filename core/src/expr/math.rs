//! Numeric functions.
//!
//! Rounding (`CEIL`, `FLOOR`, `ROUND`) keeps the operand kind. The
//! transcendental functions are not closed over integers, so their results are
//! lifted: 8/16-bit integers to FLOAT, 32/64-bit integers to DOUBLE, and
//! DECIMAL stays DECIMAL.

use smallvec::smallvec;
use sqlkind_types::{MathFn, promote};

use super::{Expr, Node, resolve};
use crate::error::Result;
use crate::literal::Literal;

fn unary(func: MathFn, operand: impl Into<Expr>) -> Result<Expr> {
    let operand = operand.into();
    let kind = resolve(promote::unary_math(func, operand.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::Math {
            func,
            operands: smallvec![operand],
        },
    ))
}

fn binary(func: MathFn, left: impl Into<Expr>, right: impl Into<Expr>) -> Result<Expr> {
    let (left, right) = (left.into(), right.into());
    let kind = resolve(promote::binary_math(func, left.kind(), right.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::Math {
            func,
            operands: smallvec![left, right],
        },
    ))
}

macro_rules! unary_math {
    ($($(#[$doc:meta])* $name:ident => $func:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(operand: impl Into<Expr>) -> Result<Expr> {
                unary(MathFn::$func, operand)
            }
        )*
    };
}

unary_math! {
    /// `ABS(x)`, keeps signedness
    abs => Abs,
    /// `SIGN(x)`
    sign => Sign,
    /// `CEIL(x)`, same kind as `x`
    ceil => Ceil,
    /// `FLOOR(x)`, same kind as `x`
    floor => Floor,
    /// `ROUND(x)`; a DECIMAL result has scale 0
    round => Round,
    sqrt => Sqrt,
    exp => Exp,
    ln => Ln,
    log2 => Log2,
    log10 => Log10,
    sin => Sin,
    cos => Cos,
    tan => Tan,
    asin => Asin,
    acos => Acos,
    atan => Atan,
}

/// `ROUND(x, scale)`. A DECIMAL operand's result scale becomes `scale`.
pub fn round_to(operand: impl Into<Expr>, scale: u8) -> Result<Expr> {
    let operand = operand.into();
    let kind = resolve(promote::unary_math(MathFn::Round, operand.kind()))
        .map(|kind| promote::round(kind, Some(scale)))?;
    Ok(Expr::from_node(
        kind,
        Node::Math {
            func: MathFn::Round,
            operands: smallvec![operand, Expr::literal(Literal::U8(scale))],
        },
    ))
}

/// `POWER(base, exponent)`
pub fn pow(base: impl Into<Expr>, exponent: impl Into<Expr>) -> Result<Expr> {
    binary(MathFn::Pow, base, exponent)
}

/// `ATAN2(y, x)`
pub fn atan2(y: impl Into<Expr>, x: impl Into<Expr>) -> Result<Expr> {
    binary(MathFn::Atan2, y, x)
}

/// `LOG(base, value)`: logarithm of `value` in `base`.
pub fn log(base: impl Into<Expr>, value: impl Into<Expr>) -> Result<Expr> {
    binary(MathFn::Log, base, value)
}
