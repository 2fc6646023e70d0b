//! String functions over textual and enum operands.
//!
//! Enum operands are promoted to VARCHAR; a CLOB anywhere in `concat` makes
//! the result CLOB. `length` also accepts binary operands.

use smallvec::smallvec;
use sqlkind_types::{StringFn, promote};

use super::{Expr, Node, collect, kinds, resolve};
use crate::error::Result;

fn unary(func: StringFn, operand: impl Into<Expr>) -> Result<Expr> {
    let operand = operand.into();
    let kind = resolve(promote::string_fn(func, operand.kind()))?;
    Ok(Expr::from_node(
        kind,
        Node::String {
            func,
            operands: smallvec![operand],
        },
    ))
}

/// `CONCAT(a, b, ...)`, at least one operand
pub fn concat<I>(operands: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let operands = collect(StringFn::Concat.as_str(), 1, operands)?;
    let kind = resolve(promote::concat(&kinds(&operands)))?;
    Ok(Expr::from_node(
        kind,
        Node::String {
            func: StringFn::Concat,
            operands,
        },
    ))
}

pub fn upper(operand: impl Into<Expr>) -> Result<Expr> {
    unary(StringFn::Upper, operand)
}

pub fn lower(operand: impl Into<Expr>) -> Result<Expr> {
    unary(StringFn::Lower, operand)
}

pub fn trim(operand: impl Into<Expr>) -> Result<Expr> {
    unary(StringFn::Trim, operand)
}

/// `LENGTH(x)`, always INT
pub fn length(operand: impl Into<Expr>) -> Result<Expr> {
    unary(StringFn::Length, operand)
}
