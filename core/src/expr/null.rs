//! NULL handling.

use sqlkind_types::promote;

use super::{Expr, Node, collect, resolve};
use crate::error::{Error, Result};

/// `COALESCE(a, b, ...)`: the first non-NULL argument.
///
/// The result kind unifies every argument the way CASE branches do, so
/// `COALESCE(int_col, 0.5)` is DOUBLE and `COALESCE(text_col, 1)` is a
/// [`KindMismatch`](crate::Error::KindMismatch).
pub fn coalesce<I>(operands: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    let operands = collect("COALESCE", 1, operands)?;
    let kind = resolve(promote::unify_all("COALESCE", operands.iter().map(Expr::kind)))?
        .ok_or(Error::ArityViolation {
            op: "COALESCE",
            expected: 1,
            found: 0,
        })?;
    Ok(Expr::from_node(kind, Node::Coalesce { operands }))
}
