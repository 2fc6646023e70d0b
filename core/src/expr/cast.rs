use sqlkind_types::ColumnKind;

use super::{Expr, Node};

/// `CAST(operand AS target)`, the only explicit cross-domain conversion.
///
/// The compiler spells `target` with
/// [`ColumnKind::sql_name`](sqlkind_types::ColumnKind::sql_name).
#[must_use]
pub fn cast(operand: impl Into<Expr>, target: ColumnKind) -> Expr {
    Expr::from_node(
        target,
        Node::Cast {
            target,
            operand: operand.into(),
        },
    )
}
