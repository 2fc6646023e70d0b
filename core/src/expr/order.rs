use sqlkind_types::Direction;

use super::{Expr, Node};

fn ordering(direction: Direction, operand: impl Into<Expr>) -> Expr {
    let operand = operand.into();
    Expr::from_node(
        operand.kind(),
        Node::Ordering { direction, operand },
    )
}

/// `expr ASC`, for `ORDER BY`
#[must_use]
pub fn asc(operand: impl Into<Expr>) -> Expr {
    ordering(Direction::Asc, operand)
}

/// `expr DESC`, for `ORDER BY`
#[must_use]
pub fn desc(operand: impl Into<Expr>) -> Expr {
    ordering(Direction::Desc, operand)
}
