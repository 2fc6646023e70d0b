//! Quantified subquery operands: `ALL`, `ANY`, `SOME`.
//!
//! A quantified operand stands for "each row of the subquery". The subquery is
//! wrapped as given, with no check on its width; the operand takes the kind of
//! the leading projection so it plugs into the ordinary comparison factories:
//!
//! ```
//! use sqlkind_core::expr::{any, gt};
//! use sqlkind_core::schema::Table;
//! use sqlkind_core::stmt::select;
//! use sqlkind_types::ColumnKind;
//!
//! let orders = Table::new("orders");
//! let total = orders.column("total", ColumnKind::decimal(10, 2));
//! let limits = select([orders.column("limit", ColumnKind::int())]).unwrap();
//!
//! let over = gt(total, any(limits)).unwrap();
//! assert_eq!(over.kind(), ColumnKind::Boolean);
//! ```

use sqlkind_types::Quantifier;

use super::{Expr, Node};
use crate::stmt::Select;

fn quantified(quantifier: Quantifier, subquery: Select) -> Expr {
    Expr::from_node(
        subquery.leading_kind(),
        Node::Quantified {
            quantifier,
            subquery: Box::new(subquery),
        },
    )
}

/// `ALL (SELECT ...)`
#[must_use]
pub fn all(subquery: Select) -> Expr {
    quantified(Quantifier::All, subquery)
}

/// `ANY (SELECT ...)`
#[must_use]
pub fn any(subquery: Select) -> Expr {
    quantified(Quantifier::Any, subquery)
}

/// `SOME (SELECT ...)`, a synonym of `ANY`
#[must_use]
pub fn some(subquery: Select) -> Expr {
    quantified(Quantifier::Some, subquery)
}
