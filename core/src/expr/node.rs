use smallvec::SmallVec;
use sqlkind_types::{
    AggFn, ArithOp, CmpOp, ColumnKind, Direction, Domain, LogicOp, MathFn, Quantifier, StringFn,
};

use super::{Case, Expr};
use crate::deferred::Deferred;
use crate::stmt::Select;

/// Operand storage; most nodes have one or two operands.
pub type Operands = SmallVec<[Expr; 2]>;

/// Right-hand side of `IN`.
#[derive(Debug, Clone, PartialEq)]
pub enum InList {
    Values(Vec<Expr>),
    Subquery(Box<Select>),
}

/// An operator node. Nodes own their operands and never change after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Arithmetic {
        op: ArithOp,
        operands: Operands,
    },
    Math {
        func: MathFn,
        operands: Operands,
    },
    Comparison {
        op: CmpOp,
        left: Expr,
        right: Expr,
    },
    /// Two or more boolean operands
    Logical {
        op: LogicOp,
        operands: Operands,
    },
    Not(Expr),
    Between {
        family: Domain,
        target: Expr,
        lower: Expr,
        upper: Expr,
        negated: bool,
    },
    In {
        target: Expr,
        candidates: InList,
        negated: bool,
    },
    Like {
        target: Expr,
        pattern: Expr,
        negated: bool,
    },
    IsNull {
        target: Expr,
        negated: bool,
    },
    Exists {
        subquery: Box<Select>,
        negated: bool,
    },
    /// `ALL|ANY|SOME (subquery)`, the right side of a comparison
    Quantified {
        quantifier: Quantifier,
        subquery: Box<Select>,
    },
    Case(Case),
    Aggregate {
        func: AggFn,
        operand: Expr,
        distinct: bool,
    },
    CountStar,
    Cast {
        target: ColumnKind,
        operand: Expr,
    },
    String {
        func: StringFn,
        operands: Operands,
    },
    Coalesce {
        operands: Operands,
    },
    Ordering {
        direction: Direction,
        operand: Expr,
    },
    Deferred(Deferred),
}

impl Node {
    /// The operator tag a compiler dispatches on.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Node::Arithmetic { op, .. } => op.as_str(),
            Node::Math { func, .. } => func.as_str(),
            Node::Comparison { op, .. } => op.as_str(),
            Node::Logical { op, .. } => op.as_str(),
            Node::Not(_) => "NOT",
            Node::Between { negated: false, .. } => "BETWEEN",
            Node::Between { negated: true, .. } => "NOT BETWEEN",
            Node::In { negated: false, .. } => "IN",
            Node::In { negated: true, .. } => "NOT IN",
            Node::Like { negated: false, .. } => "LIKE",
            Node::Like { negated: true, .. } => "NOT LIKE",
            Node::IsNull { negated: false, .. } => "IS NULL",
            Node::IsNull { negated: true, .. } => "IS NOT NULL",
            Node::Exists { negated: false, .. } => "EXISTS",
            Node::Exists { negated: true, .. } => "NOT EXISTS",
            Node::Quantified { quantifier, .. } => quantifier.as_str(),
            Node::Case(_) => "CASE",
            Node::Aggregate { func, .. } => func.as_str(),
            Node::CountStar => "COUNT(*)",
            Node::Cast { .. } => "CAST",
            Node::String { func, .. } => func.as_str(),
            Node::Coalesce { .. } => "COALESCE",
            Node::Ordering { direction, .. } => direction.as_str(),
            Node::Deferred(deferred) => deferred.name(),
        }
    }

    /// Direct expression operands in source order.
    ///
    /// CASE yields `subject, when, then, when, then, ..., else`. Subqueries
    /// are not expressions; see [`Node::subquery`].
    #[must_use]
    pub fn operands(&self) -> Vec<&Expr> {
        match self {
            Node::Arithmetic { operands, .. }
            | Node::Math { operands, .. }
            | Node::Logical { operands, .. }
            | Node::String { operands, .. }
            | Node::Coalesce { operands } => operands.iter().collect(),
            Node::Comparison { left, right, .. } => vec![left, right],
            Node::Between {
                target,
                lower,
                upper,
                ..
            } => vec![target, lower, upper],
            Node::In {
                target, candidates, ..
            } => {
                let mut out = vec![target];
                if let InList::Values(values) = candidates {
                    out.extend(values);
                }
                out
            }
            Node::Like {
                target, pattern, ..
            } => vec![target, pattern],
            Node::Not(operand)
            | Node::IsNull {
                target: operand, ..
            }
            | Node::Aggregate { operand, .. }
            | Node::Cast { operand, .. }
            | Node::Ordering { operand, .. } => vec![operand],
            Node::Case(case) => case.operands(),
            Node::Exists { .. }
            | Node::Quantified { .. }
            | Node::CountStar
            | Node::Deferred(_) => Vec::new(),
        }
    }

    /// The subquery this node embeds, if any.
    #[must_use]
    pub fn subquery(&self) -> Option<&Select> {
        match self {
            Node::Exists { subquery, .. } | Node::Quantified { subquery, .. } => Some(&**subquery),
            Node::In {
                candidates: InList::Subquery(subquery),
                ..
            } => Some(&**subquery),
            _ => None,
        }
    }
}
