//! Read-only traversal for compilers and analyzers.
//!
//! Implement the `visit_*` hooks you care about; the defaults recurse with the
//! matching `walk_*` function so children are visited in operand order.
//!
//! ```
//! use sqlkind_core::deferred::Deferred;
//! use sqlkind_core::expr::{now, sub};
//! use sqlkind_core::visit::Visitor;
//! use chrono::TimeDelta;
//!
//! #[derive(Default)]
//! struct DeferredNames(Vec<&'static str>);
//!
//! impl Visitor for DeferredNames {
//!     fn visit_deferred(&mut self, deferred: &Deferred) {
//!         self.0.push(deferred.name());
//!     }
//! }
//!
//! let expr = sub(now(), TimeDelta::hours(1)).unwrap();
//! let mut names = DeferredNames::default();
//! names.visit_expr(&expr);
//! assert_eq!(names.0, ["NOW"]);
//! ```

use sqlkind_types::ColumnKind;

use crate::deferred::Deferred;
use crate::expr::{Expr, Node, Term};
use crate::literal::Literal;
use crate::schema::Column;
use crate::stmt::{InsertSource, Select, Statement};

pub trait Visitor {
    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_node(&mut self, node: &Node, kind: ColumnKind) {
        walk_node(self, node, kind);
    }

    fn visit_select(&mut self, select: &Select) {
        walk_select(self, select);
    }

    fn visit_column(&mut self, _column: &Column) {}

    fn visit_literal(&mut self, _literal: &Literal) {}

    /// A typed NULL.
    fn visit_null(&mut self, _kind: ColumnKind) {}

    fn visit_deferred(&mut self, _deferred: &Deferred) {}
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr.term() {
        Term::Column(column) => visitor.visit_column(column),
        Term::Literal(literal) => visitor.visit_literal(literal),
        Term::Null => visitor.visit_null(expr.kind()),
        Term::Subquery(select) => visitor.visit_select(select),
        Term::Node(node) => visitor.visit_node(node, expr.kind()),
    }
}

/// Visit operands in source order, then any embedded subquery.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, node: &Node, _kind: ColumnKind) {
    if let Node::Deferred(deferred) = node {
        visitor.visit_deferred(deferred);
        return;
    }
    for operand in node.operands() {
        visitor.visit_expr(operand);
    }
    if let Some(select) = node.subquery() {
        visitor.visit_select(select);
    }
}

pub fn walk_select<V: Visitor + ?Sized>(visitor: &mut V, select: &Select) {
    for expr in select.projections() {
        visitor.visit_expr(expr);
    }
    if let Some(filter) = select.filter() {
        visitor.visit_expr(filter);
    }
    for expr in select.grouping() {
        visitor.visit_expr(expr);
    }
    if let Some(having) = select.having_condition() {
        visitor.visit_expr(having);
    }
    for expr in select.ordering() {
        visitor.visit_expr(expr);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Select(select) => visitor.visit_select(select),
        Statement::Insert(insert) => {
            for column in insert.columns() {
                visitor.visit_column(column);
            }
            match insert.source() {
                Some(InsertSource::Values(rows)) => {
                    for value in rows.iter().flatten() {
                        visitor.visit_expr(value);
                    }
                }
                Some(InsertSource::Select(select)) => visitor.visit_select(select),
                None => {}
            }
        }
        Statement::Update(update) => {
            for (column, value) in update.assignments() {
                visitor.visit_column(column);
                visitor.visit_expr(value);
            }
            if let Some(filter) = update.filter() {
                visitor.visit_expr(filter);
            }
        }
        Statement::Delete(delete) => {
            if let Some(filter) = delete.filter() {
                visitor.visit_expr(filter);
            }
        }
    }
}
