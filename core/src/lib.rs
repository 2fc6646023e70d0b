//! Expression nodes, builders, statements and the tree visitor for sqlkind.
//!
//! Unlike `sqlkind-types` this crate always links `std`: the built-in deferred
//! values read the system clock. The `std` feature only forwards to
//! dependencies.

pub mod deferred;
pub mod error;
pub mod expr;
pub mod literal;
pub mod schema;
pub mod stmt;
mod trace;
pub mod visit;

// Re-export key types
pub use deferred::Deferred;
pub use error::{Error, Result};
pub use expr::{Expr, Node, Term};
pub use literal::Literal;
pub use schema::{Column, Table};
pub use stmt::{Delete, Insert, Projection, Select, Statement, Update};
pub use visit::Visitor;

pub use sqlkind_types as types;

/// Prelude module for commonly used types and builders
pub mod prelude {
    pub use crate::deferred::{CURRENT_DATE, CURRENT_TIME, Deferred, NOW, PI};
    pub use crate::error::{Error, Result};
    pub use crate::expr::*;
    pub use crate::literal::Literal;
    pub use crate::schema::{Column, Table};
    pub use crate::stmt::*;
    pub use crate::visit::Visitor;
    pub use sqlkind_types::prelude::*;
}
