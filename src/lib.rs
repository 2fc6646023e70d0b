//! # sqlkind
//!
//! Typed SQL expression construction. Every expression carries a resolved
//! column kind, computed from its operands by a deterministic promotion
//! engine, so mismatches surface when the expression is built rather than
//! when the database rejects the query.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlkind::prelude::*;
//!
//! # fn main() -> sqlkind::Result<()> {
//! let users = Table::new("users");
//! let id = users.column("id", ColumnKind::int_unsigned());
//! let age = users.column("age", ColumnKind::tinyint());
//!
//! // INT UNSIGNED and TINYINT meet at BIGINT
//! let score = add(&id, &age)?;
//! assert_eq!(score.kind(), ColumnKind::bigint());
//!
//! let query = select([score])?
//!     .from(&users)
//!     .r#where(and([gte(&age, 18)?, is_not_null(&id)])?)?
//!     .order_by([desc(&id)])
//!     .limit(10);
//! assert!(query.into_statement().is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! | Crate           | Contents                                         |
//! |-----------------|--------------------------------------------------|
//! | `sqlkind-types` | Column kinds, operator tags, promotion engine    |
//! | `sqlkind-core`  | Expression nodes, builders, statements, visitor  |
//!
//! ## Features
//!
//! - `std` (default)
//! - `tracing`: emit an event for each built node and each rejected build
//! - `serde`: serde derives on kinds, tags, tables and columns
//!
//! Producing SQL text is left to a compiler. It walks the tree through
//! [`Visitor`](prelude::Visitor), reads [`Node::tag`](prelude::Node::tag)
//! and the ordered operands, and evaluates deferred values such as `NOW()`.

pub use sqlkind_core as core;
pub use sqlkind_types as types;

pub use sqlkind_core::{
    Column, Deferred, Error, Expr, Literal, Node, Result, Select, Statement, Table, Term,
};
pub use sqlkind_types::{ColumnKind, Dialect, Domain, Sign};

/// Everything needed to build expressions and statements.
pub mod prelude {
    pub use sqlkind_core::prelude::*;
}
