//! Column kinds and the result-kind promotion engine for sqlkind.
//!
//! This crate is the leaf of the workspace. It knows nothing about expression
//! trees; it only answers two questions:
//!
//! - what *is* a value ([`ColumnKind`], its [`Domain`] and signedness), and
//! - what kind does an operator produce for a given set of operand kinds
//!   ([`promote`] and the per-family functions in [`promote`](mod@promote)).
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization of kinds and tags

#![cfg_attr(not(feature = "std"), no_std)]

mod dialect;
mod error;
pub mod kind;
pub mod op;
pub mod promote;

pub use dialect::{Dialect, DialectParseError};
pub use error::PromotionError;
pub use kind::{ColumnKind, Domain, Sign, SqlName};
pub use op::{
    AggFn, ArithOp, CmpOp, Direction, LogicOp, MathFn, Operator, OperatorFamily, Quantifier,
    StringFn,
};
pub use promote::promote;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::Dialect;
    pub use crate::kind::{ColumnKind, Domain, Sign};
    pub use crate::op::*;
    pub use crate::promote::{compatible, promote};
}
