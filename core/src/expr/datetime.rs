//! Deferred built-ins.
//!
//! These return expressions wrapping the shared [`Deferred`] handles; the
//! clock is read only when a compiler evaluates them.
//!
//! ```
//! use sqlkind_core::expr::{now, sub};
//! use sqlkind_types::ColumnKind;
//! use chrono::TimeDelta;
//!
//! let cutoff = sub(now(), TimeDelta::days(30)).unwrap();
//! assert_eq!(cutoff.kind(), ColumnKind::DateTime);
//! ```

use super::Expr;
use crate::deferred::{CURRENT_DATE, CURRENT_TIME, Deferred, NOW, PI};

/// `NOW()`, DATETIME
#[must_use]
pub fn now() -> Expr {
    Expr::deferred(NOW.clone())
}

/// `CURRENT_DATE`, DATE
#[must_use]
pub fn current_date() -> Expr {
    Expr::deferred(CURRENT_DATE.clone())
}

/// `CURRENT_TIME`, TIME
#[must_use]
pub fn current_time() -> Expr {
    Expr::deferred(CURRENT_TIME.clone())
}

/// `PI()`, DOUBLE
#[must_use]
pub fn pi() -> Expr {
    Expr::deferred(PI.clone())
}

/// Any user supplied deferred value.
#[must_use]
pub fn deferred(value: Deferred) -> Expr {
    Expr::deferred(value)
}
