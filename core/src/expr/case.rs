//! CASE expressions.
//!
//! Two entry points:
//!
//! - [`case`] starts a *simple* CASE over a subject; every WHEN value must be
//!   compatible with the subject.
//! - [`case_when`] starts a *searched* CASE; every WHEN condition must be
//!   BOOLEAN.
//!
//! The result kind is the unification of every THEN and the ELSE.
//!
//! # Example
//!
//! ```
//! use sqlkind_core::expr::*;
//! use sqlkind_core::schema::Column;
//! use sqlkind_types::ColumnKind;
//!
//! let age = Column::new("age", ColumnKind::int());
//!
//! let band = case_when(gt(&age, 65).unwrap(), "senior")
//!     .unwrap()
//!     .when(gt(&age, 18).unwrap(), "adult")
//!     .unwrap()
//!     .r#else("minor")
//!     .unwrap();
//! assert_eq!(band.kind(), ColumnKind::varchar());
//! ```

use sqlkind_types::{ColumnKind, promote};

use super::{Expr, Node, reject, resolve};
use crate::error::{Error, Result};

const CASE: &str = "CASE";

/// A finished CASE node.
#[derive(Debug, Clone, PartialEq)]
pub enum Case {
    /// `CASE subject WHEN value THEN result ... [ELSE otherwise] END`
    Simple {
        subject: Expr,
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Expr>,
    },
    /// `CASE WHEN condition THEN result ... [ELSE otherwise] END`
    Searched {
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Expr>,
    },
}

impl Case {
    #[must_use]
    pub fn subject(&self) -> Option<&Expr> {
        match self {
            Case::Simple { subject, .. } => Some(subject),
            Case::Searched { .. } => None,
        }
    }

    /// `(when, then)` pairs in order.
    #[must_use]
    pub fn branches(&self) -> &[(Expr, Expr)] {
        match self {
            Case::Simple { branches, .. } | Case::Searched { branches, .. } => branches,
        }
    }

    #[must_use]
    pub fn otherwise(&self) -> Option<&Expr> {
        match self {
            Case::Simple { otherwise, .. } | Case::Searched { otherwise, .. } => {
                otherwise.as_ref()
            }
        }
    }

    pub(crate) fn operands(&self) -> Vec<&Expr> {
        let mut out: Vec<&Expr> = self.subject().into_iter().collect();
        for (when, then) in self.branches() {
            out.push(when);
            out.push(then);
        }
        out.extend(self.otherwise());
        out
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Start a simple CASE over `subject`.
pub fn case(subject: impl Into<Expr>) -> CaseBuilder {
    CaseBuilder {
        subject: Some(subject.into()),
        branches: Vec::new(),
        kind: None,
    }
}

/// Start a searched CASE with its first branch.
pub fn case_when(condition: impl Into<Expr>, result: impl Into<Expr>) -> Result<CaseBuilder> {
    CaseBuilder {
        subject: None,
        branches: Vec::new(),
        kind: None,
    }
    .when(condition, result)
}

/// CASE under construction. Finish with [`end`](Self::end) or
/// [`r#else`](Self::r#else).
#[derive(Debug, Clone)]
#[must_use = "a CASE builder does nothing until finished with `end` or `r#else`"]
pub struct CaseBuilder {
    subject: Option<Expr>,
    branches: Vec<(Expr, Expr)>,
    /// Unified kind of the THEN results so far
    kind: Option<ColumnKind>,
}

impl CaseBuilder {
    /// Add a `WHEN ... THEN ...` branch.
    pub fn when(mut self, when: impl Into<Expr>, then: impl Into<Expr>) -> Result<Self> {
        let (when, then) = (when.into(), then.into());
        match &self.subject {
            Some(subject) if !promote::compatible(subject.kind(), when.kind()) => {
                return Err(reject(Error::KindMismatch {
                    op: CASE,
                    left: subject.kind(),
                    right: when.kind(),
                }));
            }
            None if !when.kind().is_boolean() => {
                return Err(reject(Error::UnsupportedOperand {
                    op: "WHEN",
                    kind: when.kind(),
                }));
            }
            _ => {}
        }
        self.kind = Some(self.unify(then.kind())?);
        self.branches.push((when, then));
        Ok(self)
    }

    /// Finish without ELSE; unmatched rows yield NULL.
    pub fn end(self) -> Result<Expr> {
        self.finish(None)
    }

    /// Finish with an ELSE result.
    pub fn r#else(self, otherwise: impl Into<Expr>) -> Result<Expr> {
        self.finish(Some(otherwise.into()))
    }

    fn unify(&self, next: ColumnKind) -> Result<ColumnKind> {
        match self.kind {
            None => Ok(next),
            Some(kind) => resolve(promote::unify(CASE, kind, next)),
        }
    }

    fn finish(self, otherwise: Option<Expr>) -> Result<Expr> {
        let kind = match (self.kind, &otherwise) {
            (None, _) => {
                return Err(reject(Error::ArityViolation {
                    op: CASE,
                    expected: 1,
                    found: 0,
                }));
            }
            (Some(_), Some(otherwise)) => self.unify(otherwise.kind())?,
            (Some(kind), None) => kind,
        };
        let case = match self.subject {
            Some(subject) => Case::Simple {
                subject,
                branches: self.branches,
                otherwise,
            },
            None => Case::Searched {
                branches: self.branches,
                otherwise,
            },
        };
        Ok(Expr::from_node(kind, Node::Case(case)))
    }
}
