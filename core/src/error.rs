use sqlkind_types::{ColumnKind, PromotionError};
use thiserror::Error;

/// Construction-time failure of an expression or statement builder.
///
/// Building is pure and deterministic, so every variant means the call site
/// has to change; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operands from domains the operator cannot combine
    #[error("kind mismatch in {op}: {left} is not compatible with {right}")]
    KindMismatch {
        op: &'static str,
        left: ColumnKind,
        right: ColumnKind,
    },

    /// Too few (or too many) operands for a variadic or fixed-arity builder
    #[error("arity violation in {op}: expected {expected}, found {found}")]
    ArityViolation {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// An operand the operator structurally cannot accept
    #[error("unsupported operand for {op}: {kind}")]
    UnsupportedOperand { op: &'static str, kind: ColumnKind },
}

impl From<PromotionError> for Error {
    fn from(err: PromotionError) -> Self {
        match err {
            PromotionError::KindMismatch { op, left, right } => {
                Error::KindMismatch { op, left, right }
            }
            PromotionError::UnsupportedOperand { op, kind } => {
                Error::UnsupportedOperand { op, kind }
            }
            PromotionError::Arity {
                op,
                expected,
                found,
            } => Error::ArityViolation {
                op,
                expected,
                found,
            },
        }
    }
}

/// Result type for expression construction
pub type Result<T> = core::result::Result<T, Error>;
