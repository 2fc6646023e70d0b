use crate::ColumnKind;

/// Failure to resolve a result kind.
///
/// The promotion engine is pure: the same inputs always produce the same
/// error, so none of these are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    /// The operand kinds belong to domains the operator cannot combine.
    #[error("{op}: cannot combine {left} with {right}")]
    KindMismatch {
        op: &'static str,
        left: ColumnKind,
        right: ColumnKind,
    },

    /// The operator cannot accept an operand of this kind at all.
    #[error("{op}: unsupported operand of kind {kind}")]
    UnsupportedOperand { op: &'static str, kind: ColumnKind },

    /// The operator was given the wrong number of operands.
    #[error("{op}: expected {expected} operand(s), found {found}")]
    Arity {
        op: &'static str,
        expected: usize,
        found: usize,
    },
}
