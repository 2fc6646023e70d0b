//! Result-kind promotion.
//!
//! Every function here is pure: the result depends only on the operator and
//! the operand kinds. The rules are written as `match` tables over kind pairs
//! rather than one function per combination.
//!
//! # Numeric widening
//!
//! | left                | right                  | result                      |
//! |---------------------|------------------------|-----------------------------|
//! | DECIMAL(p1,s1)      | DECIMAL(p2,s2)         | DECIMAL(max p, max s)       |
//! | DECIMAL(p,s)        | integer / float        | DECIMAL(p', s)              |
//! | DOUBLE              | non-decimal            | DOUBLE                      |
//! | FLOAT               | FLOAT, 8/16-bit int    | FLOAT                       |
//! | FLOAT               | 32/64-bit int          | DOUBLE                      |
//! | int signed          | int signed             | wider, signed               |
//! | int unsigned        | int unsigned           | wider, unsigned             |
//! | int signed (w1)     | int unsigned (w2)      | signed max(w1, next(w2))    |
//! | any signed int      | BIGINT UNSIGNED        | DECIMAL(20,0)               |
//!
//! A result is unsigned only when every operand is unsigned.

use core::cmp::max;

use crate::kind::MAX_DECIMAL_PRECISION;
use crate::{
    AggFn, ArithOp, CmpOp, ColumnKind, Domain, LogicOp, MathFn, Operator, PromotionError, Sign,
    StringFn,
};

type Result<T> = core::result::Result<T, PromotionError>;

/// Precision of the DECIMAL fallback for integers wider than any signed kind.
const UNSIGNED_BIGINT_DIGITS: u8 = 20;

/// Precision used for SUM/AVG over fixed point and BIGINT inputs.
const AGGREGATE_DECIMAL_PRECISION: u8 = 38;

/// Minimum scale of AVG over fixed point.
const AVG_MIN_SCALE: u8 = 4;

/// Resolve the result kind of `op` applied to `operands`.
///
/// This is the single dispatch entry point; it validates arity and forwards
/// to the family specific rules below.
///
/// ```
/// use sqlkind_types::{ArithOp, ColumnKind, promote};
///
/// let kind = promote(ArithOp::Add, &[ColumnKind::int(), ColumnKind::int_unsigned()]);
/// assert_eq!(kind, Ok(ColumnKind::bigint()));
/// ```
pub fn promote(op: impl Into<Operator>, operands: &[ColumnKind]) -> Result<ColumnKind> {
    let op = op.into();
    match op {
        Operator::Arith(ArithOp::Neg) => {
            let [kind] = exact::<1>(op, operands)?;
            negate(kind)
        }
        Operator::Arith(arith) => {
            let [left, right] = exact::<2>(op, operands)?;
            arithmetic(arith, left, right)
        }
        Operator::Math(func) if func.arity() == 2 => {
            let [left, right] = exact::<2>(op, operands)?;
            binary_math(func, left, right)
        }
        Operator::Math(func) => {
            let [kind] = exact::<1>(op, operands)?;
            unary_math(func, kind)
        }
        Operator::Cmp(cmp) => {
            let [left, right] = exact::<2>(op, operands)?;
            comparison(cmp, left, right)
        }
        Operator::Logic(logic) => logical(logic, operands),
        Operator::Agg(agg) => {
            let [kind] = exact::<1>(op, operands)?;
            aggregate(agg, kind)
        }
        Operator::String(StringFn::Concat) => concat(operands),
        Operator::String(func) => {
            let [kind] = exact::<1>(op, operands)?;
            string_fn(func, kind)
        }
    }
}

fn exact<const N: usize>(op: Operator, operands: &[ColumnKind]) -> Result<[ColumnKind; N]> {
    <[ColumnKind; N]>::try_from(operands).map_err(|_| PromotionError::Arity {
        op: op.as_str(),
        expected: N,
        found: operands.len(),
    })
}

/// Domain compatibility gate for comparisons, assignments and unification.
///
/// - numeric with numeric, boolean with boolean, binary with binary
/// - textual and enum with each other
/// - DATE with DATETIME, TIME with TIME, INTERVAL with INTERVAL
pub fn compatible(left: ColumnKind, right: ColumnKind) -> bool {
    use ColumnKind::{Date, DateTime, Interval, Time};

    match (left.domain(), right.domain()) {
        (Domain::Numeric, Domain::Numeric)
        | (Domain::Boolean, Domain::Boolean)
        | (Domain::Binary, Domain::Binary)
        | (Domain::Textual | Domain::Enum, Domain::Textual | Domain::Enum) => true,
        (Domain::Temporal, Domain::Temporal) => matches!(
            (left, right),
            (Date | DateTime, Date | DateTime) | (Time, Time) | (Interval, Interval)
        ),
        _ => false,
    }
}

/// Common numeric kind of two numeric operands.
pub fn numeric(op: &'static str, left: ColumnKind, right: ColumnKind) -> Result<ColumnKind> {
    if !left.is_numeric() || !right.is_numeric() {
        return Err(PromotionError::KindMismatch { op, left, right });
    }
    Ok(widen(left, right))
}

/// Widening for two kinds already known to be numeric.
fn widen(left: ColumnKind, right: ColumnKind) -> ColumnKind {
    use ColumnKind::{Decimal, Double, Float};

    let sign = sign_of(left).both(sign_of(right));
    match (left, right) {
        (
            Decimal {
                precision: p1,
                scale: s1,
                ..
            },
            Decimal {
                precision: p2,
                scale: s2,
                ..
            },
        ) => {
            // Keep the integer digits of the wider side as well as the finer scale.
            let scale = max(s1, s2);
            let digits = max(p1.saturating_sub(s1), p2.saturating_sub(s2));
            decimal(digits.saturating_add(scale), scale, sign)
        }
        (
            Decimal {
                precision, scale, ..
            },
            other,
        )
        | (
            other,
            Decimal {
                precision, scale, ..
            },
        ) => {
            // Integers need room for their digits left of the point.
            let needed = other.integer_digits().map_or(precision, |d| {
                max(precision, scale.saturating_add(d))
            });
            decimal(needed, scale, sign)
        }
        (Double(_), _) | (_, Double(_)) => Double(sign),
        (Float(_), other) | (other, Float(_)) => match other.bits() {
            Some(bits) if bits > 16 => Double(sign),
            _ => Float(sign),
        },
        _ => widen_integers(left, right),
    }
}

fn widen_integers(left: ColumnKind, right: ColumnKind) -> ColumnKind {
    let (Some(lr), Some(rr)) = (left.integer_rank(), right.integer_rank()) else {
        return left;
    };
    match (left.is_unsigned(), right.is_unsigned()) {
        (false, false) => integer(max(lr, rr), Sign::Signed),
        (true, true) => integer(max(lr, rr), Sign::Unsigned),
        (false, true) => mixed_sign(lr, rr),
        (true, false) => mixed_sign(rr, lr),
    }
}

/// Signed rank `signed` combined with unsigned rank `unsigned`.
///
/// The unsigned range only fits a strictly wider signed kind; past BIGINT
/// there is none, so the result falls back to an exact DECIMAL.
fn mixed_sign(signed: u8, unsigned: u8) -> ColumnKind {
    let needed = unsigned + 1;
    match ColumnKind::from_integer_rank(max(signed, needed), Sign::Signed) {
        Some(kind) => kind,
        None => decimal(UNSIGNED_BIGINT_DIGITS, 0, Sign::Signed),
    }
}

fn integer(rank: u8, sign: Sign) -> ColumnKind {
    ColumnKind::from_integer_rank(rank, sign).unwrap_or(ColumnKind::BigInt(sign))
}

fn decimal(precision: u8, scale: u8, sign: Sign) -> ColumnKind {
    let precision = precision.clamp(1, MAX_DECIMAL_PRECISION);
    ColumnKind::Decimal {
        precision,
        scale: scale.min(precision),
        sign,
    }
}

fn sign_of(kind: ColumnKind) -> Sign {
    kind.sign().unwrap_or(Sign::Signed)
}

/// Binary arithmetic: numeric widening plus temporal/interval arithmetic.
pub fn arithmetic(op: ArithOp, left: ColumnKind, right: ColumnKind) -> Result<ColumnKind> {
    use ColumnKind::{Date, DateTime, Interval, Time};

    if left.is_numeric() && right.is_numeric() {
        return match op {
            ArithOp::Neg => Err(PromotionError::Arity {
                op: op.as_str(),
                expected: 1,
                found: 2,
            }),
            _ => Ok(widen(left, right)),
        };
    }

    let temporal = match (op, left, right) {
        (ArithOp::Add, t @ (Date | Time | DateTime), Interval)
        | (ArithOp::Add, Interval, t @ (Date | Time | DateTime))
        | (ArithOp::Sub, t @ (Date | Time | DateTime), Interval) => Some(t),
        (ArithOp::Sub, Date | DateTime, Date | DateTime)
        | (ArithOp::Sub, Time, Time)
        | (ArithOp::Add | ArithOp::Sub, Interval, Interval) => Some(Interval),
        _ => None,
    };

    temporal.ok_or(PromotionError::KindMismatch {
        op: op.as_str(),
        left,
        right,
    })
}

/// Unary minus. Unsigned integers move to the next signed width.
pub fn negate(kind: ColumnKind) -> Result<ColumnKind> {
    match kind {
        ColumnKind::Interval => Ok(kind),
        k if k.is_integer() && k.is_unsigned() => {
            Ok(mixed_sign(0, k.integer_rank().unwrap_or(3)))
        }
        k if k.is_numeric() => Ok(k.signed()),
        k => Err(PromotionError::UnsupportedOperand {
            op: ArithOp::Neg.as_str(),
            kind: k,
        }),
    }
}

/// Lift a numeric kind into the non-integer-closed result of a
/// transcendental function.
fn lift(kind: ColumnKind, sign: Sign) -> ColumnKind {
    match kind {
        ColumnKind::TinyInt(_) | ColumnKind::SmallInt(_) | ColumnKind::Float(_) => {
            ColumnKind::Float(sign)
        }
        ColumnKind::Int(_) | ColumnKind::BigInt(_) | ColumnKind::Double(_) => {
            ColumnKind::Double(sign)
        }
        other => other.with_sign(sign),
    }
}

/// One-argument numeric functions.
///
/// Rounding functions keep the operand kind; everything else is lifted:
/// 8/16-bit integers to FLOAT, 32/64-bit integers to DOUBLE, DECIMAL stays
/// DECIMAL. `ABS` keeps the operand's signedness, the rest are signed.
pub fn unary_math(func: MathFn, kind: ColumnKind) -> Result<ColumnKind> {
    if !kind.is_numeric() {
        return Err(PromotionError::UnsupportedOperand {
            op: func.as_str(),
            kind,
        });
    }
    Ok(match func {
        MathFn::Ceil | MathFn::Floor => kind,
        MathFn::Round => round(kind, None),
        MathFn::Abs => lift(kind, sign_of(kind)),
        _ => lift(kind, Sign::Signed),
    })
}

/// `ROUND(x [, scale])`. Only DECIMAL changes: its scale becomes `scale`
/// (0 when absent), and a larger scale widens the precision to match.
pub fn round(kind: ColumnKind, scale: Option<u8>) -> ColumnKind {
    match kind {
        ColumnKind::Decimal {
            precision,
            scale: current,
            sign,
        } => {
            let scale = scale.unwrap_or(0);
            let grown = precision.saturating_add(scale.saturating_sub(current));
            decimal(grown, scale, sign)
        }
        other => other,
    }
}

/// Two-argument numeric functions (`POWER`, `ATAN2`, `LOG`).
pub fn binary_math(func: MathFn, left: ColumnKind, right: ColumnKind) -> Result<ColumnKind> {
    for kind in [left, right] {
        if !kind.is_numeric() {
            return Err(PromotionError::UnsupportedOperand {
                op: func.as_str(),
                kind,
            });
        }
    }
    Ok(lift(widen(left, right), Sign::Signed))
}

/// Comparisons always produce BOOLEAN once the operands are compatible.
pub fn comparison(op: CmpOp, left: ColumnKind, right: ColumnKind) -> Result<ColumnKind> {
    if compatible(left, right) {
        Ok(ColumnKind::Boolean)
    } else {
        Err(PromotionError::KindMismatch {
            op: op.as_str(),
            left,
            right,
        })
    }
}

/// AND / OR over two or more BOOLEAN operands.
pub fn logical(op: LogicOp, operands: &[ColumnKind]) -> Result<ColumnKind> {
    if operands.len() < 2 {
        return Err(PromotionError::Arity {
            op: op.as_str(),
            expected: 2,
            found: operands.len(),
        });
    }
    match operands.iter().find(|kind| !kind.is_boolean()) {
        Some(&kind) => Err(PromotionError::UnsupportedOperand {
            op: op.as_str(),
            kind,
        }),
        None => Ok(ColumnKind::Boolean),
    }
}

/// CONCAT: enum operands are promoted to text; any CLOB makes the result CLOB.
pub fn concat(operands: &[ColumnKind]) -> Result<ColumnKind> {
    let op = StringFn::Concat.as_str();
    if operands.is_empty() {
        return Err(PromotionError::Arity {
            op,
            expected: 1,
            found: 0,
        });
    }
    let mut result = ColumnKind::varchar();
    for &kind in operands {
        if !kind.is_text_like() {
            return Err(PromotionError::UnsupportedOperand { op, kind });
        }
        if kind == ColumnKind::Clob {
            result = ColumnKind::Clob;
        }
    }
    Ok(result)
}

/// Single-argument string functions.
pub fn string_fn(func: StringFn, kind: ColumnKind) -> Result<ColumnKind> {
    match func {
        StringFn::Concat => concat(&[kind]),
        StringFn::Length if kind.is_text_like() || kind.is_binary() => Ok(ColumnKind::int()),
        StringFn::Upper | StringFn::Lower | StringFn::Trim if kind.is_text_like() => {
            Ok(match kind {
                ColumnKind::Enum => ColumnKind::varchar(),
                other => other,
            })
        }
        _ => Err(PromotionError::UnsupportedOperand {
            op: func.as_str(),
            kind,
        }),
    }
}

/// Aggregate result kinds.
///
/// - `COUNT` is always BIGINT.
/// - `SUM` widens integers to BIGINT (BIGINT itself to DECIMAL(38,0)), floats
///   to DOUBLE and fixed point to DECIMAL(38, s).
/// - `AVG` is DOUBLE except over fixed point, where the scale is at least 4.
/// - `MIN`/`MAX` keep the operand kind.
pub fn aggregate(func: AggFn, kind: ColumnKind) -> Result<ColumnKind> {
    let sign = sign_of(kind);
    match func {
        AggFn::Count => Ok(ColumnKind::bigint()),
        AggFn::Min | AggFn::Max => Ok(kind),
        AggFn::Sum | AggFn::Avg if !kind.is_numeric() => Err(PromotionError::UnsupportedOperand {
            op: func.as_str(),
            kind,
        }),
        AggFn::Sum => Ok(match kind {
            ColumnKind::BigInt(_) => decimal(AGGREGATE_DECIMAL_PRECISION, 0, sign),
            ColumnKind::Decimal {
                precision, scale, ..
            } => decimal(max(precision, AGGREGATE_DECIMAL_PRECISION), scale, sign),
            k if k.is_integer() => ColumnKind::BigInt(sign),
            _ => ColumnKind::Double(sign),
        }),
        AggFn::Avg => Ok(match kind {
            ColumnKind::Decimal {
                precision, scale, ..
            } => decimal(
                max(precision, AGGREGATE_DECIMAL_PRECISION),
                max(scale, AVG_MIN_SCALE),
                sign,
            ),
            _ => ColumnKind::Double(sign),
        }),
    }
}

/// Common kind of two branches (CASE results, COALESCE arguments).
///
/// Numeric pairs widen; text-like pairs meet at VARCHAR (CLOB wins); DATE
/// and DATETIME meet at DATETIME; identical kinds are kept.
pub fn unify(op: &'static str, left: ColumnKind, right: ColumnKind) -> Result<ColumnKind> {
    use ColumnKind::{Clob, Date, DateTime};

    if left == right {
        return Ok(left);
    }
    match (left, right) {
        (l, r) if l.is_numeric() && r.is_numeric() => Ok(widen(l, r)),
        (Clob, r) | (r, Clob) if r.is_text_like() => Ok(Clob),
        (l, r) if l.is_text_like() && r.is_text_like() => Ok(ColumnKind::varchar()),
        (Date, DateTime) | (DateTime, Date) => Ok(DateTime),
        (l, r) if l.is_binary() && r.is_binary() => Ok(ColumnKind::Blob),
        _ => Err(PromotionError::KindMismatch { op, left, right }),
    }
}

/// Fold [`unify`] over a sequence. Returns `None` for an empty sequence.
pub fn unify_all(
    op: &'static str,
    kinds: impl IntoIterator<Item = ColumnKind>,
) -> Result<Option<ColumnKind>> {
    let mut acc: Option<ColumnKind> = None;
    for kind in kinds {
        acc = Some(match acc {
            None => kind,
            Some(prev) => unify(op, prev, kind)?,
        });
    }
    Ok(acc)
}
