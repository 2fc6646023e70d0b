//! Host-language literal values.
//!
//! Every Rust value that can appear directly in an expression maps to exactly
//! one natural [`ColumnKind`]. Rust has native unsigned integers, so `u32`
//! participates as `INT UNSIGNED` without any extra tagging.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use compact_str::CompactString;
use rust_decimal::Decimal;
use sqlkind_types::ColumnKind;

/// A literal operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Text(CompactString),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Interval(TimeDelta),
}

impl Literal {
    /// The natural kind of this value.
    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        match self {
            Literal::Bool(_) => ColumnKind::Boolean,
            Literal::I8(_) => ColumnKind::tinyint(),
            Literal::I16(_) => ColumnKind::smallint(),
            Literal::I32(_) => ColumnKind::int(),
            Literal::I64(_) => ColumnKind::bigint(),
            Literal::U8(_) => ColumnKind::tinyint_unsigned(),
            Literal::U16(_) => ColumnKind::smallint_unsigned(),
            Literal::U32(_) => ColumnKind::int_unsigned(),
            Literal::U64(_) => ColumnKind::bigint_unsigned(),
            Literal::F32(_) => ColumnKind::float(),
            Literal::F64(_) => ColumnKind::double(),
            Literal::Decimal(value) => decimal_kind(value),
            Literal::Text(_) => ColumnKind::varchar(),
            Literal::Bytes(_) => ColumnKind::varbinary(),
            Literal::Date(_) => ColumnKind::Date,
            Literal::Time(_) => ColumnKind::Time,
            Literal::DateTime(_) => ColumnKind::DateTime,
            Literal::Interval(_) => ColumnKind::Interval,
        }
    }
}

/// DECIMAL(p, s) just wide enough for `value`.
fn decimal_kind(value: &Decimal) -> ColumnKind {
    let mut mantissa = value.mantissa().unsigned_abs();
    let mut digits: u8 = 1;
    while mantissa >= 10 {
        mantissa /= 10;
        digits += 1;
    }
    // rust_decimal scales never exceed 28
    let scale = u8::try_from(value.scale()).unwrap_or(28);
    ColumnKind::decimal(digits.max(scale + 1), scale)
}

macro_rules! impl_literal_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                #[inline]
                fn from(value: $ty) -> Self {
                    Literal::$variant(value.into())
                }
            }

            impl From<$ty> for crate::expr::Expr {
                #[inline]
                fn from(value: $ty) -> Self {
                    crate::expr::Expr::literal(Literal::from(value))
                }
            }
        )*
    };
}

impl_literal_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    &str => Text,
    String => Text,
    CompactString => Text,
    Vec<u8> => Bytes,
    &[u8] => Bytes,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    TimeDelta => Interval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_kinds() {
        assert_eq!(Literal::from(5i32).kind(), ColumnKind::int());
        assert_eq!(Literal::from(5u32).kind(), ColumnKind::int_unsigned());
        assert_eq!(Literal::from(5u64).kind(), ColumnKind::bigint_unsigned());
        assert_eq!(Literal::from(1.5f32).kind(), ColumnKind::float());
        assert_eq!(Literal::from("x").kind(), ColumnKind::varchar());
        assert_eq!(Literal::from(true).kind(), ColumnKind::Boolean);
        assert_eq!(
            Literal::from(TimeDelta::minutes(5)).kind(),
            ColumnKind::Interval
        );
    }

    #[test]
    fn test_decimal_kind_tracks_digits_and_scale() {
        assert_eq!(
            Literal::from(Decimal::new(12345, 2)).kind(),
            ColumnKind::decimal(5, 2)
        );
        assert_eq!(
            Literal::from(Decimal::new(-7, 0)).kind(),
            ColumnKind::decimal(1, 0)
        );
        assert_eq!(
            Literal::from(Decimal::new(5, 3)).kind(),
            ColumnKind::decimal(4, 3)
        );
    }
}
