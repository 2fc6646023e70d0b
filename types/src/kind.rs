//! Column kinds.
//!
//! A [`ColumnKind`] is the static classification of a value: which SQL domain
//! it lives in and, for numbers, its width class and signedness. Kinds are
//! plain `Copy` data so the promotion engine can match on pairs of them.
//!
//! ```text
//! Domain
//! ├── Numeric   TINYINT SMALLINT INT BIGINT   (× signed/unsigned)
//! │             FLOAT DOUBLE DECIMAL(p,s)     (× signed/unsigned)
//! ├── Textual   CHAR VARCHAR CLOB
//! ├── Enum      ENUM (textual backing)
//! ├── Temporal  DATE TIME DATETIME INTERVAL
//! ├── Boolean   BOOLEAN
//! └── Binary    BINARY VARBINARY BLOB
//! ```

use core::fmt;

use crate::{Dialect, OperatorFamily};

/// Largest DECIMAL precision any supported dialect accepts.
pub const MAX_DECIMAL_PRECISION: u8 = 65;

/// Precision used by [`ColumnKind::decimal_default`].
pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;

/// Signedness tag carried by numeric kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sign {
    #[default]
    Signed,
    Unsigned,
}

impl Sign {
    /// Unsigned only when both sides are unsigned.
    #[inline]
    #[must_use]
    pub const fn both(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Unsigned, Sign::Unsigned) => Sign::Unsigned,
            _ => Sign::Signed,
        }
    }
}

/// Primitive SQL domain. Every kind belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    Numeric,
    Textual,
    Temporal,
    Boolean,
    Binary,
    Enum,
}

impl Domain {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Domain::Numeric => "numeric",
            Domain::Textual => "textual",
            Domain::Temporal => "temporal",
            Domain::Boolean => "boolean",
            Domain::Binary => "binary",
            Domain::Enum => "enum",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete kind of a column or expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColumnKind {
    /// 8-bit integer
    TinyInt(Sign),
    /// 16-bit integer
    SmallInt(Sign),
    /// 32-bit integer
    Int(Sign),
    /// 64-bit integer
    BigInt(Sign),
    /// Single precision floating point
    Float(Sign),
    /// Double precision floating point
    Double(Sign),
    /// Fixed point
    Decimal { precision: u8, scale: u8, sign: Sign },
    /// CHAR / VARCHAR
    Char { varying: bool },
    Clob,
    /// Enumeration backed by text
    Enum,
    Date,
    Time,
    DateTime,
    Interval,
    Boolean,
    /// BINARY / VARBINARY
    Binary { varying: bool },
    Blob,
}

macro_rules! signed_constructors {
    ($($variant:ident => $name:ident),* $(,)?) => {
        paste::paste! {
            impl ColumnKind {
                $(
                    #[doc = concat!("Signed `", stringify!($variant), "`.")]
                    #[inline]
                    #[must_use]
                    pub const fn $name() -> Self {
                        ColumnKind::$variant(Sign::Signed)
                    }

                    #[doc = concat!("Unsigned `", stringify!($variant), "`.")]
                    #[inline]
                    #[must_use]
                    pub const fn [<$name _unsigned>]() -> Self {
                        ColumnKind::$variant(Sign::Unsigned)
                    }
                )*
            }
        }
    };
}

signed_constructors! {
    TinyInt => tinyint,
    SmallInt => smallint,
    Int => int,
    BigInt => bigint,
    Float => float,
    Double => double,
}

impl ColumnKind {
    #[inline]
    #[must_use]
    pub const fn decimal(precision: u8, scale: u8) -> Self {
        ColumnKind::Decimal {
            precision,
            scale,
            sign: Sign::Signed,
        }
    }

    #[inline]
    #[must_use]
    pub const fn decimal_unsigned(precision: u8, scale: u8) -> Self {
        ColumnKind::Decimal {
            precision,
            scale,
            sign: Sign::Unsigned,
        }
    }

    /// `DECIMAL(10, 0)`
    #[inline]
    #[must_use]
    pub const fn decimal_default() -> Self {
        Self::decimal(DEFAULT_DECIMAL_PRECISION, 0)
    }

    #[inline]
    #[must_use]
    pub const fn char() -> Self {
        ColumnKind::Char { varying: false }
    }

    #[inline]
    #[must_use]
    pub const fn varchar() -> Self {
        ColumnKind::Char { varying: true }
    }

    #[inline]
    #[must_use]
    pub const fn binary() -> Self {
        ColumnKind::Binary { varying: false }
    }

    #[inline]
    #[must_use]
    pub const fn varbinary() -> Self {
        ColumnKind::Binary { varying: true }
    }

    /// The domain this kind belongs to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            ColumnKind::TinyInt(_)
            | ColumnKind::SmallInt(_)
            | ColumnKind::Int(_)
            | ColumnKind::BigInt(_)
            | ColumnKind::Float(_)
            | ColumnKind::Double(_)
            | ColumnKind::Decimal { .. } => Domain::Numeric,
            ColumnKind::Char { .. } | ColumnKind::Clob => Domain::Textual,
            ColumnKind::Enum => Domain::Enum,
            ColumnKind::Date | ColumnKind::Time | ColumnKind::DateTime | ColumnKind::Interval => {
                Domain::Temporal
            }
            ColumnKind::Boolean => Domain::Boolean,
            ColumnKind::Binary { .. } | ColumnKind::Blob => Domain::Binary,
        }
    }

    /// Signedness of a numeric kind, `None` for every other domain.
    #[must_use]
    pub const fn sign(&self) -> Option<Sign> {
        match *self {
            ColumnKind::TinyInt(sign)
            | ColumnKind::SmallInt(sign)
            | ColumnKind::Int(sign)
            | ColumnKind::BigInt(sign)
            | ColumnKind::Float(sign)
            | ColumnKind::Double(sign)
            | ColumnKind::Decimal { sign, .. } => Some(sign),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(self.sign(), Some(Sign::Unsigned))
    }

    /// Re-tag a numeric kind with `sign`. Other kinds are returned unchanged.
    #[must_use]
    pub const fn with_sign(self, sign: Sign) -> Self {
        match self {
            ColumnKind::TinyInt(_) => ColumnKind::TinyInt(sign),
            ColumnKind::SmallInt(_) => ColumnKind::SmallInt(sign),
            ColumnKind::Int(_) => ColumnKind::Int(sign),
            ColumnKind::BigInt(_) => ColumnKind::BigInt(sign),
            ColumnKind::Float(_) => ColumnKind::Float(sign),
            ColumnKind::Double(_) => ColumnKind::Double(sign),
            ColumnKind::Decimal {
                precision, scale, ..
            } => ColumnKind::Decimal {
                precision,
                scale,
                sign,
            },
            other => other,
        }
    }

    #[inline]
    #[must_use]
    pub const fn unsigned(self) -> Self {
        self.with_sign(Sign::Unsigned)
    }

    #[inline]
    #[must_use]
    pub const fn signed(self) -> Self {
        self.with_sign(Sign::Signed)
    }

    /// Storage width in bits for integer kinds.
    #[must_use]
    pub const fn bits(&self) -> Option<u8> {
        match self {
            ColumnKind::TinyInt(_) => Some(8),
            ColumnKind::SmallInt(_) => Some(16),
            ColumnKind::Int(_) => Some(32),
            ColumnKind::BigInt(_) => Some(64),
            _ => None,
        }
    }

    /// Position on the integer widening ladder (TINYINT = 0 .. BIGINT = 3).
    #[must_use]
    pub(crate) const fn integer_rank(&self) -> Option<u8> {
        match self {
            ColumnKind::TinyInt(_) => Some(0),
            ColumnKind::SmallInt(_) => Some(1),
            ColumnKind::Int(_) => Some(2),
            ColumnKind::BigInt(_) => Some(3),
            _ => None,
        }
    }

    pub(crate) const fn from_integer_rank(rank: u8, sign: Sign) -> Option<Self> {
        match rank {
            0 => Some(ColumnKind::TinyInt(sign)),
            1 => Some(ColumnKind::SmallInt(sign)),
            2 => Some(ColumnKind::Int(sign)),
            3 => Some(ColumnKind::BigInt(sign)),
            _ => None,
        }
    }

    /// Decimal digits needed to hold every value of an integer kind.
    pub(crate) const fn integer_digits(&self) -> Option<u8> {
        match self {
            ColumnKind::TinyInt(_) => Some(3),
            ColumnKind::SmallInt(_) => Some(5),
            ColumnKind::Int(_) => Some(10),
            ColumnKind::BigInt(Sign::Signed) => Some(19),
            ColumnKind::BigInt(Sign::Unsigned) => Some(20),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.domain(), Domain::Numeric)
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.integer_rank().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self, ColumnKind::Float(_) | ColumnKind::Double(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, ColumnKind::Decimal { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(self.domain(), Domain::Textual)
    }

    /// Textual or enum: the kinds string operators and LIKE accept.
    #[inline]
    #[must_use]
    pub const fn is_text_like(&self) -> bool {
        matches!(self.domain(), Domain::Textual | Domain::Enum)
    }

    #[inline]
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self.domain(), Domain::Temporal)
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, ColumnKind::Boolean)
    }

    #[inline]
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self.domain(), Domain::Binary)
    }

    /// Whether operators of `family` can accept this kind as an operand.
    ///
    /// ```
    /// use sqlkind_types::{ColumnKind, OperatorFamily};
    ///
    /// assert!(ColumnKind::int().supports(OperatorFamily::Math));
    /// assert!(!ColumnKind::varchar().supports(OperatorFamily::Math));
    /// assert!(ColumnKind::Enum.supports(OperatorFamily::Pattern));
    /// ```
    #[must_use]
    pub const fn supports(&self, family: OperatorFamily) -> bool {
        match family {
            OperatorFamily::Arithmetic => self.is_numeric() || self.is_temporal(),
            OperatorFamily::Math => self.is_numeric(),
            OperatorFamily::Pattern | OperatorFamily::String => self.is_text_like(),
            OperatorFamily::Logical => self.is_boolean(),
            OperatorFamily::Comparison
            | OperatorFamily::NullCheck
            | OperatorFamily::Aggregate
            | OperatorFamily::Cast
            | OperatorFamily::Ordering => true,
        }
    }

    /// Type name for this kind in `dialect`, suitable as a `CAST` target.
    ///
    /// ```
    /// use sqlkind_types::{ColumnKind, Dialect};
    ///
    /// let kind = ColumnKind::int_unsigned();
    /// assert_eq!(kind.sql_name(Dialect::MySQL).to_string(), "UNSIGNED");
    /// assert_eq!(kind.sql_name(Dialect::PostgreSQL).to_string(), "BIGINT");
    /// ```
    #[inline]
    #[must_use]
    pub const fn sql_name(self, dialect: Dialect) -> SqlName {
        SqlName {
            kind: self,
            dialect,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::TinyInt(_) => "TINYINT",
            ColumnKind::SmallInt(_) => "SMALLINT",
            ColumnKind::Int(_) => "INT",
            ColumnKind::BigInt(_) => "BIGINT",
            ColumnKind::Float(_) => "FLOAT",
            ColumnKind::Double(_) => "DOUBLE",
            ColumnKind::Decimal {
                precision, scale, ..
            } => {
                write!(f, "DECIMAL({precision},{scale})")?;
                ""
            }
            ColumnKind::Char { varying: false } => "CHAR",
            ColumnKind::Char { varying: true } => "VARCHAR",
            ColumnKind::Clob => "CLOB",
            ColumnKind::Enum => "ENUM",
            ColumnKind::Date => "DATE",
            ColumnKind::Time => "TIME",
            ColumnKind::DateTime => "DATETIME",
            ColumnKind::Interval => "INTERVAL",
            ColumnKind::Boolean => "BOOLEAN",
            ColumnKind::Binary { varying: false } => "BINARY",
            ColumnKind::Binary { varying: true } => "VARBINARY",
            ColumnKind::Blob => "BLOB",
        };
        f.write_str(name)?;
        if self.is_unsigned() {
            f.write_str(" UNSIGNED")?;
        }
        Ok(())
    }
}

/// Dialect spelling of a kind, produced by [`ColumnKind::sql_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlName {
    kind: ColumnKind,
    dialect: Dialect,
}

impl SqlName {
    fn fmt_sqlite(kind: ColumnKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match kind.domain() {
            Domain::Numeric if kind.is_integer() => "INTEGER",
            Domain::Numeric if kind.is_floating() => "REAL",
            Domain::Numeric => "NUMERIC",
            Domain::Boolean => "INTEGER",
            Domain::Binary => "BLOB",
            Domain::Textual | Domain::Enum | Domain::Temporal => "TEXT",
        })
    }

    fn fmt_postgres(kind: ColumnKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No unsigned integers: widen to the next type that holds the range.
        let name = match kind {
            ColumnKind::TinyInt(_) | ColumnKind::SmallInt(Sign::Signed) => "SMALLINT",
            ColumnKind::SmallInt(Sign::Unsigned) | ColumnKind::Int(Sign::Signed) => "INTEGER",
            ColumnKind::Int(Sign::Unsigned) | ColumnKind::BigInt(Sign::Signed) => "BIGINT",
            ColumnKind::BigInt(Sign::Unsigned) => "NUMERIC(20)",
            ColumnKind::Float(_) => "REAL",
            ColumnKind::Double(_) => "DOUBLE PRECISION",
            ColumnKind::Decimal {
                precision, scale, ..
            } => return write!(f, "NUMERIC({precision}, {scale})"),
            ColumnKind::Char { varying: false } => "CHAR",
            ColumnKind::Char { varying: true } => "VARCHAR",
            ColumnKind::Clob | ColumnKind::Enum => "TEXT",
            ColumnKind::Date => "DATE",
            ColumnKind::Time => "TIME",
            ColumnKind::DateTime => "TIMESTAMP",
            ColumnKind::Interval => "INTERVAL",
            ColumnKind::Boolean => "BOOLEAN",
            ColumnKind::Binary { .. } | ColumnKind::Blob => "BYTEA",
        };
        f.write_str(name)
    }

    fn fmt_mysql(kind: ColumnKind, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match kind {
            ColumnKind::TinyInt(sign)
            | ColumnKind::SmallInt(sign)
            | ColumnKind::Int(sign)
            | ColumnKind::BigInt(sign) => match sign {
                Sign::Signed => "SIGNED",
                Sign::Unsigned => "UNSIGNED",
            },
            ColumnKind::Float(_) => "FLOAT",
            ColumnKind::Double(_) => "DOUBLE",
            ColumnKind::Decimal {
                precision, scale, ..
            } => return write!(f, "DECIMAL({precision}, {scale})"),
            ColumnKind::Char { .. } | ColumnKind::Clob | ColumnKind::Enum => "CHAR",
            ColumnKind::Date => "DATE",
            ColumnKind::Time => "TIME",
            ColumnKind::DateTime => "DATETIME",
            ColumnKind::Interval => "CHAR",
            ColumnKind::Boolean => "SIGNED",
            ColumnKind::Binary { .. } | ColumnKind::Blob => "BINARY",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SqlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dialect {
            Dialect::SQLite => Self::fmt_sqlite(self.kind, f),
            Dialect::PostgreSQL => Self::fmt_postgres(self.kind, f),
            Dialect::MySQL => Self::fmt_mysql(self.kind, f),
        }
    }
}
