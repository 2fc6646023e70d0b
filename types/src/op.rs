//! Operator tags.
//!
//! Each tag knows its SQL spelling; the promotion engine keys its tables on
//! these tags and the external compiler reads them back from expression nodes.

use core::fmt;

macro_rules! sql_tag {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $sql:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum $name {
            $($(#[$vmeta])* $variant),*
        }

        impl $name {
            /// SQL keyword or function name.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $sql),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

sql_tag! {
    /// Infix arithmetic (and unary minus).
    pub enum ArithOp {
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        Neg => "NEG",
    }
}

sql_tag! {
    /// Numeric functions.
    pub enum MathFn {
        Abs => "ABS",
        Sign => "SIGN",
        Ceil => "CEIL",
        Floor => "FLOOR",
        Round => "ROUND",
        Sqrt => "SQRT",
        Exp => "EXP",
        Ln => "LN",
        Log2 => "LOG2",
        Log10 => "LOG10",
        Sin => "SIN",
        Cos => "COS",
        Tan => "TAN",
        Asin => "ASIN",
        Acos => "ACOS",
        Atan => "ATAN",
        /// `POWER(base, exponent)`
        Pow => "POWER",
        /// `ATAN2(y, x)`
        Atan2 => "ATAN2",
        /// `LOG(base, value)`
        Log => "LOG",
    }
}

impl MathFn {
    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            MathFn::Pow | MathFn::Atan2 | MathFn::Log => 2,
            _ => 1,
        }
    }

    /// Functions whose result keeps the operand kind (rounding family).
    #[must_use]
    pub const fn is_rounding(&self) -> bool {
        matches!(self, MathFn::Ceil | MathFn::Floor | MathFn::Round)
    }
}

sql_tag! {
    pub enum CmpOp {
        Eq => "=",
        Ne => "<>",
        Lt => "<",
        Lte => "<=",
        Gt => ">",
        Gte => ">=",
    }
}

sql_tag! {
    pub enum LogicOp {
        And => "AND",
        Or => "OR",
    }
}

sql_tag! {
    pub enum AggFn {
        Count => "COUNT",
        Sum => "SUM",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
    }
}

sql_tag! {
    pub enum StringFn {
        Concat => "CONCAT",
        Upper => "UPPER",
        Lower => "LOWER",
        Trim => "TRIM",
        Length => "LENGTH",
    }
}

sql_tag! {
    /// Subquery quantifier for `op ALL|ANY|SOME (subquery)`.
    pub enum Quantifier {
        All => "ALL",
        Any => "ANY",
        Some => "SOME",
    }
}

sql_tag! {
    pub enum Direction {
        Asc => "ASC",
        Desc => "DESC",
    }
}

sql_tag! {
    /// Coarse operator families used for capability checks.
    pub enum OperatorFamily {
        Arithmetic => "arithmetic",
        Math => "math",
        Comparison => "comparison",
        Logical => "logical",
        Pattern => "pattern",
        String => "string",
        NullCheck => "null check",
        Aggregate => "aggregate",
        Cast => "cast",
        Ordering => "ordering",
    }
}

/// Any operator the promotion engine can resolve a result kind for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operator {
    Arith(ArithOp),
    Math(MathFn),
    Cmp(CmpOp),
    Logic(LogicOp),
    Agg(AggFn),
    String(StringFn),
}

impl Operator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Arith(op) => op.as_str(),
            Operator::Math(op) => op.as_str(),
            Operator::Cmp(op) => op.as_str(),
            Operator::Logic(op) => op.as_str(),
            Operator::Agg(op) => op.as_str(),
            Operator::String(op) => op.as_str(),
        }
    }

    #[must_use]
    pub const fn family(&self) -> OperatorFamily {
        match self {
            Operator::Arith(_) => OperatorFamily::Arithmetic,
            Operator::Math(_) => OperatorFamily::Math,
            Operator::Cmp(_) => OperatorFamily::Comparison,
            Operator::Logic(_) => OperatorFamily::Logical,
            Operator::Agg(_) => OperatorFamily::Aggregate,
            Operator::String(_) => OperatorFamily::String,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! impl_from_tag {
    ($($tag:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$tag> for Operator {
                #[inline]
                fn from(op: $tag) -> Self {
                    Operator::$variant(op)
                }
            }
        )*
    };
}

impl_from_tag! {
    ArithOp => Arith,
    MathFn => Math,
    CmpOp => Cmp,
    LogicOp => Logic,
    AggFn => Agg,
    StringFn => String,
}
