//! Values computed when a statement is compiled rather than when it is built.
//!
//! A [`Deferred`] is a named producer with a fixed kind. Placing one in an
//! expression only records the handle; the producer runs each time a compiler
//! calls [`Deferred::evaluate`], once per occurrence it materializes.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use sqlkind_types::ColumnKind;

use crate::literal::Literal;
use crate::sqlkind_trace_deferred;

#[derive(Clone)]
enum Producer {
    Static(fn() -> Literal),
    Shared(Arc<dyn Fn() -> Literal + Send + Sync>),
}

/// A lazily evaluated value of a known kind.
#[derive(Clone)]
pub struct Deferred {
    name: &'static str,
    kind: ColumnKind,
    producer: Producer,
}

impl Deferred {
    /// A deferred value backed by a plain function. Usable in `static`s.
    #[must_use]
    pub const fn new(name: &'static str, kind: ColumnKind, producer: fn() -> Literal) -> Self {
        Self {
            name,
            kind,
            producer: Producer::Static(producer),
        }
    }

    /// A deferred value backed by a closure.
    pub fn from_fn<F>(name: &'static str, kind: ColumnKind, producer: F) -> Self
    where
        F: Fn() -> Literal + Send + Sync + 'static,
    {
        Self {
            name,
            kind,
            producer: Producer::Shared(Arc::new(producer)),
        }
    }

    /// SQL name the compiler can emit instead of evaluating, e.g. `NOW`.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Run the producer. Every call runs it again; results are not cached.
    pub fn evaluate(&self) -> Literal {
        sqlkind_trace_deferred!(self.name);
        match &self.producer {
            Producer::Static(producer) => producer(),
            Producer::Shared(producer) => producer(),
        }
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Producers are opaque, so two handles are equal when name and kind agree.
impl PartialEq for Deferred {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

// =============================================================================
// Built-in Values
// =============================================================================

/// Current timestamp (UTC).
pub static NOW: Deferred = Deferred::new("NOW", ColumnKind::DateTime, || {
    Literal::DateTime(Utc::now().naive_utc())
});

/// Current date (UTC).
pub static CURRENT_DATE: Deferred = Deferred::new("CURRENT_DATE", ColumnKind::Date, || {
    Literal::Date(Utc::now().date_naive())
});

/// Current time of day (UTC).
pub static CURRENT_TIME: Deferred = Deferred::new("CURRENT_TIME", ColumnKind::Time, || {
    Literal::Time(Utc::now().time())
});

pub static PI: Deferred = Deferred::new("PI", ColumnKind::double(), || {
    Literal::F64(std::f64::consts::PI)
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_static_handles_have_fixed_kinds() {
        assert_eq!(NOW.kind(), ColumnKind::DateTime);
        assert_eq!(CURRENT_DATE.kind(), ColumnKind::Date);
        assert_eq!(CURRENT_TIME.kind(), ColumnKind::Time);
        assert_eq!(PI.kind(), ColumnKind::double());
        assert_eq!(PI.evaluate(), Literal::F64(std::f64::consts::PI));
    }

    #[test]
    fn test_evaluate_runs_producer_every_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let value = Deferred::from_fn("SEQ", ColumnKind::bigint(), move || {
            Literal::I64(counter.fetch_add(1, Ordering::SeqCst) as i64)
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let copy = value.clone();
        assert_eq!(value.evaluate(), Literal::I64(0));
        assert_eq!(copy.evaluate(), Literal::I64(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_now_is_datetime() {
        assert!(matches!(NOW.evaluate(), Literal::DateTime(_)));
        assert!(matches!(CURRENT_DATE.evaluate(), Literal::Date(_)));
    }
}
