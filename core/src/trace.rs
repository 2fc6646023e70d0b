//! Tracing hooks for expression construction.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a trace-level event for a freshly built node and its resolved kind.
///
/// ```ignore
/// sqlkind_trace_build!("ADD", &kind);
/// ```
#[macro_export]
macro_rules! sqlkind_trace_build {
    ($tag:expr, $kind:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(node = $tag, kind = %$kind, "sqlkind.build");
    };
}

/// Emit a debug-level event when a builder rejects its operands.
///
/// ```ignore
/// sqlkind_trace_reject!(&err);
/// ```
#[macro_export]
macro_rules! sqlkind_trace_reject {
    ($err:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(error = %$err, "sqlkind.reject");
    };
}

/// Emit a debug-level event when a deferred value is materialized.
#[macro_export]
macro_rules! sqlkind_trace_deferred {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(deferred = $name, "sqlkind.evaluate");
    };
}
