//! Tracing utilities for expression evaluation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a trace-level event for one CASE evaluation.
///
/// ```ignore
/// rowcase_trace_eval!(branches.len(), matched);
/// ```
#[macro_export]
macro_rules! rowcase_trace_eval {
    ($branches:expr, $matched:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(branches = $branches, matched = $matched, "rowcase.eval");
    };
}

/// Emit a debug-level event for a bulk operation over a record set.
///
/// ```ignore
/// rowcase_trace_bulk!("annotate", records.len());
/// ```
#[macro_export]
macro_rules! rowcase_trace_bulk {
    ($operation:literal, $records:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(operation = $operation, records = $records, "rowcase.bulk");
    };
}
