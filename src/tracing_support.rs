//! Internal tracing shims.
//!
//! With the `tracing` feature these forward to the `tracing` crate; without
//! it they expand to nothing, so call sites need no `cfg` attributes.

/// Guard returned by [`trace_span!`] when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[cfg_attr(not(feature = "set"), allow(dead_code))]
#[must_use]
pub(crate) struct NoopSpan;

/// Enters a trace-level span for the rest of the enclosing scope.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($($argument:tt)*) => {
        tracing::trace_span!($($argument)*).entered()
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($($argument:tt)*) => {
        $crate::tracing_support::NoopSpan
    };
}

/// Emits a trace-level event.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($argument:tt)*) => {
        tracing::trace!($($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($argument:tt)*) => {};
}
