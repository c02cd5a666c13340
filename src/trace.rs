//! Feature-gated structured logging.
//!
//! `trace_event!` forwards to `tracing::debug!` when the `tracing` feature is
//! enabled and expands to nothing otherwise. Solvers emit one event per run
//! (summary fields only), never one per edge.

macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}
