//! Timing helpers for command dispatch

/// Log elapsed time since process start for a dispatch phase.
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "load_network");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
