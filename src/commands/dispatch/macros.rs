//! Macros for command timing and logging

/// Trace command phases when `--verbose` is set
///
/// Usage:
/// ```ignore
/// trace_command!(ctx, "open_store");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
