//! Internal logging helpers for structured rowscope events.

/// Single logging target for rowscope.
pub(crate) const LOG_TARGET: &str = "rowscope";

macro_rules! rowscope_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use rowscope_log;
