//! Logging shims over the `log` facade.
//!
//! With the `logging` feature off the macros still type-check their
//! arguments but emit nothing.

macro_rules! rules_warn {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::warn!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! rules_debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}

macro_rules! rules_info {
    ($($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        log::info!($($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)+);
    }};
}
