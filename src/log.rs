// src/log.rs
// Logging shorthands over the `log` facade.
// The library never installs a sink; binaries do (see src/bin/cli.rs).

#[doc(hidden)]
pub use ::log as facade;

/// Target every decoder message is logged under.
pub const TARGET: &str = "timetable";

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::facade::info!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::facade::debug!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::facade::warn!(target: $crate::log::TARGET, $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::facade::error!(target: $crate::log::TARGET, $($arg)*)
    };
}
