//! `pr_*` logging macros
//!
//! ```
//! use pagewalk::{pr_debug, pr_warn};
//!
//! pr_debug!("linked node at {:#x}", 0x8000_0000u64);
//! pr_warn!("vpn {:#x} out of range", 1u64 << 50);
//! ```
//!
//! Arguments are only formatted when the level is enabled.

#[doc(hidden)]
#[macro_export]
macro_rules! __pr_at {
    ($level:ident, $($arg:tt)*) => {
        if $crate::log::is_level_enabled($crate::log::LogLevel::$level) {
            $crate::log::log_impl(
                $crate::log::LogLevel::$level,
                module_path!(),
                format_args!($($arg)*),
            );
        }
    };
}

/// Logs a failure the walk could not recover from
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)*) => { $crate::__pr_at!(Error, $($arg)*) };
}

/// Logs a rejected request
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)*) => { $crate::__pr_at!(Warning, $($arg)*) };
}

/// Logs tracing detail, dropped unless the level is raised with
/// [`set_log_level`](crate::log::set_log_level)
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)*) => { $crate::__pr_at!(Debug, $($arg)*) };
}
