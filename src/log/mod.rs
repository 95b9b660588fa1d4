//! Kernel-style leveled logging
//!
//! The walk reports through `pr_err!`, `pr_warn!` and `pr_debug!`. Records
//! below the keep threshold are dropped before formatting; the rest land in
//! a bounded ring that a caller drains with [`read_log`]. A library has no
//! console of its own, so the embedder may install a [`ConsoleSink`] for
//! records severe enough to print.

pub mod config;
pub mod entry;
pub mod level;
pub mod log_core;
#[macro_use]
pub mod macros;
mod ring;

#[cfg(test)]
mod tests;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::{ConsoleSink, LogCore};

use config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};

static GLOBAL_LOG: LogCore = LogCore::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL);

#[doc(hidden)]
pub fn log_impl(level: LogLevel, target: &'static str, args: core::fmt::Arguments) {
    GLOBAL_LOG.record(level, target, args);
}

#[doc(hidden)]
#[inline]
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.enabled(level)
}

/// Takes the oldest record from the global log.
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG.pop()
}

pub fn log_len() -> usize {
    GLOBAL_LOG.len()
}

pub fn log_evicted_count() -> usize {
    GLOBAL_LOG.evicted()
}

pub fn set_log_level(level: LogLevel) {
    GLOBAL_LOG.set_level(level);
}

pub fn log_level() -> LogLevel {
    GLOBAL_LOG.level()
}

pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG.set_console_level(level);
}

pub fn set_console_sink(sink: ConsoleSink) {
    GLOBAL_LOG.set_console_sink(Some(sink));
}

pub fn clear_console_sink() {
    GLOBAL_LOG.set_console_sink(None);
}
