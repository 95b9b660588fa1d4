//! Filtering and storage behind the `pr_*` macros.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use spin::RwLock;

use super::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};
use super::entry::LogEntry;
use super::level::LogLevel;
use super::ring::LogRing;

/// Receives records that pass the console filter.
pub type ConsoleSink = fn(&LogEntry);

/// A self-contained logger: a record ring, two severity thresholds and an
/// optional console sink.
///
/// The macros share one global instance; tests build their own.
pub struct LogCore {
    ring: LogRing,
    keep_level: AtomicU8,
    console_level: AtomicU8,
    sink: RwLock<Option<ConsoleSink>>,
}

impl Default for LogCore {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL)
    }
}

impl LogCore {
    /// ```
    /// use pagewalk::log::{LogCore, LogLevel};
    ///
    /// let log = LogCore::new(LogLevel::Debug, LogLevel::Error);
    /// log.record(LogLevel::Warning, "doc", format_args!("vpn {:#x}", 1u64 << 46));
    /// assert_eq!(log.pop().unwrap().message(), "vpn 0x400000000000");
    /// ```
    pub const fn new(keep_level: LogLevel, console_level: LogLevel) -> Self {
        Self {
            ring: LogRing::new(),
            keep_level: AtomicU8::new(keep_level as u8),
            console_level: AtomicU8::new(console_level as u8),
            sink: RwLock::new(None),
        }
    }

    /// Formats and keeps one record if `level` passes the keep threshold,
    /// and forwards it to the sink if it also passes the console threshold.
    pub fn record(&self, level: LogLevel, target: &'static str, args: fmt::Arguments) {
        if !self.enabled(level) {
            return;
        }
        let entry = LogEntry::format(level, target, args);
        if level as u8 <= self.console_level.load(Ordering::Relaxed) {
            if let Some(sink) = *self.sink.read() {
                sink(&entry);
            }
        }
        self.ring.push(entry);
    }

    /// Whether a record at `level` would be kept.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.keep_level.load(Ordering::Relaxed)
    }

    /// Takes the oldest kept record.
    pub fn pop(&self) -> Option<LogEntry> {
        self.ring.pop()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records lost because the ring was full.
    pub fn evicted(&self) -> usize {
        self.ring.evicted()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.keep_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.keep_level.load(Ordering::Relaxed))
    }

    pub fn set_console_level(&self, level: LogLevel) {
        self.console_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn console_level(&self) -> LogLevel {
        LogLevel::from_u8(self.console_level.load(Ordering::Relaxed))
    }

    /// Installs `sink`, or removes the current one with `None`.
    pub fn set_console_sink(&self, sink: Option<ConsoleSink>) {
        *self.sink.write() = sink;
    }
}
