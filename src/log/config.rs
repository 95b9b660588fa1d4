//! Logging configuration

use super::level::LogLevel;

/// Records the ring keeps before overwriting the oldest
pub const LOG_RING_CAPACITY: usize = 64;

/// Bytes of message text kept per record
pub const LOG_TEXT_CAPACITY: usize = 120;

/// Records at or above this severity are kept
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warning;

/// Records at or above this severity also go to the console sink
pub const DEFAULT_CONSOLE_LEVEL: LogLevel = LogLevel::Error;
