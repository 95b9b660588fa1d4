use super::config::{LOG_RING_CAPACITY, LOG_TEXT_CAPACITY};
use super::level::LogLevel;
use super::log_core::LogCore;
use crate::{kassert, test_case};

/// `pr_*` for a private `LogCore`.
macro_rules! log_to {
    ($log:expr, $level:ident, $($arg:tt)*) => {
        $log.record(LogLevel::$level, module_path!(), format_args!($($arg)*))
    };
}

fn verbose() -> LogCore {
    LogCore::new(LogLevel::Debug, LogLevel::Error)
}

mod ring;
mod sink;
