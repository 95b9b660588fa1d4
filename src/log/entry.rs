use core::fmt;

use super::config::LOG_TEXT_CAPACITY;
use super::level::LogLevel;

/// A formatted log record with its text stored inline.
///
/// Text past [`LOG_TEXT_CAPACITY`] bytes is cut at the last whole character.
#[derive(Clone, Copy)]
pub struct LogEntry {
    level: LogLevel,
    target: &'static str,
    len: usize,
    truncated: bool,
    text: [u8; LOG_TEXT_CAPACITY],
}

impl LogEntry {
    pub(super) const fn blank() -> Self {
        Self {
            level: LogLevel::Debug,
            target: "",
            len: 0,
            truncated: false,
            text: [0; LOG_TEXT_CAPACITY],
        }
    }

    /// Formats `args` into a new record.
    pub fn format(level: LogLevel, target: &'static str, args: fmt::Arguments) -> Self {
        let mut entry = Self::blank();
        entry.level = level;
        entry.target = target;
        // truncation is not an error, so the result carries nothing
        let _ = fmt::write(&mut entry, args);
        entry
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Module path of the `pr_*` call that produced the record.
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn message(&self) -> &str {
        core::str::from_utf8(&self.text[..self.len]).unwrap_or_default()
    }

    /// Whether the message was cut short.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Write for LogEntry {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut take = s.len().min(LOG_TEXT_CAPACITY - self.len);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.truncated |= take < s.len();
        self.text[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEntry")
            .field("level", &self.level)
            .field("target", &self.target)
            .field("message", &self.message())
            .finish()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.level.tag(), self.target, self.message())
    }
}
