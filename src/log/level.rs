/// Severity of a log record. Lower values are more severe.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// The walk could not complete: allocator exhausted or a corrupt entry.
    Error = 0,
    /// A caller passed something the walk refuses to touch.
    Warning = 1,
    /// Node allocation and other tracing.
    Debug = 2,
}

impl LogLevel {
    /// Unknown values are treated as the most verbose level.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Error,
            1 => Self::Warning,
            _ => Self::Debug,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "E",
            LogLevel::Warning => "W",
            LogLevel::Debug => "D",
        }
    }
}
