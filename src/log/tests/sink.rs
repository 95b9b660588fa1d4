use super::*;
use crate::log::LogEntry;
use core::sync::atomic::{AtomicUsize, Ordering};

static PRINTED: AtomicUsize = AtomicUsize::new(0);

fn count(_entry: &LogEntry) {
    PRINTED.fetch_add(1, Ordering::SeqCst);
}

test_case!(test_sink_sees_only_console_levels, {
    let log = verbose();
    log.set_console_sink(Some(count));
    let before = PRINTED.load(Ordering::SeqCst);

    log_to!(log, Error, "printed");
    log_to!(log, Warning, "kept only");
    kassert!(PRINTED.load(Ordering::SeqCst) == before + 1);

    log.set_console_level(LogLevel::Warning);
    kassert!(log.console_level() == LogLevel::Warning);
    log_to!(log, Warning, "printed now");
    kassert!(PRINTED.load(Ordering::SeqCst) == before + 2);

    log.set_console_sink(None);
    log_to!(log, Error, "no sink");
    kassert!(PRINTED.load(Ordering::SeqCst) == before + 2);
    kassert!(log.len() == 4);
});
