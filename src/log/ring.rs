//! Bounded record storage. When full, a new record evicts the oldest.

use spin::Mutex;

use super::config::LOG_RING_CAPACITY;
use super::entry::LogEntry;

struct Slots {
    records: [LogEntry; LOG_RING_CAPACITY],
    /// index of the oldest record
    head: usize,
    len: usize,
    evicted: usize,
}

pub(super) struct LogRing {
    slots: Mutex<Slots>,
}

impl LogRing {
    pub(super) const fn new() -> Self {
        Self {
            slots: Mutex::new(Slots {
                records: [const { LogEntry::blank() }; LOG_RING_CAPACITY],
                head: 0,
                len: 0,
                evicted: 0,
            }),
        }
    }

    pub(super) fn push(&self, entry: LogEntry) {
        let mut slots = self.slots.lock();
        if slots.len == LOG_RING_CAPACITY {
            slots.head = (slots.head + 1) % LOG_RING_CAPACITY;
            slots.len -= 1;
            slots.evicted += 1;
        }
        let tail = (slots.head + slots.len) % LOG_RING_CAPACITY;
        slots.records[tail] = entry;
        slots.len += 1;
    }

    pub(super) fn pop(&self) -> Option<LogEntry> {
        let mut slots = self.slots.lock();
        if slots.len == 0 {
            return None;
        }
        let entry = slots.records[slots.head];
        slots.head = (slots.head + 1) % LOG_RING_CAPACITY;
        slots.len -= 1;
        Some(entry)
    }

    pub(super) fn len(&self) -> usize {
        self.slots.lock().len
    }

    /// Records overwritten before anyone popped them.
    pub(super) fn evicted(&self) -> usize {
        self.slots.lock().evicted
    }
}
