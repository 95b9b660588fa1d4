//! Page table trie
//!
//! A five-level radix trie keyed by 45-bit virtual page numbers. Each level
//! consumes one 9-bit symbol, each node is one frame of 512 64-bit entries,
//! and interior nodes are allocated the first time an insertion needs them.
#![allow(clippy::module_inception)]
mod level;
mod memory;
mod page_table;
mod page_table_entry;
mod raw;

#[cfg(test)]
mod tests;

pub use level::{TrieLevel, symbol_at, symbols};
pub use memory::{FrameAllocator, PhysMemory};
pub use page_table::{PageTable, UpdateOutcome, node_address};
pub use page_table_entry::{Pte, PteFlags, TrieNode};
pub use raw::{page_table_query, page_table_update};

/// Errors from page table operations
///
/// Every variant is a rejected precondition or a broken collaborator. A
/// missing mapping is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    /// The VPN has bits set above the 45-bit key
    VpnOutOfRange,
    /// The target PPN does not fit in an entry or is the `NO_MAPPING` sentinel
    InvalidFrame,
    /// The root PPN is not a frame the physical memory can map
    InvalidRoot,
    /// A valid interior entry names a frame the physical memory cannot map
    CorruptEntry,
    /// The frame allocator is exhausted
    FrameAllocFailed,
}

impl core::fmt::Display for PagingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            PagingError::VpnOutOfRange => "virtual page number wider than 45 bits",
            PagingError::InvalidFrame => "physical page number not representable",
            PagingError::InvalidRoot => "root frame not mapped",
            PagingError::CorruptEntry => "interior entry points at an unmapped frame",
            PagingError::FrameAllocFailed => "frame allocation failed",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for PagingError {}

/// Result type of paging operations
pub type PagingResult<T> = Result<T, PagingError>;
