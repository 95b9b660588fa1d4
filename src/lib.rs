//! Software-managed page table trie.
//!
//! Translates 45-bit virtual page numbers to physical page numbers through a
//! five-level radix trie whose nodes are physical frames of 512 entries.
//! Interior nodes are allocated lazily on insertion and never reclaimed.
//!
//! # Components
//!
//! - [`config`]: trie shape constants and the `NO_MAPPING` sentinel
//! - [`log`]: kernel-style leveled logging (`pr_*` macros)
//! - [`mm`]: addresses, entries, the walk engine and reference collaborators
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
pub mod log;

pub mod config;
pub mod mm;

#[cfg(test)]
mod test_util;

pub use config::NO_MAPPING;
pub use mm::address::{Paddr, Ppn, Vaddr, Vpn};
pub use mm::address_space::AddressSpace;
pub use mm::frame_allocator::FrameArena;
pub use mm::page_table::{
    FrameAllocator, PageTable, PagingError, PagingResult, PhysMemory, Pte, TrieLevel, TrieNode,
    UpdateOutcome, page_table_query, page_table_update,
};
