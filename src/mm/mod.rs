//! Memory management module
//!
//! # Components
//!
//! - [`address`]: address and page number newtypes
//! - [`page_table`]: the trie, its entries and the walk
//! - [`frame_allocator`]: simulated physical memory for hosts without any
//! - [`address_space`]: a page table serialized behind a lock

pub mod address;
pub mod address_space;
pub mod frame_allocator;
pub mod page_table;
