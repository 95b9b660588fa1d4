//! constants fixing the shape of the page table trie
#![allow(unused)]

// about frames
pub const PAGE_SIZE: usize = 4096;
pub const PAGE_OFFSET_BITS: usize = 12;

// about entries and nodes
pub const PTE_BITS: usize = 64;
pub const PTES_PER_NODE: usize = PAGE_SIZE * 8 / PTE_BITS; // 512
pub const SYMBOL_BITS: usize = 9; // log2(PTES_PER_NODE)
pub const SYMBOL_MASK: u64 = (1 << SYMBOL_BITS) - 1;

// about keys
pub const VPN_BITS: usize = 45;
pub const TRIE_LEVELS: usize = VPN_BITS / SYMBOL_BITS; // 5
pub const VPN_MASK: u64 = (1 << VPN_BITS) - 1;

/// Widest frame number a PTE can hold above the offset bits.
pub const PPN_BITS: usize = PTE_BITS - PAGE_OFFSET_BITS; // 52
pub const PPN_MASK: u64 = (1 << PPN_BITS) - 1;

/// Reserved value meaning "absent".
///
/// Passed as the `ppn` of an update it requests deletion; returned by a query
/// it reports a miss. It lies outside [`PPN_MASK`] so no real frame can collide.
pub const NO_MAPPING: u64 = u64::MAX;

const _: () = assert!(PTES_PER_NODE == 1 << SYMBOL_BITS);
const _: () = assert!(TRIE_LEVELS * SYMBOL_BITS == VPN_BITS);

// about the reference frame arena
/// First PPN handed out by [`crate::mm::frame_allocator::FrameArena::with_capacity`].
pub const ARENA_BASE_PPN: u64 = 0x8_0000; // physical 0x8000_0000
