//! Capabilities the walk borrows from the surrounding kernel.
//!
//! Both are passed to every operation explicitly instead of being reached
//! through globals, so the engine never touches memory it was not handed.

use super::page_table_entry::TrieNode;
use crate::mm::address::{Paddr, Ppn};

/// Hands out physical frames for new interior nodes.
pub trait FrameAllocator {
    /// Reserves a free frame for the caller, or `None` when exhausted.
    ///
    /// The frame should already be zeroed; the walk clears it again before
    /// linking it, so a dirty frame cannot surface stale valid entries.
    fn alloc_frame(&mut self) -> Option<Ppn>;
}

/// Physical-to-virtual view of frames holding trie nodes.
pub trait PhysMemory {
    /// Borrows the node stored at the frame-aligned address `frame`.
    ///
    /// `None` if the address is unaligned or not backed by a frame.
    fn node(&self, frame: Paddr) -> Option<&TrieNode>;

    fn node_mut(&mut self, frame: Paddr) -> Option<&mut TrieNode>;
}

impl<T: FrameAllocator + ?Sized> FrameAllocator for &mut T {
    fn alloc_frame(&mut self) -> Option<Ppn> {
        (**self).alloc_frame()
    }
}

impl<T: PhysMemory + ?Sized> PhysMemory for &mut T {
    fn node(&self, frame: Paddr) -> Option<&TrieNode> {
        (**self).node(frame)
    }

    fn node_mut(&mut self, frame: Paddr) -> Option<&mut TrieNode> {
        (**self).node_mut(frame)
    }
}
