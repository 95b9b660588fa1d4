use super::*;
use crate::config::{NO_MAPPING, PTES_PER_NODE};
use crate::mm::address::{Paddr, PageNum, Ppn, Vaddr, Vpn};
use crate::mm::frame_allocator::FrameArena;
use crate::{kassert, test_case};

/// An arena of `frames` frames with a table root already carved out of it.
fn fresh_table(frames: usize) -> (FrameArena, PageTable) {
    let mut arena = FrameArena::with_capacity(frames);
    let root = arena.alloc_frame().unwrap();
    (arena, PageTable::from_ppn(root))
}

/// Builds a VPN from its five symbols, root first.
fn vpn_of(symbols: [u64; 5]) -> Vpn {
    Vpn(symbols.iter().fold(0, |acc, s| (acc << 9) | s))
}

/// Hands out frames whose every entry looks valid.
struct DirtyArena(FrameArena);

impl FrameAllocator for DirtyArena {
    fn alloc_frame(&mut self) -> Option<Ppn> {
        let ppn = self.0.alloc_frame()?;
        let node = self.0.node_mut(ppn.start_addr())?;
        for symbol in 0..PTES_PER_NODE {
            node.set_entry(symbol, Pte::new_leaf(Ppn(0xdead)));
        }
        Some(ppn)
    }
}

impl PhysMemory for DirtyArena {
    fn node(&self, frame: Paddr) -> Option<&TrieNode> {
        self.0.node(frame)
    }

    fn node_mut(&mut self, frame: Paddr) -> Option<&mut TrieNode> {
        self.0.node_mut(frame)
    }
}
