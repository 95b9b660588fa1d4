use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use hashbrown::HashMap;

use crate::config::{ARENA_BASE_PPN, PPN_MASK};
use crate::mm::address::{AlignOps, Paddr, PageNum, Ppn};
use crate::mm::page_table::{FrameAllocator, PhysMemory, TrieNode};

/// Simulated physical memory over the PPN window `[start, end)`.
///
/// Frames are handed out from a bump pointer, falling back to a stack of
/// recycled frames. Freed frames directly below the bump pointer are merged
/// back into it. Every frame is zeroed when allocated and only allocated
/// frames are addressable.
pub struct FrameArena {
    start: Ppn,
    end: Ppn,
    cur: Ppn,
    /// recycled frames, kept sorted
    recycled: Vec<Ppn>,
    frames: HashMap<Ppn, Box<TrieNode>>,
    total_allocations: usize,
}

impl FrameArena {
    /// Creates an arena managing `[start, end)`.
    ///
    /// The window is clipped to frame numbers an entry can encode.
    pub fn new(start: Ppn, end: Ppn) -> Self {
        let limit = Ppn(PPN_MASK + 1);
        let end = end.min(limit);
        let start = start.min(end);
        FrameArena {
            start,
            end,
            cur: start,
            recycled: Vec::new(),
            frames: HashMap::new(),
            total_allocations: 0,
        }
    }

    /// An arena of `frames` frames starting at [`ARENA_BASE_PPN`].
    pub fn with_capacity(frames: usize) -> Self {
        let start = Ppn(ARENA_BASE_PPN);
        Self::new(start, start + frames as u64)
    }

    pub fn alloc_frame(&mut self) -> Option<Ppn> {
        let ppn = if let Some(ppn) = self.recycled.pop() {
            ppn
        } else if self.cur < self.end {
            let ppn = self.cur;
            self.cur.step();
            ppn
        } else {
            return None;
        };

        self.frames.insert(ppn, Box::new(TrieNode::empty()));
        self.total_allocations += 1;
        Some(ppn)
    }

    /// Returns `ppn` to the arena; its contents are discarded.
    ///
    /// Returns `false` if `ppn` was not allocated.
    pub fn dealloc_frame(&mut self, ppn: Ppn) -> bool {
        if self.frames.remove(&ppn).is_none() {
            return false;
        }

        self.recycled.push(ppn);
        self.recycled.sort_unstable();

        // recycled frames right below the bump pointer fold back into it
        while let Some(&top) = self.recycled.last() {
            if top + 1 == self.cur {
                self.cur = top;
                self.recycled.pop();
            } else {
                break;
            }
        }
        true
    }

    pub fn is_allocated(&self, ppn: Ppn) -> bool {
        self.frames.contains_key(&ppn)
    }

    pub fn frames_in_use(&self) -> usize {
        self.frames.len()
    }

    /// Successful allocations over the arena's lifetime.
    pub fn total_allocations(&self) -> usize {
        self.total_allocations
    }

    /// Frames that can still be allocated.
    pub fn remaining(&self) -> usize {
        (self.end - self.cur) as usize + self.recycled.len()
    }

    pub fn start_ppn(&self) -> Ppn {
        self.start
    }

    pub fn end_ppn(&self) -> Ppn {
        self.end
    }
}

impl FrameAllocator for FrameArena {
    fn alloc_frame(&mut self) -> Option<Ppn> {
        FrameArena::alloc_frame(self)
    }
}

impl PhysMemory for FrameArena {
    fn node(&self, frame: Paddr) -> Option<&TrieNode> {
        if !frame.is_page_aligned() {
            return None;
        }
        self.frames.get(&Ppn::from_addr_floor(frame)).map(Box::as_ref)
    }

    fn node_mut(&mut self, frame: Paddr) -> Option<&mut TrieNode> {
        if !frame.is_page_aligned() {
            return None;
        }
        self.frames
            .get_mut(&Ppn::from_addr_floor(frame))
            .map(Box::as_mut)
    }
}

impl fmt::Debug for FrameArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameArena")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("cur", &self.cur)
            .field("recycled", &self.recycled.len())
            .field("in_use", &self.frames.len())
            .finish()
    }
}
