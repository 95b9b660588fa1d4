//! A page table bundled with its physical memory behind a spin lock.
//!
//! The walk itself takes no locks and assumes exclusive access for the
//! duration of each call. [`AddressSpace`] provides that exclusion so a
//! table can be shared between contexts.

use spin::Mutex;

use crate::mm::address::{Paddr, PageNum, Ppn, Vaddr, Vpn};
use crate::mm::page_table::{
    FrameAllocator, PageTable, PagingError, PagingResult, PhysMemory, UpdateOutcome,
};

pub struct AddressSpace<M> {
    table: PageTable,
    mem: Mutex<M>,
}

impl<M> AddressSpace<M>
where
    M: PhysMemory + FrameAllocator,
{
    /// Wraps an existing root. The root frame must be allocated and zeroed
    /// in `mem`.
    pub fn new(root: Ppn, mem: M) -> Self {
        Self {
            table: PageTable::from_ppn(root),
            mem: Mutex::new(mem),
        }
    }

    /// Allocates and clears a root frame from `mem` itself.
    pub fn with_fresh_root(mut mem: M) -> PagingResult<Self> {
        let root = mem.alloc_frame().ok_or_else(|| {
            pr_err!("no frame left for a page table root");
            PagingError::FrameAllocFailed
        })?;
        mem.node_mut(root.start_addr())
            .ok_or(PagingError::InvalidRoot)?
            .clear();
        pr_debug!("new address space rooted at {:?}", root);
        Ok(Self::new(root, mem))
    }

    pub fn root_ppn(&self) -> Ppn {
        self.table.root_ppn()
    }

    pub fn page_table(&self) -> PageTable {
        self.table
    }

    /// See [`PageTable::update`].
    pub fn update(&self, vpn: Vpn, target: Option<Ppn>) -> PagingResult<UpdateOutcome> {
        let mut mem = self.mem.lock();
        self.table.update(&mut *mem, vpn, target)
    }

    pub fn map(&self, vpn: Vpn, ppn: Ppn) -> PagingResult<UpdateOutcome> {
        self.update(vpn, Some(ppn))
    }

    pub fn unmap(&self, vpn: Vpn) -> PagingResult<UpdateOutcome> {
        self.update(vpn, None)
    }

    /// See [`PageTable::query`].
    pub fn query(&self, vpn: Vpn) -> PagingResult<Option<Ppn>> {
        let mem = self.mem.lock();
        self.table.query(&*mem, vpn)
    }

    pub fn translate(&self, vaddr: Vaddr) -> PagingResult<Option<Paddr>> {
        let mem = self.mem.lock();
        self.table.translate(&*mem, vaddr)
    }

    /// Runs `f` with the lock held and the memory borrowed mutably.
    pub fn with_memory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut M) -> R,
    {
        let mut guard = self.mem.lock();
        f(&mut guard)
    }

    /// Consumes the space, handing back the memory.
    pub fn into_inner(self) -> M {
        self.mem.into_inner()
    }
}

#[cfg(test)]
mod address_space_tests {
    use super::*;
    use crate::mm::frame_allocator::FrameArena;
    use crate::{kassert, test_case};
    use alloc::sync::Arc;
    use std::thread;

    test_case!(test_fresh_root_is_allocated, {
        let space = AddressSpace::with_fresh_root(FrameArena::with_capacity(8)).unwrap();
        let root = space.root_ppn();
        kassert!(space.with_memory(|mem| mem.is_allocated(root)));
        kassert!(space.query(Vpn(0)) == Ok(None));
    });

    test_case!(test_fresh_root_fails_on_empty_arena, {
        let result = AddressSpace::with_fresh_root(FrameArena::with_capacity(0));
        kassert!(matches!(result, Err(PagingError::FrameAllocFailed)));
    });

    test_case!(test_update_and_query_through_lock, {
        let mut arena = FrameArena::with_capacity(16);
        let root = arena.alloc_frame().unwrap();
        let space = AddressSpace::new(root, arena);

        let outcome = space.map(Vpn(0x1234), Ppn(0x99)).unwrap();
        kassert!(
            outcome
                == UpdateOutcome::Mapped {
                    new_nodes: 4,
                    replaced: None
                }
        );
        kassert!(space.query(Vpn(0x1234)) == Ok(Some(Ppn(0x99))));
        kassert!(space.translate(Vaddr(0x123_4abc)) == Ok(Some(Paddr(0x99abc))));

        kassert!(space.unmap(Vpn(0x1234)) == Ok(UpdateOutcome::Unmapped(Ppn(0x99))));
        kassert!(space.query(Vpn(0x1234)) == Ok(None));
        kassert!(space.with_memory(|mem| mem.frames_in_use()) == 5);
    });

    test_case!(test_concurrent_mappers_do_not_interfere, {
        let space = Arc::new(AddressSpace::with_fresh_root(FrameArena::with_capacity(256)).unwrap());

        let handles: std::vec::Vec<_> = (0..4u64)
            .map(|t| {
                let space = Arc::clone(&space);
                thread::spawn(move || {
                    for i in 0..32u64 {
                        let vpn = Vpn((t << 36) | i);
                        space.map(vpn, Ppn(t * 100 + i)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for t in 0..4u64 {
            for i in 0..32u64 {
                kassert!(space.query(Vpn((t << 36) | i)) == Ok(Some(Ppn(t * 100 + i))));
            }
        }
    });
}
