//! The page walk
//!
//! Update and query share one fixed-depth loop: resolve the current node,
//! take the level's symbol, read the entry, and either descend through it or
//! stop. Five levels, no recursion, at most four frame allocations per call.

use alloc::vec::Vec;

use super::level::{TrieLevel, symbol_at};
use super::memory::{FrameAllocator, PhysMemory};
use super::page_table_entry::{Pte, TrieNode};
use super::{PagingError, PagingResult};
use crate::config::{NO_MAPPING, SYMBOL_BITS};
use crate::mm::address::{Address, Paddr, PageNum, Ppn, U64Convert, Vaddr, Vpn};

/// How an update ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The leaf now maps the requested frame.
    Mapped {
        /// Interior nodes allocated on the way down (0..=4)
        new_nodes: usize,
        /// Frame the VPN mapped to before, if any
        replaced: Option<Ppn>,
    },
    /// The mapping to this frame was removed.
    Unmapped(Ppn),
    /// Deletion of a VPN that had no mapping; nothing changed.
    Absent,
}

/// Physical address of the node visited at `level`.
///
/// The root comes straight from the table's root PPN; every deeper node is
/// the frame named by the entry read one level up.
pub fn node_address(level: TrieLevel, root: Ppn, parent: Pte) -> Paddr {
    if level.is_root() {
        root.start_addr()
    } else {
        parent.frame().start_addr()
    }
}

/// A page table, identified by the PPN of its root node.
///
/// The root frame belongs to the caller: it must already be allocated and
/// zeroed in the memory passed to each operation. The table holds no
/// borrowed state, so it is `Copy` and cheap to pass around; all access to
/// the trie goes through the [`PhysMemory`] handed to each call.
///
/// Operations assume exclusive access to the trie for their duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTable {
    root: Ppn,
}

impl PageTable {
    pub const fn from_ppn(root: Ppn) -> Self {
        Self { root }
    }

    pub const fn root_ppn(&self) -> Ppn {
        self.root
    }

    /// Inserts, overwrites or deletes the mapping of `vpn`.
    ///
    /// `Some(ppn)` maps `vpn` to `ppn`, allocating any missing interior nodes
    /// and replacing a previous mapping. `None` deletes the mapping; if an
    /// interior entry on the path is already empty the walk stops there and
    /// reports [`UpdateOutcome::Absent`]. Frames are never freed, even when a
    /// deletion leaves an interior node without children.
    ///
    /// # Errors
    ///
    /// Out-of-range `vpn` or `ppn` and an out-of-range or unmapped root are
    /// rejected before anything is written. [`PagingError::FrameAllocFailed`] can leave nodes
    /// allocated for the upper levels; they are linked and empty.
    pub fn update<M>(&self, mem: &mut M, vpn: Vpn, target: Option<Ppn>) -> PagingResult<UpdateOutcome>
    where
        M: PhysMemory + FrameAllocator + ?Sized,
    {
        check_root(self.root)?;
        check_vpn(vpn)?;
        if let Some(ppn) = target {
            check_frame(ppn)?;
        }

        let mut parent = Pte::empty();
        let mut new_nodes = 0;
        for level in TrieLevel::interior() {
            let node_paddr = node_address(level, self.root, parent);
            let symbol = symbol_at(vpn, level);
            let pte = resolve_mut(mem, level, node_paddr)?.entry(symbol);

            parent = if pte.is_valid() {
                pte
            } else if target.is_none() {
                return Ok(UpdateOutcome::Absent);
            } else {
                let child = alloc_node(mem, level)?;
                let link = Pte::new_table(child);
                resolve_mut(mem, level, node_paddr)?.set_entry(symbol, link);
                new_nodes += 1;
                link
            };
        }

        let leaf_paddr = node_address(TrieLevel::LEAF, self.root, parent);
        let symbol = symbol_at(vpn, TrieLevel::LEAF);
        let leaf = resolve_mut(mem, TrieLevel::LEAF, leaf_paddr)?;
        let old = leaf.entry(symbol);
        let previous = old.is_valid().then(|| old.frame());

        match target {
            Some(ppn) => {
                leaf.set_entry(symbol, Pte::new_leaf(ppn));
                Ok(UpdateOutcome::Mapped {
                    new_nodes,
                    replaced: previous,
                })
            }
            None => {
                leaf.set_entry(symbol, Pte::empty());
                Ok(previous.map_or(UpdateOutcome::Absent, UpdateOutcome::Unmapped))
            }
        }
    }

    /// Maps `vpn` to `ppn`.
    pub fn map<M>(&self, mem: &mut M, vpn: Vpn, ppn: Ppn) -> PagingResult<UpdateOutcome>
    where
        M: PhysMemory + FrameAllocator + ?Sized,
    {
        self.update(mem, vpn, Some(ppn))
    }

    /// Removes the mapping of `vpn`, if there is one.
    pub fn unmap<M>(&self, mem: &mut M, vpn: Vpn) -> PagingResult<UpdateOutcome>
    where
        M: PhysMemory + FrameAllocator + ?Sized,
    {
        self.update(mem, vpn, None)
    }

    /// Looks up the frame `vpn` maps to.
    ///
    /// Read-only. Stops at the first empty entry, so levels 0-3 act as
    /// existence gates and a miss costs at most five reads.
    pub fn query<M>(&self, mem: &M, vpn: Vpn) -> PagingResult<Option<Ppn>>
    where
        M: PhysMemory + ?Sized,
    {
        check_root(self.root)?;
        check_vpn(vpn)?;

        let mut pte = Pte::empty();
        for level in TrieLevel::all() {
            let node = resolve(mem, level, node_address(level, self.root, pte))?;
            pte = node.entry(symbol_at(vpn, level));
            if !pte.is_valid() {
                return Ok(None);
            }
        }
        Ok(Some(pte.frame()))
    }

    /// Translates a virtual byte address, keeping the page offset.
    pub fn translate<M>(&self, mem: &M, vaddr: Vaddr) -> PagingResult<Option<Paddr>>
    where
        M: PhysMemory + ?Sized,
    {
        let vpn = Vpn::from_addr_floor(vaddr);
        let ppn = self.query(mem, vpn)?;
        Ok(ppn.map(|ppn| ppn.start_addr().add_by(vaddr.page_offset())))
    }

    /// The valid entry for `vpn` at `level`, or `None` if it or any entry
    /// above it is empty.
    pub fn entry_at<M>(&self, mem: &M, vpn: Vpn, level: TrieLevel) -> PagingResult<Option<Pte>>
    where
        M: PhysMemory + ?Sized,
    {
        check_root(self.root)?;
        check_vpn(vpn)?;

        let mut pte = Pte::empty();
        for current in TrieLevel::all().take_while(|current| *current <= level) {
            let node = resolve(mem, current, node_address(current, self.root, pte))?;
            pte = node.entry(symbol_at(vpn, current));
            if !pte.is_valid() {
                return Ok(None);
            }
        }
        Ok(Some(pte))
    }

    /// Every live mapping, in ascending VPN order.
    pub fn mappings<M>(&self, mem: &M) -> PagingResult<Vec<(Vpn, Ppn)>>
    where
        M: PhysMemory + ?Sized,
    {
        let mut out = Vec::new();
        self.visit(mem, |level, prefix, pte| {
            if level.is_leaf() {
                out.push((Vpn(prefix), pte.frame()));
            }
        })?;
        Ok(out)
    }

    /// Frames holding nodes below the root, tagged with the level they serve.
    ///
    /// Includes nodes left empty by deletions, since those are never freed.
    pub fn interior_frames<M>(&self, mem: &M) -> PagingResult<Vec<(TrieLevel, Ppn)>>
    where
        M: PhysMemory + ?Sized,
    {
        let mut out = Vec::new();
        self.visit(mem, |level, _, pte| {
            if let Some(child) = level.next() {
                out.push((child, pte.frame()));
            }
        })?;
        Ok(out)
    }

    /// Depth-first walk over every valid entry.
    ///
    /// `f` gets the level of the entry, the VPN prefix it covers (the symbols
    /// from the root down to and including this one) and the entry itself.
    /// Uses an explicit stack bounded by the trie depth.
    fn visit<M, F>(&self, mem: &M, mut f: F) -> PagingResult<()>
    where
        M: PhysMemory + ?Sized,
        F: FnMut(TrieLevel, u64, Pte),
    {
        check_root(self.root)?;
        // (level, node address, prefix above this node, next symbol to scan)
        let mut stack: Vec<(TrieLevel, Paddr, u64, usize)> =
            alloc::vec![(TrieLevel::ROOT, self.root.start_addr(), 0, 0)];

        while let Some((level, node_paddr, prefix, start)) = stack.pop() {
            let node: &TrieNode = resolve(mem, level, node_paddr)?;
            let found = node.iter().skip(start).find(|(_, pte)| pte.is_valid());
            let Some((symbol, pte)) = found else {
                continue;
            };

            let key = (prefix << SYMBOL_BITS) | symbol as u64;
            f(level, key, pte);

            stack.push((level, node_paddr, prefix, symbol + 1));
            if let Some(child) = level.next() {
                stack.push((child, pte.frame().start_addr(), key, 0));
            }
        }
        Ok(())
    }
}

/// A root wider than an entry's frame field would alias another frame once
/// shifted into an address.
fn check_root(root: Ppn) -> PagingResult<()> {
    if !root.in_range() {
        pr_warn!("rejecting root {:#x}: not representable as a frame", root.as_u64());
        return Err(PagingError::InvalidRoot);
    }
    Ok(())
}

fn check_vpn(vpn: Vpn) -> PagingResult<()> {
    if !vpn.in_range() {
        pr_warn!("rejecting vpn {:#x}: wider than 45 bits", vpn.as_u64());
        return Err(PagingError::VpnOutOfRange);
    }
    Ok(())
}

fn check_frame(ppn: Ppn) -> PagingResult<()> {
    if ppn.as_u64() == NO_MAPPING || !ppn.in_range() {
        pr_warn!("rejecting ppn {:#x}: not representable in an entry", ppn.as_u64());
        return Err(PagingError::InvalidFrame);
    }
    Ok(())
}

fn lookup_failure(level: TrieLevel, node_paddr: Paddr) -> PagingError {
    if level.is_root() {
        pr_warn!("root frame {:?} is not mapped", node_paddr);
        PagingError::InvalidRoot
    } else {
        pr_err!("{} node {:?} is not mapped", level, node_paddr);
        PagingError::CorruptEntry
    }
}

fn resolve<M>(mem: &M, level: TrieLevel, node_paddr: Paddr) -> PagingResult<&TrieNode>
where
    M: PhysMemory + ?Sized,
{
    mem.node(node_paddr)
        .ok_or_else(|| lookup_failure(level, node_paddr))
}

fn resolve_mut<M>(mem: &mut M, level: TrieLevel, node_paddr: Paddr) -> PagingResult<&mut TrieNode>
where
    M: PhysMemory + ?Sized,
{
    mem.node_mut(node_paddr)
        .ok_or_else(|| lookup_failure(level, node_paddr))
}

/// Allocates and clears the node that will hang below an entry at `level`.
fn alloc_node<M>(mem: &mut M, level: TrieLevel) -> PagingResult<Ppn>
where
    M: PhysMemory + FrameAllocator + ?Sized,
{
    let Some(frame) = mem.alloc_frame() else {
        pr_err!("out of frames for a node below {}", level);
        return Err(PagingError::FrameAllocFailed);
    };
    if !frame.in_range() {
        pr_err!("allocator returned unencodable frame {:#x}", frame.as_u64());
        return Err(PagingError::InvalidFrame);
    }

    match mem.node_mut(frame.start_addr()) {
        Some(node) => node.clear(),
        None => {
            pr_err!("allocator returned unmapped frame {:?}", frame);
            return Err(PagingError::CorruptEntry);
        }
    }

    pr_debug!("linked new node {:?} below {}", frame, level);
    Ok(frame)
}
