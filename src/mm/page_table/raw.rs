//! Raw-integer entry points using the `NO_MAPPING` sentinel.
//!
//! These mirror the classic kernel interface where a page table is just the
//! root PPN and "absent" is a reserved value, for callers that store PPNs as
//! plain integers.

use super::memory::{FrameAllocator, PhysMemory};
use super::page_table::PageTable;
use super::PagingResult;
use crate::config::NO_MAPPING;
use crate::mm::address::{Ppn, U64Convert, Vpn};

/// Maps `vpn` to `ppn` in the table rooted at `pt`, or deletes the mapping
/// when `ppn == NO_MAPPING`.
///
/// Deleting an absent mapping is a successful no-op.
pub fn page_table_update<M>(mem: &mut M, pt: u64, vpn: u64, ppn: u64) -> PagingResult<()>
where
    M: PhysMemory + FrameAllocator + ?Sized,
{
    let target = (ppn != NO_MAPPING).then_some(Ppn(ppn));
    PageTable::from_ppn(Ppn(pt))
        .update(mem, Vpn(vpn), target)
        .map(|_| ())
}

/// The PPN `vpn` maps to in the table rooted at `pt`, or `NO_MAPPING`.
pub fn page_table_query<M>(mem: &M, pt: u64, vpn: u64) -> PagingResult<u64>
where
    M: PhysMemory + ?Sized,
{
    let ppn = PageTable::from_ppn(Ppn(pt)).query(mem, Vpn(vpn))?;
    Ok(ppn.map_or(NO_MAPPING, |ppn| ppn.as_u64()))
}
