use crate::config::{PAGE_OFFSET_BITS, PPN_MASK, PTES_PER_NODE};
use crate::mm::address::{Ppn, U64Convert};

bitflags::bitflags! {
    /// Flag bits in the low 12 bits of an entry.
    ///
    /// Only validity is defined; bits 1-11 are padding left by the offset width.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PteFlags: u64 {
        const VALID = 1 << 0;
    }
}

/*
 * Entry layout:
 * -------------------------------------------
 * | bits  | meaning                         |
 * -------------------------------------------
 * | 0     | VALID                           |
 * | 1-11  | unused (offset width padding)   |
 * | 12-63 | frame number: next node or leaf |
 * -------------------------------------------
 */

const PTE_FLAG_MASK: u64 = (1 << PAGE_OFFSET_BITS) - 1;
const PTE_FRAME_SHIFT: usize = PAGE_OFFSET_BITS;

/// One 64-bit page table entry.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Pte(u64);

impl Pte {
    pub const fn from_bits(bits: u64) -> Self {
        Pte(bits)
    }

    pub const fn bits(&self) -> u64 {
        self.0
    }

    /// The "no child / no mapping" entry.
    pub const fn empty() -> Self {
        Pte(0)
    }

    /// Packs a frame number and the validity bit.
    ///
    /// The frame is shifted above the flag bits and the flag is OR-ed in, so
    /// the result never depends on the low bits of the shifted frame. `frame`
    /// must fit in [`PPN_MASK`]; callers validate it first.
    pub fn encode(frame: Ppn, valid: bool) -> Self {
        debug_assert!(
            frame.as_u64() <= PPN_MASK,
            "frame {:#x} does not fit in an entry",
            frame.as_u64()
        );
        let frame_bits = (frame.as_u64() & PPN_MASK) << PTE_FRAME_SHIFT;
        let mut flags = PteFlags::empty();
        flags.set(PteFlags::VALID, valid);
        Pte(frame_bits | flags.bits())
    }

    /// Entry linking to the next-level node stored in `frame`.
    pub fn new_table(frame: Ppn) -> Self {
        Self::encode(frame, true)
    }

    /// Entry holding the final mapping to `ppn`.
    pub fn new_leaf(ppn: Ppn) -> Self {
        Self::encode(ppn, true)
    }

    /// `decode_validity`: bit 0.
    pub fn is_valid(&self) -> bool {
        self.flags().contains(PteFlags::VALID)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// `decode_frame`: bits 12-63. Only meaningful on a valid entry.
    pub fn frame(&self) -> Ppn {
        Ppn::from_u64(self.0 >> PTE_FRAME_SHIFT)
    }

    pub fn flags(&self) -> PteFlags {
        PteFlags::from_bits_truncate(self.0 & PTE_FLAG_MASK)
    }

    /// Sets bit 0 without touching the frame bits.
    pub fn set_valid(&mut self) {
        self.0 |= PteFlags::VALID.bits();
    }

    /// Clears bit 0 without touching the frame bits.
    pub fn clear_valid(&mut self) {
        self.0 &= !PteFlags::VALID.bits();
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}

/// One frame-sized trie node: 512 entries indexed by a 9-bit symbol.
#[repr(C, align(4096))]
#[derive(Clone)]
pub struct TrieNode {
    entries: [Pte; PTES_PER_NODE],
}

impl TrieNode {
    pub const fn empty() -> Self {
        Self {
            entries: [Pte::empty(); PTES_PER_NODE],
        }
    }

    /// Reads the entry at `symbol`; symbols are always `< 512`.
    pub fn entry(&self, symbol: usize) -> Pte {
        self.entries[symbol]
    }

    pub fn set_entry(&mut self, symbol: usize, pte: Pte) {
        self.entries[symbol] = pte;
    }

    /// Resets every entry to empty.
    pub fn clear(&mut self) {
        self.entries.fill(Pte::empty());
    }

    /// Number of valid entries.
    pub fn valid_entries(&self) -> usize {
        self.entries.iter().filter(|pte| pte.is_valid()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Pte)> + '_ {
        self.entries.iter().copied().enumerate()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl core::fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // only the populated slots are interesting
        f.debug_map()
            .entries(self.iter().filter(|(_, pte)| !pte.is_empty()))
            .finish()
    }
}

const _: () = assert!(core::mem::size_of::<TrieNode>() == crate::config::PAGE_SIZE);
