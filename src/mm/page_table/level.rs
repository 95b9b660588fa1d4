//! Trie levels and symbol extraction.

use crate::config::{SYMBOL_BITS, SYMBOL_MASK, TRIE_LEVELS};
use crate::mm::address::{U64Convert, Vpn};

/// A depth in the trie: 0 is the root, 4 the leaf.
///
/// Only valid levels can be constructed, so a walk can never index past the
/// leaf or compute a symbol for a level that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrieLevel(u8);

impl TrieLevel {
    pub const ROOT: Self = TrieLevel(0);
    pub const LEAF: Self = TrieLevel(TRIE_LEVELS as u8 - 1);

    pub const fn new(level: usize) -> Option<Self> {
        if level < TRIE_LEVELS {
            Some(TrieLevel(level as u8))
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_root(self) -> bool {
        self.0 == Self::ROOT.0
    }

    pub const fn is_leaf(self) -> bool {
        self.0 == Self::LEAF.0
    }

    /// The level below, or `None` at the leaf.
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 as usize + 1)
    }

    /// Root to leaf.
    pub fn all() -> impl Iterator<Item = TrieLevel> {
        (0..TRIE_LEVELS as u8).map(TrieLevel)
    }

    /// Root to the level just above the leaf.
    pub fn interior() -> impl Iterator<Item = TrieLevel> {
        (0..Self::LEAF.0).map(TrieLevel)
    }

    /// Right shift that brings this level's symbol to the low bits.
    const fn shift(self) -> usize {
        (TRIE_LEVELS - 1 - self.0 as usize) * SYMBOL_BITS
    }
}

impl core::fmt::Display for TrieLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// The 9-bit slice of `vpn` that indexes the node at `level`.
///
/// Level 0 takes bits 36-44, level 4 bits 0-8.
pub fn symbol_at(vpn: Vpn, level: TrieLevel) -> usize {
    ((vpn.as_u64() >> level.shift()) & SYMBOL_MASK) as usize
}

/// All five symbols of `vpn`, root first.
pub fn symbols(vpn: Vpn) -> [usize; TRIE_LEVELS] {
    let mut out = [0; TRIE_LEVELS];
    for level in TrieLevel::all() {
        out[level.index()] = symbol_at(vpn, level);
    }
    out
}
