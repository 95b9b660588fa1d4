//! Address module
//!
//! Strongly typed page numbers and byte addresses for the trie.
//!
//! # Components
//!
//! - [`Paddr`]: physical byte address
//! - [`Vaddr`]: virtual byte address
//! - [`PageNum`]: trait for page numbers
//! - [`Ppn`]: physical page number
//! - [`Vpn`]: virtual page number (the 45-bit trie key)
//!
//! # Operations
//!
//! - [`U64Convert`]: convert between types and `u64`
//! - [`CalcOps`]: arithmetic and bitwise operations
//! - [`AlignOps`]: alignment helpers

mod address;
mod operations;
mod page_num;

pub use address::{Address, Paddr, Vaddr};
pub use operations::{AlignOps, CalcOps, U64Convert};
pub use page_num::{PageNum, Ppn, Vpn};
