//! Frame allocator module
//!
//! A reference implementation of both capabilities the walk needs, for hosts
//! and tests that have no real physical memory to hand out.
//!
//! # Components
//!
//! - [`FrameArena`]: simulated physical memory with a bump-and-recycle
//!   frame allocator

mod frame_allocator;

pub use frame_allocator::FrameArena;
