//! Triage queue for accessibility guidelines.
//!
//! The core of the crate is [`heap::IndexedMinHeap`], a binary min-heap over
//! `(value, priority)` pairs with a value -> slot map, so the priority of a
//! queued value can be changed in O(log n) without a linear search. The rest
//! is plumbing: a reader for guideline files and a small CLI that ranks
//! guidelines by urgency.

pub mod guidelines;
pub mod heap;
pub mod utils;

pub use heap::{HeapError, IndexedMinHeap};
