//! Collections built on the crate's container contracts.
//!
//! - `binary_heap`: comparator-ordered min-heap
//! - `set`: the `Set` contract and its std adapters

pub mod binary_heap;
pub mod set;

pub use binary_heap::{BinHeap, DrainSorted};
pub use set::Set;
