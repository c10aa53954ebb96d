//! # `container` - Generic container contracts
//!
//! Small, dependency-light building blocks for ordered and unordered
//! collections whose order is supplied by the caller.
//!
//! ## Key Features
//!
//! - **Pluggable order**: ordered collections take a [`Comparator`] value
//!   instead of requiring `E: Ord`. Closures, [`Natural`], [`Reversed`],
//!   key projections and float total order are all comparators.
//! - **Binary heap**: [`BinHeap`] is a min-heap over a flat `Vec` with
//!   linear-time bulk initialization and logarithmic push/pop.
//! - **Contracts**: [`Container`] (size and clear) and [`Set`] (membership,
//!   bulk add/remove) let generic code abstract over concrete collections.
//!
//! ## Architecture
//!
//! 1. **Comparators** (`cmp`): the total-order oracle. Three-way results are
//!    `core::cmp::Ordering`; [`cmp::sign`] and [`cmp::from_sign`] convert to
//!    and from the `-1 / 0 / 1` encoding.
//! 2. **Contracts** (`container`, `collections::set`): traits only.
//! 3. **Collections** (`collections`): concrete data structures.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` trace events from bulk heap operations
//!   (rebuilds and clears). Off by default.
//!
//! ## Example
//!
//! ```rust
//! use container::{BinHeap, Container, Reversed, Natural};
//!
//! let mut heap = BinHeap::new(Reversed(Natural));
//! heap.init([2, 9, 4]);
//! heap.push(7);
//!
//! assert_eq!(Container::len(&heap), 4);
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.peek(), Some(&7));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cmp;
pub mod collections;
pub mod container;

pub use cmp::{by_key, total_float, Comparator, Natural, Reversed};
pub use collections::{BinHeap, Set};
pub use container::Container;

// Compile-time layout checks
const _: () = {
    use core::mem;

    // Stateless comparators add nothing to the heap's footprint.
    assert!(mem::size_of::<Natural>() == 0);
    assert!(mem::size_of::<Reversed<Natural>>() == 0);
    assert!(mem::size_of::<BinHeap<u64, Natural>>() == mem::size_of::<Vec<u64>>());
};
