//! `BinHeap` — a min-heap ordered by an injected comparator.
//!
//! The tree is stored as a flat `Vec` using the usual complete binary tree
//! encoding: the children of index `i` live at `2i + 1` and `2i + 2`. The
//! element at index 0 is always the minimum according to the comparator.
//!
//! Because the order comes from a [`Comparator`] value rather than an `Ord`
//! bound, the same element type can be heaped in several orders, and a
//! max-heap is just a min-heap over [`Reversed`](crate::cmp::Reversed).

use crate::cmp::{Comparator, Natural};
use crate::container::Container;
use core::fmt;
use core::iter::FusedIterator;
use serde::ser::{Serialize, Serializer};
use std::collections::TryReserveError;

/// Index of the left child of `i`, or `None` if it does not fit in `usize`.
#[inline]
fn left_child(i: usize) -> Option<usize> {
    i.checked_mul(2)?.checked_add(1)
}

/// A priority queue that always yields its smallest element first.
///
/// "Smallest" is decided by the comparator `C`. Equal elements are returned
/// in no particular order.
///
/// # Examples
///
/// ```rust
/// use container::collections::BinHeap;
///
/// let mut heap = BinHeap::new(|a: &i32, b: &i32| a.cmp(b));
/// heap.init([5, 3, 8, 1]);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// ```
#[derive(Clone)]
pub struct BinHeap<E, C> {
    elems: Vec<E>,
    cmp: C,
}

impl<E, C: Comparator<E>> BinHeap<E, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            elems: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Turns `vec` into a heap in place, in linear time.
    pub fn from_vec(vec: Vec<E>, cmp: C) -> Self {
        let mut heap = Self { elems: vec, cmp };
        heap.rebuild();
        heap
    }

    /// Replaces the contents of the heap with `elems`.
    ///
    /// Previous contents are dropped. The new elements are collected into a
    /// fresh buffer and heapified bottom-up in linear time.
    pub fn init<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.elems = elems.into_iter().collect();
        self.rebuild();
    }

    /// Pushes an element onto the heap.
    pub fn push(&mut self, elem: E) {
        let pos = self.elems.len();
        self.elems.push(elem);
        self.sift_up(pos);
    }

    /// Removes and returns the smallest element, or `None` if the heap is
    /// empty. An empty heap is left untouched.
    pub fn pop(&mut self) -> Option<E> {
        let last = self.elems.len().checked_sub(1)?;
        self.elems.swap(0, last);
        let min = self.elems.pop();
        self.sift_down_range(0, last);
        min
    }

    /// Pushes `elem` and then pops the smallest element.
    ///
    /// Faster than `push` followed by `pop`: at most one sift-down runs, and
    /// none at all when `elem` is not greater than the current minimum.
    pub fn push_pop(&mut self, elem: E) -> E {
        let root_is_smaller = matches!(self.elems.first(), Some(root) if self.cmp.less(root, &elem));
        if !root_is_smaller {
            return elem;
        }
        let min = core::mem::replace(&mut self.elems[0], elem);
        let end = self.elems.len();
        self.sift_down_range(0, end);
        min
    }

    /// Consumes the heap and returns its elements sorted in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut end = self.elems.len();
        while end > 1 {
            end -= 1;
            // The minimum of the remaining heap lands at `end`, which leaves
            // the buffer in descending order.
            self.elems.swap(0, end);
            self.sift_down_range(0, end);
        }
        self.elems.reverse();
        self.elems
    }

    /// Returns an iterator that pops elements in ascending order.
    ///
    /// Elements not consumed when the iterator is dropped are removed from
    /// the heap as well.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, E, C> {
        DrainSorted { heap: self }
    }

    /// Returns `true` if every parent sorts at or before its children.
    pub fn is_heap(&self) -> bool {
        (1..self.elems.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.cmp.less(&self.elems[child], &self.elems[parent])
        })
    }

    fn rebuild(&mut self) {
        let n = self.elems.len();
        for i in (0..n / 2).rev() {
            self.sift_down_range(i, n);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = n, "heap rebuilt");
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if !self.cmp.less(&self.elems[node], &self.elems[parent]) {
                break;
            }
            self.elems.swap(parent, node);
            node = parent;
        }
    }

    /// Sifts the element at `node` down, treating `elems[..end]` as the heap.
    fn sift_down_range(&mut self, mut node: usize, end: usize) {
        loop {
            let left = match left_child(node) {
                Some(left) if left < end => left,
                _ => break,
            };
            // Only a strictly smaller right child wins, so ties go left.
            let mut child = left;
            let right = left + 1;
            if right < end && self.cmp.less(&self.elems[right], &self.elems[left]) {
                child = right;
            }

            if !self.cmp.less(&self.elems[child], &self.elems[node]) {
                break;
            }
            self.elems.swap(node, child);
            node = child;
        }
    }
}

impl<E: Ord> BinHeap<E, Natural> {
    /// Creates an empty heap ordered by `Ord`.
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<E, C> BinHeap<E, C> {
    /// Returns the smallest element, or `None` if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Option<&E> {
        self.elems.first()
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Drops every element. The comparator is kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.elems.len(), "heap cleared");
        self.elems.clear();
    }

    /// Returns the comparator the heap was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements the heap can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.elems.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.elems.reserve(additional);
    }

    /// Like [`reserve`](Self::reserve), but reports allocation failure
    /// instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.elems.try_reserve(additional)
    }

    /// Shrinks the backing buffer as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.elems.shrink_to_fit();
    }

    /// Iterates over the elements in heap (array) order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.elems.iter()
    }

    /// The backing buffer in heap (array) order.
    pub fn as_slice(&self) -> &[E] {
        &self.elems
    }

    /// Consumes the heap and returns its buffer in heap (array) order.
    pub fn into_vec(self) -> Vec<E> {
        self.elems
    }

    /// Removes every element, yielding them in heap (array) order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, E> {
        self.elems.drain(..)
    }
}

impl<E, C> Container for BinHeap<E, C> {
    #[inline]
    fn len(&self) -> usize {
        self.elems.len()
    }

    fn clear(&mut self) {
        BinHeap::clear(self);
    }
}

impl<E: Ord> Default for BinHeap<E, Natural> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<E: Ord> FromIterator<E> for BinHeap<E, Natural> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), Natural)
    }
}

impl<E, C: Comparator<E>> Extend<E> for BinHeap<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        // A batch at least as large as the heap is cheaper to heapify whole.
        if lower > 0 && lower >= self.elems.len() {
            self.elems.extend(iter);
            self.rebuild();
        } else {
            self.elems.reserve(lower);
            for elem in iter {
                self.push(elem);
            }
        }
    }
}

impl<E, C> IntoIterator for BinHeap<E, C> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, E, C> IntoIterator for &'a BinHeap<E, C> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<E: fmt::Debug, C> fmt::Debug for BinHeap<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinHeap")
            .field("len", &self.len())
            .field("elems", &self.elems)
            .finish_non_exhaustive()
    }
}

impl<E: Serialize, C> Serialize for BinHeap<E, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.elems)
    }
}

/// Iterator returned by [`BinHeap::drain_sorted`].
pub struct DrainSorted<'a, E, C: Comparator<E>> {
    heap: &'a mut BinHeap<E, C>,
}

impl<E, C: Comparator<E>> Iterator for DrainSorted<'_, E, C> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.heap.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<E, C: Comparator<E>> ExactSizeIterator for DrainSorted<'_, E, C> {}

impl<E, C: Comparator<E>> FusedIterator for DrainSorted<'_, E, C> {}

impl<E, C: Comparator<E>> Drop for DrainSorted<'_, E, C> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
