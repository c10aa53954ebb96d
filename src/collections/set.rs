//! The `Set` contract.
//!
//! A set answers membership queries and accepts bulk additions and removals.
//! The crate does not ship a set data structure of its own; the standard
//! library's `HashSet` and `BTreeSet` are adapted to the contract so generic
//! code can be written once against [`Set`].

use crate::container::Container;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection of distinct elements.
///
/// Implementations must uphold:
/// - `add` is idempotent per element: adding a present element leaves
///   membership unchanged.
/// - `remove` of an absent element is a no-op, not a failure.
/// - `contains` does not mutate the set.
pub trait Set<E>: Container {
    /// Returns `true` if `elem` is a member.
    fn contains(&self, elem: &E) -> bool;

    /// Adds every element of `elems`.
    fn add<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>;

    /// Removes every element of `elems` that is present.
    fn remove<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>;
}

impl<E, S> Container for HashSet<E, S> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }
}

impl<E, S> Set<E> for HashSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn contains(&self, elem: &E) -> bool {
        HashSet::contains(self, elem)
    }

    fn add<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.extend(elems);
    }

    fn remove<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>,
    {
        for elem in elems {
            HashSet::remove(self, &elem);
        }
    }
}

impl<E> Container for BTreeSet<E> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl<E: Ord> Set<E> for BTreeSet<E> {
    #[inline]
    fn contains(&self, elem: &E) -> bool {
        BTreeSet::contains(self, elem)
    }

    fn add<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.extend(elems);
    }

    fn remove<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = E>,
    {
        for elem in elems {
            BTreeSet::remove(self, &elem);
        }
    }
}
