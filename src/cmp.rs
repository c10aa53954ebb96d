//! Three-way comparators.
//!
//! Ordered containers in this crate never require `E: Ord`. They take a
//! [`Comparator`] at construction instead, which answers `Less`, `Equal` or
//! `Greater` for any pair of elements. Any `Fn(&E, &E) -> Ordering` is a
//! comparator, so most callers simply pass a closure.
//!
//! The comparator must describe a total order. A comparator that is not
//! transitive, or that answers inconsistently for the same pair, does not
//! cause memory unsafety, but the order observed from a container built on
//! it is unspecified.

use core::cmp::Ordering;
use core::marker::PhantomData;
use num_traits::float::TotalOrder;

/// A total order over `E`.
pub trait Comparator<E: ?Sized> {
    /// Compares `a` against `b`. `Less` means `a` sorts before `b`.
    fn compare(&self, a: &E, b: &E) -> Ordering;

    /// Returns `true` if `a` sorts strictly before `b`.
    #[inline]
    fn less(&self, a: &E, b: &E) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<E: ?Sized, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// The order given by `Ord::cmp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<E: Ord + ?Sized> Comparator<E> for Natural {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of the wrapped comparator.
///
/// A min-heap built with `Reversed(Natural)` pops its greatest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<E: ?Sized, C: Comparator<E>> Comparator<E> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compares elements by a key extracted with `f`.
pub struct ByKey<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> core::fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<E, F, K> Comparator<E> for ByKey<F, K>
where
    F: Fn(&E) -> K,
    K: Ord,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.f)(a).cmp(&(self.f)(b))
    }
}

/// Builds a comparator that orders elements by `f(elem)`.
pub fn by_key<E, K, F>(f: F) -> ByKey<F, K>
where
    F: Fn(&E) -> K,
    K: Ord,
{
    ByKey {
        f,
        _key: PhantomData,
    }
}

/// IEEE 754 `totalOrder` for floating point values.
///
/// `-0.0` sorts before `+0.0` and NaNs sort at the ends according to their
/// sign bit, so `f32`/`f64` can be heaped without a wrapper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TotalFloat;

impl<F: TotalOrder> Comparator<F> for TotalFloat {
    #[inline]
    fn compare(&self, a: &F, b: &F) -> Ordering {
        a.total_cmp(b)
    }
}

/// Shorthand for [`TotalFloat`].
pub const fn total_float() -> TotalFloat {
    TotalFloat
}

/// Encodes an ordering as `-1`, `0` or `1`.
#[inline]
pub const fn sign(ordering: Ordering) -> i8 {
    ordering as i8
}

/// Decodes the sign of `value` as an ordering. Any negative value is `Less`
/// and any positive value is `Greater`.
#[inline]
pub const fn from_sign(value: i8) -> Ordering {
    if value < 0 {
        Ordering::Less
    } else if value > 0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
