//! The capability shared by every container in the crate.

/// Size and reset operations common to all containers.
pub trait Container {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element. Calling it on an empty container does nothing.
    fn clear(&mut self);
}
