//! Shared surface of the sequence containers.
//!
//! Checked access (`at`, `at_mut`) returns `None` past the end; the
//! `Index` operators on the concrete containers are the unchecked fast
//! path and panic instead.

pub trait Sequence {
    type Item;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    fn append(&mut self, elt: Self::Item);
    fn clear(&mut self);
}

pub trait IndexSequence: Sequence {
    fn at(&self, index: usize) -> Option<&Self::Item>;
    fn at_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Inserts before `index`; `index == len` appends.
    ///
    /// # Panics
    /// Panics if `index > len`.
    fn insert_at(&mut self, index: usize, elt: Self::Item);

    fn remove_at(&mut self, index: usize) -> Option<Self::Item>;
}
