use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Single-owner heap slot.
///
/// Holds zero or one heap-allocated value. Not `Clone`: the value can
/// only move, and `release_to`/`take` leave the source observably
/// empty. Dereferencing an empty `OwnBox` panics; `get` is the
/// recoverable path.
pub struct OwnBox<T>(Option<Box<T>>);

impl<T> OwnBox<T> {
    pub fn new(value: T) -> Self { Self(Some(Box::new(value))) }
    pub fn empty() -> Self { Self(None) }

    pub fn is_empty(&self) -> bool { self.0.is_none() }

    pub fn get(&self) -> Option<&T> { self.0.as_deref() }
    pub fn get_mut(&mut self) -> Option<&mut T> { self.0.as_deref_mut() }

    /// Moves the held value into `dst`, leaving `self` empty. A value
    /// already in `dst` is dropped.
    pub fn release_to(&mut self, dst: &mut OwnBox<T>) {
        dst.0 = self.0.take();
    }

    /// Takes the held value out into a fresh box, leaving `self` empty.
    pub fn take(&mut self) -> OwnBox<T> { Self(self.0.take()) }

    pub fn into_inner(self) -> Option<T> { self.0.map(|b| *b) }
}

impl<T> From<T> for OwnBox<T> {
    fn from(value: T) -> Self { Self::new(value) }
}

impl<T> Default for OwnBox<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> Deref for OwnBox<T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.0.as_deref().expect("OwnBox: dereferenced while empty")
    }
}

impl<T> DerefMut for OwnBox<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0.as_deref_mut().expect("OwnBox: dereferenced while empty")
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("OwnBox").field(value).finish(),
            None => f.write_str("OwnBox(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_empties_the_source() {
        let mut a = OwnBox::new(228);
        let mut b = OwnBox::empty();

        a.release_to(&mut b);

        assert!(a.is_empty());
        assert_eq!(a.get(), None);
        assert_eq!(*b, 228);
    }

    #[test]
    fn transfer_drops_the_destination_value() {
        let mut a = OwnBox::new(1);
        let mut b = OwnBox::new(2);
        a.release_to(&mut b);
        assert_eq!(*b, 1);
        assert!(a.is_empty());
    }

    #[test]
    fn take_and_into_inner() {
        let mut a = OwnBox::new(42);
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(b.into_inner(), Some(42));
        assert_eq!(a.take().into_inner(), None);
    }

    #[test]
    fn usable_inside_containers() {
        let mut v: Vec<OwnBox<i32>> = vec![];
        v.push(OwnBox::new(42));
        assert_eq!(**v.last().unwrap(), 42);

        let ptr = OwnBox::new(228);
        // moving into the container is the only way in; the binding is
        // gone afterwards, which is the compile-time form of "source
        // becomes null"
        v.push(ptr);
        assert_eq!(**v.last().unwrap(), 228);
    }

    #[test]
    fn mutate_through_deref() {
        let mut a = OwnBox::new(10);
        *a += 5;
        assert_eq!(a.get(), Some(&15));
    }

    #[test]
    #[should_panic(expected = "dereferenced while empty")]
    fn empty_deref_panics() {
        let a: OwnBox<i32> = OwnBox::empty();
        let _ = *a;
    }
}
