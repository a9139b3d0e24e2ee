use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use sequence::{IndexSequence, Sequence};

/// Contiguous growable sequence.
///
/// Elements live in one allocation, so indexing is O(1), `push` is
/// amortized O(1), and `insert_at` in the middle is O(n) (the tail is
/// shifted). `as_slice`/`as_ptr` expose the storage directly.
#[derive(Clone, Eq, PartialEq)]
pub struct ArraySeq<T> {
    buf: Vec<T>,
}

impl<T> ArraySeq<T> {
    pub fn new() -> Self { Self { buf: vec![] } }

    pub fn from_vec(buf: Vec<T>) -> Self { Self { buf } }
    pub fn into_vec(self) -> Vec<T> { self.buf }

    pub fn len(&self) -> usize { self.buf.len() }
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }

    pub fn push(&mut self, elt: T) { self.buf.push(elt) }
    pub fn pop(&mut self) -> Option<T> { self.buf.pop() }

    /// Inserts before `index`, shifting the tail right.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, elt: T) {
        assert!(
            index <= self.buf.len(),
            "ArraySeq::insert: index {index} out of bounds (len {})",
            self.buf.len(),
        );
        self.buf.insert(index, elt);
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.buf.len()).then(|| self.buf.remove(index))
    }

    pub fn clear(&mut self) { self.buf.clear() }

    pub fn at(&self, index: usize) -> Option<&T> { self.buf.get(index) }
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> { self.buf.first() }
    pub fn last(&self) -> Option<&T> { self.buf.last() }

    pub fn as_slice(&self) -> &[T] { &self.buf }
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.buf }
    pub fn as_ptr(&self) -> *const T { self.buf.as_ptr() }

    pub fn iter(&self) -> Iter<'_, T> { Iter(self.buf.iter()) }
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut(self.buf.iter_mut())
    }
}

impl<T> Default for ArraySeq<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Sequence for ArraySeq<T> {
    type Item = T;
    fn len(&self) -> usize { self.len() }
    fn append(&mut self, elt: T) { self.push(elt) }
    fn clear(&mut self) { self.clear() }
}

impl<T> IndexSequence for ArraySeq<T> {
    fn at(&self, index: usize) -> Option<&T> { self.at(index) }
    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.at_mut(index)
    }
    fn insert_at(&mut self, index: usize, elt: T) {
        self.insert(index, elt)
    }
    fn remove_at(&mut self, index: usize) -> Option<T> {
        self.remove(index)
    }
}

impl<T> Index<usize> for ArraySeq<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T { &self.buf[index] }
}

impl<T> IndexMut<usize> for ArraySeq<T> {
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.buf[index] }
}

pub struct Iter<'a, T>(slice::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T>(slice::IterMut<'a, T>);

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a ArraySeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut ArraySeq<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> IterMut<'a, T> { self.iter_mut() }
}

impl<T> IntoIterator for ArraySeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.buf.into_iter() }
}

impl<T> FromIterator<T> for ArraySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { buf: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for ArraySeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_front_insert() {
        let mut seq = ArraySeq::new();
        seq.push(1);
        seq.push(2);
        seq.push(3);
        seq.push(4);
        seq.insert(0, 0);

        assert!(seq.iter().copied().eq(0..5));
        assert_eq!(seq.at(5), None);
        assert_eq!(seq.at(4), Some(&4));
    }

    #[test]
    fn raw_storage_access() {
        let seq: ArraySeq<_> = (0..5).collect();
        assert_eq!(seq.as_slice(), [0, 1, 2, 3, 4]);

        let ptr = seq.as_ptr();
        for i in 0..5 {
            assert_eq!(unsafe { *ptr.add(i) }, i as i32);
        }
    }

    #[test]
    fn iterate_both_ways() {
        let mut seq: ArraySeq<_> = [228, 1337, 42].into_iter().collect();

        {
            let mut it = seq.iter();
            assert_eq!(it.next(), Some(&228));
            assert_eq!(it.next(), Some(&1337));
            assert_eq!(it.next(), Some(&42));
            assert_eq!(it.next(), None);
        }

        assert!(seq.iter().rev().copied().eq([42, 1337, 228]));

        // mutation through an iterator is visible in the container
        *seq.iter_mut().next().unwrap() = 156;
        assert_eq!(seq[0], 156);
    }

    #[test]
    fn checked_vs_indexed() {
        let seq: ArraySeq<_> = (0..3).collect();
        assert_eq!(seq.at(2), Some(&2));
        assert_eq!(seq.at(3), None);
        assert_eq!(seq[2], 2);
    }

    #[test]
    #[should_panic]
    fn index_past_end_panics() {
        let seq: ArraySeq<i32> = (0..3).collect();
        let _ = seq[3];
    }

    #[test]
    #[should_panic(expected = "ArraySeq::insert: index 4 out of bounds")]
    fn insert_past_end_panics() {
        let mut seq: ArraySeq<_> = (0..3).collect();
        seq.insert(4, 9);
    }

    #[test]
    fn remove_and_clear() {
        let mut seq: ArraySeq<_> = (0..4).collect();
        assert_eq!(seq.remove(1), Some(1));
        assert_eq!(seq.remove(10), None);
        assert!(seq.iter().copied().eq([0, 2, 3]));

        seq.clear();
        assert!(seq.is_empty());
    }

    #[test]
    fn generic_surface() {
        fn fill<S: IndexSequence<Item = i32>>(seq: &mut S) {
            seq.append(10);
            seq.append(30);
            seq.insert_at(1, 20);
        }

        let mut seq = ArraySeq::new();
        fill(&mut seq);
        assert!(seq.iter().copied().eq([10, 20, 30]));
    }
}
