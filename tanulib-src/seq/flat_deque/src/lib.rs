use std::{
    fmt,
    iter::{Chain, Rev},
    ops::{Index, IndexMut},
    slice,
};

use sequence::{IndexSequence, Sequence};

/// Double-ended sequence as a pair of stacks.
///
/// `front` holds the first elements in reverse, `back` the rest in
/// order. Both ends are amortized O(1); when a pop empties one side the
/// other side is split in half and rotated over. Positional access is
/// O(1), middle insertion O(n).
#[derive(Clone, Eq, PartialEq)]
pub struct FlatDeque<T> {
    front: Vec<T>,
    back: Vec<T>,
}

impl<T> FlatDeque<T> {
    pub fn new() -> Self { Self { front: vec![], back: vec![] } }

    pub fn len(&self) -> usize { self.front.len() + self.back.len() }
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    pub fn push_back(&mut self, elt: T) { self.back.push(elt) }
    pub fn push_front(&mut self, elt: T) { self.front.push(elt) }

    pub fn pop_back(&mut self) -> Option<T> {
        self.rotate_back();
        self.back.pop().or_else(|| self.front.pop())
    }
    pub fn pop_front(&mut self) -> Option<T> {
        self.rotate_front();
        self.front.pop().or_else(|| self.back.pop())
    }

    pub fn front(&self) -> Option<&T> {
        self.front.last().or_else(|| self.back.first())
    }
    pub fn back(&self) -> Option<&T> {
        self.back.last().or_else(|| self.front.first())
    }

    pub fn at(&self, index: usize) -> Option<&T> {
        let f = self.front.len();
        if index < f {
            self.front.get(f - 1 - index)
        } else {
            self.back.get(index - f)
        }
    }
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let f = self.front.len();
        if index < f {
            self.front.get_mut(f - 1 - index)
        } else {
            self.back.get_mut(index - f)
        }
    }

    /// Inserts before `index`, shifting whichever side holds it.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, elt: T) {
        let f = self.front.len();
        if index <= f {
            self.front.insert(f - index, elt);
        } else {
            let i = index - f;
            assert!(
                i <= self.back.len(),
                "FlatDeque::insert: index {index} out of bounds (len {})",
                f + self.back.len(),
            );
            self.back.insert(i, elt);
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let f = self.front.len();
        if index < f {
            Some(self.front.remove(f - 1 - index))
        } else if index - f < self.back.len() {
            Some(self.back.remove(index - f))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.front.iter().rev().chain(self.back.iter()))
    }

    fn rotate_front(&mut self) {
        if !self.front.is_empty() {
            return;
        }
        let mut front = std::mem::take(&mut self.back);
        let len = front.len();

        // *][01234*; front: [], back: [0, 1, 2, 3, 4]
        // *012][34*; front: [2, 1, 0], back: [3, 4]
        let back = front.split_off((len + 1) / 2);
        front.reverse();
        self.front = front;
        self.back = back;
    }
    fn rotate_back(&mut self) {
        if !self.back.is_empty() {
            return;
        }
        let mut back = std::mem::take(&mut self.front);
        let len = back.len();

        // *01234][*; front: [4, 3, 2, 1, 0], back: []
        // *01][234*; front: [1, 0], back: [2, 3, 4]
        let front = back.split_off((len + 1) / 2);
        back.reverse();
        self.front = front;
        self.back = back;
    }
}

impl<T> Default for FlatDeque<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Sequence for FlatDeque<T> {
    type Item = T;
    fn len(&self) -> usize { self.len() }
    fn append(&mut self, elt: T) { self.push_back(elt) }
    fn clear(&mut self) { self.clear() }
}

impl<T> IndexSequence for FlatDeque<T> {
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

impl<T> Index<usize> for FlatDeque<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.at(index).unwrap_or_else(|| {
            panic!("FlatDeque: index {index} out of bounds (len {len})")
        })
    }
}

impl<T> IndexMut<usize> for FlatDeque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.at_mut(index).unwrap_or_else(|| {
            panic!("FlatDeque: index {index} out of bounds (len {len})")
        })
    }
}

pub struct Iter<'a, T>(Chain<Rev<slice::Iter<'a, T>>, slice::Iter<'a, T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> IntoIterator for &'a FlatDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> FromIterator<T> for FlatDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { front: vec![], back: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for FlatDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.back.extend(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for FlatDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
