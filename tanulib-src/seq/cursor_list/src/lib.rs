use std::fmt;

use sequence::Sequence;

const NIL: usize = usize::MAX;

/// Position in a [`CursorList`].
///
/// A cursor stays valid until its element is removed. Removal frees the
/// slot for reuse, so a cursor held across the removal of its element
/// must not be reused: it may observe nothing or, after reuse, a
/// different element.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cursor(usize);

struct Node<T> {
    elt: Option<T>,
    prev: usize,
    next: usize,
}

/// Doubly linked list over a slab of nodes.
///
/// Links are indices into one `Vec`, freed slots are recycled through a
/// free list. Insertion before a known cursor is O(1); positional
/// access by index is O(n) and deliberately not offered.
pub struct CursorList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
    free: usize,
    len: usize,
}

impl<T> CursorList<T> {
    pub fn new() -> Self {
        Self { nodes: vec![], head: NIL, tail: NIL, free: NIL, len: 0 }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn begin(&self) -> Cursor { Cursor(self.head) }
    pub fn end(&self) -> Cursor { Cursor(NIL) }

    pub fn get(&self, at: Cursor) -> Option<&T> {
        self.nodes.get(at.0)?.elt.as_ref()
    }
    pub fn get_mut(&mut self, at: Cursor) -> Option<&mut T> {
        self.nodes.get_mut(at.0)?.elt.as_mut()
    }

    /// Cursor after `at`; the last element's successor is `end()`.
    pub fn next(&self, at: Cursor) -> Cursor {
        match self.nodes.get(at.0) {
            Some(node) if node.elt.is_some() => Cursor(node.next),
            _ => self.end(),
        }
    }

    /// Cursor before `at`; `prev(end())` is the last element.
    pub fn prev(&self, at: Cursor) -> Cursor {
        if at.0 == NIL {
            return Cursor(self.tail);
        }
        match self.nodes.get(at.0) {
            Some(node) if node.elt.is_some() => Cursor(node.prev),
            _ => self.end(),
        }
    }

    /// Inserts before `at` and returns the new element's cursor.
    /// `insert(end(), elt)` appends.
    pub fn insert(&mut self, at: Cursor, elt: T) -> Cursor {
        let prev = if at.0 == NIL {
            self.tail
        } else {
            self.nodes[at.0].prev
        };
        let idx = self.alloc(elt, prev, at.0);
        if prev == NIL {
            self.head = idx;
        } else {
            self.nodes[prev].next = idx;
        }
        if at.0 == NIL {
            self.tail = idx;
        } else {
            self.nodes[at.0].prev = idx;
        }
        self.len += 1;
        Cursor(idx)
    }

    pub fn push_back(&mut self, elt: T) -> Cursor {
        self.insert(self.end(), elt)
    }
    pub fn push_front(&mut self, elt: T) -> Cursor {
        self.insert(self.begin(), elt)
    }

    pub fn remove(&mut self, at: Cursor) -> Option<T> {
        let node = self.nodes.get_mut(at.0)?;
        let elt = node.elt.take()?;
        let (prev, next) = (node.prev, node.next);
        node.next = self.free;
        self.free = at.0;

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.len -= 1;
        Some(elt)
    }

    pub fn pop_front(&mut self) -> Option<T> { self.remove(self.begin()) }
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(Cursor(self.tail))
    }

    /// Linear scan; returns `end()` when absent.
    pub fn find(&self, target: &T) -> Cursor
    where
        T: PartialEq,
    {
        self.find_by(|elt| elt == target)
    }

    pub fn find_by(&self, mut pred: impl FnMut(&T) -> bool) -> Cursor {
        let mut at = self.head;
        while at != NIL {
            let node = &self.nodes[at];
            if pred(node.elt.as_ref().unwrap()) {
                return Cursor(at);
            }
            at = node.next;
        }
        self.end()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, fwd: self.head, back: self.tail, rem: self.len }
    }

    fn alloc(&mut self, elt: T, prev: usize, next: usize) -> usize {
        let node = Node { elt: Some(elt), prev, next };
        if self.free == NIL {
            self.nodes.push(node);
            self.nodes.len() - 1
        } else {
            let idx = self.free;
            self.free = self.nodes[idx].next;
            self.nodes[idx] = node;
            idx
        }
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Sequence for CursorList<T> {
    type Item = T;
    fn len(&self) -> usize { self.len }
    fn append(&mut self, elt: T) { self.push_back(elt); }
    fn clear(&mut self) { self.clear() }
}

pub struct Iter<'a, T> {
    list: &'a CursorList<T>,
    fwd: usize,
    back: usize,
    rem: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        let node = &self.list.nodes[self.fwd];
        self.fwd = node.next;
        self.rem -= 1;
        node.elt.as_ref()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem, Some(self.rem))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.rem == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.rem -= 1;
        node.elt.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T> FromIterator<T> for CursorList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CursorList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<T: PartialEq> PartialEq for CursorList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CursorList<T> {}

impl<T: fmt::Debug> fmt::Debug for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_end_keeps_order() {
        let mut list = CursorList::new();
        let first = list.insert(list.end(), 13);
        let second = list.insert(list.end(), 42);
        let third = list.insert(list.end(), 54);

        assert_eq!(list.get(first), Some(&13));
        assert_eq!(list.get(second), Some(&42));
        assert_eq!(list.get(third), Some(&54));
        assert!(list.iter().copied().eq([13, 42, 54]));
    }

    #[test]
    fn insert_before_cursor() {
        let mut list: CursorList<_> = [1, 3].into_iter().collect();
        let three = list.find(&3);
        let two = list.insert(three, 2);
        assert_eq!(list.get(two), Some(&2));
        assert!(list.iter().copied().eq([1, 2, 3]));
    }

    #[test]
    fn find_hits_and_misses() {
        let list: CursorList<_> = [13, 42, 54].into_iter().collect();

        let found = list.find(&42);
        assert_ne!(found, list.end());
        assert_eq!(list.get(found), Some(&42));
        assert_eq!(list.next(found), list.find(&54));

        assert_eq!(list.find(&99), list.end());
        assert_eq!(list.get(list.end()), None);
    }

    #[test]
    fn remove_relinks() {
        let mut list: CursorList<_> = (0..5).collect();
        let two = list.find(&2);
        assert_eq!(list.remove(two), Some(2));
        assert_eq!(list.remove(two), None); // stale cursor observes nothing
        assert!(list.iter().copied().eq([0, 1, 3, 4]));

        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(4));
        assert!(list.iter().copied().eq([1, 3]));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn slots_are_recycled() {
        let mut list: CursorList<_> = (0..3).collect();
        list.remove(list.find(&1));
        list.push_back(7);
        assert_eq!(list.nodes.len(), 3);
        assert!(list.iter().copied().eq([0, 2, 7]));
    }

    #[test]
    fn navigation_wraps_to_end() {
        let list: CursorList<_> = [10, 20].into_iter().collect();
        let first = list.begin();
        let second = list.next(first);
        assert_eq!(list.get(second), Some(&20));
        assert_eq!(list.next(second), list.end());
        assert_eq!(list.prev(list.end()), second);
        assert_eq!(list.prev(first), list.end());
    }

    #[test]
    fn backward_iteration() {
        let list: CursorList<_> = (0..4).collect();
        assert!(list.iter().rev().copied().eq([3, 2, 1, 0]));

        let mut it = list.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
