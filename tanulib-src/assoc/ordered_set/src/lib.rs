use std::fmt;

use aa_tree::AaTree;
use compare::{Compare, NaturalOrder};

/// Ordered set of unique keys; O(log n) insert and lookup, ascending
/// iteration under the injected comparator.
pub struct OrderedSet<T, C = NaturalOrder> {
    tree: AaTree<T, (), C>,
}

impl<T, C: Compare<T>> OrderedSet<T, C> {
    pub fn new() -> Self
    where
        C: Default,
    {
        Self { tree: AaTree::new() }
    }

    pub fn with_cmp(cmp: C) -> Self { Self { tree: AaTree::with_cmp(cmp) } }

    pub fn len(&self) -> usize { self.tree.len() }
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }
    pub fn clear(&mut self) { self.tree.clear() }

    /// `false` when an equal key was already present.
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert_unique(key, ()).is_none()
    }

    pub fn contains(&self, key: &T) -> bool { self.tree.contains(key) }

    pub fn find(&self, key: &T) -> Option<&T> {
        self.tree.get_entry(key).map(|(k, _)| k)
    }

    pub fn remove(&mut self, key: &T) -> bool {
        self.tree.remove(key).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tree.iter().map(|(k, _)| k)
    }
}

impl<T, C: Compare<T> + Default> Default for OrderedSet<T, C> {
    fn default() -> Self { Self::new() }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for OrderedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ordered multiset: equal keys are kept, adjacent in iteration order.
pub struct OrderedMultiSet<T, C = NaturalOrder> {
    tree: AaTree<T, (), C>,
}

impl<T, C: Compare<T>> OrderedMultiSet<T, C> {
    pub fn new() -> Self
    where
        C: Default,
    {
        Self { tree: AaTree::new() }
    }

    pub fn with_cmp(cmp: C) -> Self { Self { tree: AaTree::with_cmp(cmp) } }

    pub fn len(&self) -> usize { self.tree.len() }
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }
    pub fn clear(&mut self) { self.tree.clear() }

    pub fn insert(&mut self, key: T) { self.tree.insert_multi(key, ()) }

    pub fn contains(&self, key: &T) -> bool { self.tree.contains(key) }
    pub fn count(&self, key: &T) -> usize { self.tree.count(key) }

    /// All keys equal to `key`, adjacent in the order.
    pub fn equal_range<'a>(
        &'a self,
        key: &'a T,
    ) -> impl Iterator<Item = &'a T> + 'a {
        self.tree.equal_range(key).map(|(k, _)| k)
    }

    pub fn remove_one(&mut self, key: &T) -> bool {
        self.tree.remove(key).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        self.tree.first().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tree.iter().map(|(k, _)| k)
    }
}

impl<T, C: Compare<T> + Default> Default for OrderedMultiSet<T, C> {
    fn default() -> Self { Self::new() }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for OrderedMultiSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for OrderedMultiSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for OrderedMultiSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
