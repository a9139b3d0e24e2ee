use std::fmt;

use aa_tree::AaTree;
use compare::{Compare, NaturalOrder};

/// Ordered key-value map, one value per key; O(log n) insert and
/// lookup, iteration ascending by key.
pub struct OrderedMap<K, V, C = NaturalOrder> {
    tree: AaTree<K, V, C>,
}

impl<K, V, C: Compare<K>> OrderedMap<K, V, C> {
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

    /// Returns the value previously held by an equal key, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert_unique(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> { self.tree.get(key) }
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree.get_mut(key)
    }
    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.tree.get_entry(key)
    }

    pub fn contains_key(&self, key: &K) -> bool { self.tree.contains(key) }

    /// Value slot for `key`; a missing key gets `V::default()` first.
    /// Reading an absent key therefore mutates the map.
    pub fn or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.tree.or_insert_with(key, V::default)
    }

    pub fn or_insert_with(
        &mut self,
        key: K,
        default: impl FnOnce() -> V,
    ) -> &mut V {
        self.tree.or_insert_with(key, default)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<(&K, &V)> { self.tree.first() }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.tree.iter()
    }
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.tree.iter().map(|(k, _)| k)
    }
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.tree.iter().map(|(_, v)| v)
    }
}

impl<K, V, C: Compare<K> + Default> Default for OrderedMap<K, V, C> {
    fn default() -> Self { Self::new() }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)>
    for OrderedMap<K, V, C>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug
    for OrderedMap<K, V, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Ordered multimap: several values per key, all values for a key
/// contiguous in iteration order.
pub struct OrderedMultiMap<K, V, C = NaturalOrder> {
    tree: AaTree<K, V, C>,
}

impl<K, V, C: Compare<K>> OrderedMultiMap<K, V, C> {
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

    pub fn insert(&mut self, key: K, value: V) {
        self.tree.insert_multi(key, value)
    }

    pub fn contains_key(&self, key: &K) -> bool { self.tree.contains(key) }
    pub fn count_key(&self, key: &K) -> usize { self.tree.count(key) }

    /// Entries for `key`, in insertion order within the key.
    pub fn equal_range<'a>(
        &'a self,
        key: &'a K,
    ) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.tree.equal_range(key)
    }

    /// Removes every entry for `key`, returning how many were removed.
    pub fn remove_key(&mut self, key: &K) -> usize {
        let mut removed = 0;
        while self.tree.remove(key).is_some() {
            removed += 1;
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.tree.iter()
    }
}

impl<K, V, C: Compare<K> + Default> Default for OrderedMultiMap<K, V, C> {
    fn default() -> Self { Self::new() }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)>
    for OrderedMultiMap<K, V, C>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for OrderedMultiMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C: Compare<K>> fmt::Debug
    for OrderedMultiMap<K, V, C>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
