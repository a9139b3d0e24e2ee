use std::cmp::Ordering;

use compare::{Compare, NaturalOrder};

const NIL: usize = usize::MAX;

struct Node<K, V> {
    key: K,
    value: V,
    level: u32,
    left: usize,
    right: usize,
}

/// Arena-based AA tree, the ordering backbone of the associative
/// containers.
///
/// Nodes live in one `Vec` and link by index; freed slots are recycled.
/// Keys are ordered by the injected comparator. Equal keys (multi
/// insertion) descend right, so duplicates sit adjacent in order and
/// iterate in insertion order. Insert, find, and remove are O(log n).
pub struct AaTree<K, V, C = NaturalOrder> {
    nodes: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    root: usize,
    len: usize,
    cmp: C,
}

impl<K, V, C: Compare<K>> AaTree<K, V, C> {
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_cmp(C::default())
    }

    pub fn with_cmp(cmp: C) -> Self {
        Self { nodes: vec![], free: vec![], root: NIL, len: 0, cmp }
    }

    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// Unique insert: an equal key keeps its place (and its key) and
    /// gets the new value; the old value comes back.
    pub fn insert_unique(&mut self, key: K, value: V) -> Option<V> {
        self.insert_entry(key, value, true).1
    }

    /// Multi insert: an equal key gains one more entry, placed after
    /// the existing ones.
    pub fn insert_multi(&mut self, key: K, value: V) {
        self.insert_entry(key, value, false);
    }

    pub fn contains(&self, key: &K) -> bool { self.find_idx(key) != NIL }

    pub fn get(&self, key: &K) -> Option<&V> {
        let t = self.find_idx(key);
        (t != NIL).then(|| &self.node(t).value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let t = self.find_idx(key);
        (t != NIL).then(|| &mut self.node_mut(t).value)
    }

    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        let t = self.find_idx(key);
        (t != NIL).then(|| {
            let node = self.node(t);
            (&node.key, &node.value)
        })
    }

    /// Entry for `key`, inserting `default()` first when absent.
    pub fn or_insert_with(
        &mut self,
        key: K,
        default: impl FnOnce() -> V,
    ) -> &mut V {
        let t = self.find_idx(&key);
        let t = if t != NIL {
            t
        } else {
            self.insert_entry(key, default(), true).0
        };
        &mut self.node_mut(t).value
    }

    /// Removes one entry with an equal key.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let root = self.root;
        let (root, removed) = self.remove_rec(root, key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        if self.root == NIL {
            return None;
        }
        let mut t = self.root;
        while self.node(t).left != NIL {
            t = self.node(t).left;
        }
        let node = self.node(t);
        Some((&node.key, &node.value))
    }

    /// Ascending in-order iteration.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut stack = vec![];
        self.push_left_spine(self.root, &mut stack);
        Iter { nodes: &self.nodes, stack }
    }

    /// Entries with keys equal to `key`, in order.
    pub fn equal_range<'a, 'b>(
        &'a self,
        key: &'b K,
    ) -> EqualRange<'a, 'b, K, V, C> {
        let mut stack = vec![];
        let mut t = self.root;
        while t != NIL {
            let node = self.node(t);
            if self.cmp.compare(&node.key, key) == Ordering::Less {
                t = node.right;
            } else {
                stack.push(t);
                t = node.left;
            }
        }
        EqualRange {
            inner: Iter { nodes: &self.nodes, stack },
            cmp: &self.cmp,
            key,
        }
    }

    pub fn count(&self, key: &K) -> usize { self.equal_range(key).count() }

    fn node(&self, t: usize) -> &Node<K, V> {
        self.nodes[t].as_ref().unwrap()
    }
    fn node_mut(&mut self, t: usize) -> &mut Node<K, V> {
        self.nodes[t].as_mut().unwrap()
    }
    fn level_of(&self, t: usize) -> u32 {
        if t == NIL { 0 } else { self.node(t).level }
    }

    fn push_left_spine(&self, mut t: usize, stack: &mut Vec<usize>) {
        while t != NIL {
            stack.push(t);
            t = self.node(t).left;
        }
    }

    fn find_idx(&self, key: &K) -> usize {
        let mut t = self.root;
        while t != NIL {
            let node = self.node(t);
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => t = node.left,
                Ordering::Greater => t = node.right,
                Ordering::Equal => return t,
            }
        }
        NIL
    }

    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = Node { key, value, level: 1, left: NIL, right: NIL };
        match self.free.pop() {
            Some(t) => {
                self.nodes[t] = Some(node);
                t
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn dealloc(&mut self, t: usize) -> (K, V) {
        let node = self.nodes[t].take().unwrap();
        self.free.push(t);
        (node.key, node.value)
    }

    // right rotation removing a left horizontal link
    fn skew(&mut self, t: usize) -> usize {
        if t == NIL {
            return t;
        }
        let l = self.node(t).left;
        if l != NIL && self.node(l).level == self.node(t).level {
            let lr = self.node(l).right;
            self.node_mut(t).left = lr;
            self.node_mut(l).right = t;
            l
        } else {
            t
        }
    }

    // left rotation breaking a double right horizontal link
    fn split(&mut self, t: usize) -> usize {
        if t == NIL {
            return t;
        }
        let r = self.node(t).right;
        if r == NIL {
            return t;
        }
        let rr = self.node(r).right;
        if rr != NIL && self.node(rr).level == self.node(t).level {
            let rl = self.node(r).left;
            self.node_mut(t).right = rl;
            self.node_mut(r).left = t;
            self.node_mut(r).level += 1;
            r
        } else {
            t
        }
    }

    fn insert_entry(
        &mut self,
        key: K,
        value: V,
        unique: bool,
    ) -> (usize, Option<V>) {
        let root = self.root;
        let (root, entry, replaced) =
            self.insert_rec(root, key, value, unique);
        self.root = root;
        if replaced.is_none() {
            self.len += 1;
        }
        (entry, replaced)
    }

    fn insert_rec(
        &mut self,
        t: usize,
        key: K,
        value: V,
        unique: bool,
    ) -> (usize, usize, Option<V>) {
        if t == NIL {
            let entry = self.alloc(key, value);
            return (entry, entry, None);
        }
        let ord = self.cmp.compare(&key, &self.node(t).key);
        let (entry, replaced) = match ord {
            Ordering::Less => {
                let l = self.node(t).left;
                let (l, entry, replaced) =
                    self.insert_rec(l, key, value, unique);
                self.node_mut(t).left = l;
                (entry, replaced)
            }
            Ordering::Equal if unique => {
                let old =
                    std::mem::replace(&mut self.node_mut(t).value, value);
                return (t, t, Some(old));
            }
            _ => {
                let r = self.node(t).right;
                let (r, entry, replaced) =
                    self.insert_rec(r, key, value, unique);
                self.node_mut(t).right = r;
                (entry, replaced)
            }
        };
        let t = self.skew(t);
        let t = self.split(t);
        (t, entry, replaced)
    }

    fn remove_rec(&mut self, t: usize, key: &K) -> (usize, Option<(K, V)>) {
        if t == NIL {
            return (NIL, None);
        }
        let (t, removed) = match self.cmp.compare(key, &self.node(t).key) {
            Ordering::Less => {
                let l = self.node(t).left;
                let (l, removed) = self.remove_rec(l, key);
                self.node_mut(t).left = l;
                (t, removed)
            }
            Ordering::Greater => {
                let r = self.node(t).right;
                let (r, removed) = self.remove_rec(r, key);
                self.node_mut(t).right = r;
                (t, removed)
            }
            Ordering::Equal => {
                let (l, r) = {
                    let node = self.node(t);
                    (node.left, node.right)
                };
                if l == NIL && r == NIL {
                    return (NIL, Some(self.dealloc(t)));
                }
                // pull the closest neighbor's entry into this node
                let old = if r != NIL {
                    let (r, succ) = self.remove_min(r);
                    self.node_mut(t).right = r;
                    self.replace_entry(t, succ)
                } else {
                    let (l, pred) = self.remove_max(l);
                    self.node_mut(t).left = l;
                    self.replace_entry(t, pred)
                };
                (t, Some(old))
            }
        };
        if removed.is_some() {
            (self.fixup(t), removed)
        } else {
            (t, removed)
        }
    }

    fn remove_min(&mut self, t: usize) -> (usize, (K, V)) {
        let l = self.node(t).left;
        if l == NIL {
            let r = self.node(t).right;
            return (r, self.dealloc(t));
        }
        let (l, kv) = self.remove_min(l);
        self.node_mut(t).left = l;
        (self.fixup(t), kv)
    }

    fn remove_max(&mut self, t: usize) -> (usize, (K, V)) {
        let r = self.node(t).right;
        if r == NIL {
            let l = self.node(t).left;
            return (l, self.dealloc(t));
        }
        let (r, kv) = self.remove_max(r);
        self.node_mut(t).right = r;
        (self.fixup(t), kv)
    }

    fn replace_entry(&mut self, t: usize, kv: (K, V)) -> (K, V) {
        let node = self.node_mut(t);
        let key = std::mem::replace(&mut node.key, kv.0);
        let value = std::mem::replace(&mut node.value, kv.1);
        (key, value)
    }

    // decrease-level pass after a removal, per Andersson
    fn fixup(&mut self, t: usize) -> usize {
        let should = self
            .level_of(self.node(t).left)
            .min(self.level_of(self.node(t).right))
            + 1;
        if should < self.node(t).level {
            self.node_mut(t).level = should;
            let r = self.node(t).right;
            if r != NIL && should < self.node(r).level {
                self.node_mut(r).level = should;
            }
        }
        let t = self.skew(t);
        let r = self.node(t).right;
        let r = self.skew(r);
        self.node_mut(t).right = r;
        if r != NIL {
            let rr = self.node(r).right;
            let rr = self.skew(rr);
            self.node_mut(r).right = rr;
        }
        let t = self.split(t);
        let r = self.node(t).right;
        let r = self.split(r);
        self.node_mut(t).right = r;
        t
    }
}

impl<K, V, C: Compare<K> + Default> Default for AaTree<K, V, C> {
    fn default() -> Self { Self::new() }
}

pub struct Iter<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    stack: Vec<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let t = self.stack.pop()?;
        let node = self.nodes[t].as_ref().unwrap();
        let mut u = node.right;
        while u != NIL {
            self.stack.push(u);
            u = self.nodes[u].as_ref().unwrap().left;
        }
        Some((&node.key, &node.value))
    }
}

pub struct EqualRange<'a, 'b, K, V, C> {
    inner: Iter<'a, K, V>,
    cmp: &'a C,
    key: &'b K,
}

impl<'a, 'b, K, V, C: Compare<K>> Iterator for EqualRange<'a, 'b, K, V, C> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let (key, value) = self.inner.next()?;
        if self.cmp.eq(key, self.key) {
            Some((key, value))
        } else {
            self.inner.stack.clear();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use super::*;

    fn check_node<K, V, C: Compare<K>>(
        tree: &AaTree<K, V, C>,
        t: usize,
    ) -> usize {
        if t == NIL {
            return 0;
        }
        let node = tree.node(t);
        // left child one level down, right child at most level, no
        // double right horizontal link
        assert_eq!(tree.level_of(node.left) + 1, node.level);
        let rl = tree.level_of(node.right);
        assert!(rl == node.level || rl + 1 == node.level);
        if node.right != NIL {
            let rr = tree.node(node.right).right;
            assert!(tree.level_of(rr) < node.level);
        }
        if node.left != NIL {
            assert!(tree.cmp.le(&tree.node(node.left).key, &node.key));
        }
        if node.right != NIL {
            assert!(tree.cmp.le(&node.key, &tree.node(node.right).key));
        }
        1 + check_node(tree, node.left) + check_node(tree, node.right)
    }

    fn check<K, V, C: Compare<K>>(tree: &AaTree<K, V, C>) {
        assert_eq!(check_node(tree, tree.root), tree.len());
    }

    #[test]
    fn orders_regardless_of_insertion() {
        let mut tree: AaTree<i32, ()> = AaTree::new();
        tree.insert_unique(456, ());
        tree.insert_unique(123, ());

        assert_eq!(tree.first(), Some((&123, &())));
        assert!(tree.iter().map(|(k, _)| *k).eq([123, 456]));

        tree.insert_unique(52375, ());
        tree.insert_unique(789, ());
        check(&tree);

        assert_eq!(tree.get_entry(&52375), Some((&52375, &())));
        assert_eq!(tree.get(&1000), None);
    }

    #[test]
    fn unique_insert_replaces() {
        let mut tree: AaTree<i32, i32> = AaTree::new();
        assert_eq!(tree.insert_unique(22, 8), None);
        assert_eq!(tree.insert_unique(22, 9), Some(8));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&22), Some(&9));
    }

    #[test]
    fn multi_insert_keeps_duplicates_adjacent() {
        let mut tree: AaTree<i32, &str> = AaTree::new();
        tree.insert_multi(12, "a");
        tree.insert_multi(13, "c");
        tree.insert_multi(12, "b");
        tree.insert_multi(11, "z");
        check(&tree);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.count(&12), 2);
        assert!(tree.equal_range(&12).eq([(&12, &"a"), (&12, &"b")]));
        assert!(tree.equal_range(&99).next().is_none());
    }

    #[test]
    fn or_insert_with_mutates_on_miss() {
        let mut tree: AaTree<i32, i32> = AaTree::new();
        *tree.or_insert_with(13, || 0) = 37;
        assert_eq!(tree.get(&13), Some(&37));
        assert_eq!(tree.or_insert_with(13, || 0), &mut 37);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_rebalances() {
        let mut tree: AaTree<i32, i32> = AaTree::new();
        for k in 0..100 {
            tree.insert_unique(k, k * 10);
        }
        check(&tree);

        for k in (0..100).step_by(3) {
            assert_eq!(tree.remove(&k), Some((k, k * 10)));
            check(&tree);
        }
        assert_eq!(tree.remove(&0), None);
        assert_eq!(tree.len(), 66);
        assert!(tree
            .iter()
            .map(|(k, _)| *k)
            .eq((0..100).filter(|k| k % 3 != 0)));
    }

    #[test]
    fn differential_against_std_btree() {
        let mut rng = ChaCha20Rng::seed_from_u64(20240315);
        let mut tree: AaTree<u8, u32> = AaTree::new();
        let mut model = std::collections::BTreeMap::new();

        for i in 0..4096_u32 {
            let key: u8 = rng.gen();
            if rng.gen_bool(0.3) {
                assert_eq!(
                    tree.remove(&key).map(|(_, v)| v),
                    model.remove(&key),
                );
            } else {
                assert_eq!(
                    tree.insert_unique(key, i),
                    model.insert(key, i),
                );
            }
            assert_eq!(tree.len(), model.len());
        }
        check(&tree);
        assert!(tree.iter().eq(model.iter()));
    }
}
