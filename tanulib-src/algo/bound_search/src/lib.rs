use std::ops::Range;

use compare::{Compare, NaturalOrder};

/// Binary-search bounds over a sorted slice.
///
/// The slice must be sorted under the same order used for the query;
/// `len()` plays the end-sentinel. All operations are O(log n).
pub trait BoundSearch {
    type Item;

    /// First position whose element is not less than `target`.
    fn lower_bound(&self, target: &Self::Item) -> usize
    where
        Self::Item: Ord;

    /// First position whose element is strictly greater than `target`.
    fn upper_bound(&self, target: &Self::Item) -> usize
    where
        Self::Item: Ord;

    /// Presence test on the sorted slice.
    fn contains_sorted(&self, target: &Self::Item) -> bool
    where
        Self::Item: Ord;

    /// `lower_bound..upper_bound`: every position equal to `target`,
    /// and the valid order-preserving insertion span.
    fn equal_range(&self, target: &Self::Item) -> Range<usize>
    where
        Self::Item: Ord;

    fn lower_bound_by<C: Compare<Self::Item>>(
        &self,
        target: &Self::Item,
        cmp: &C,
    ) -> usize;
    fn upper_bound_by<C: Compare<Self::Item>>(
        &self,
        target: &Self::Item,
        cmp: &C,
    ) -> usize;
    fn contains_sorted_by<C: Compare<Self::Item>>(
        &self,
        target: &Self::Item,
        cmp: &C,
    ) -> bool;
    fn equal_range_by<C: Compare<Self::Item>>(
        &self,
        target: &Self::Item,
        cmp: &C,
    ) -> Range<usize>;
}

impl<T> BoundSearch for [T] {
    type Item = T;

    fn lower_bound(&self, target: &T) -> usize
    where
        T: Ord,
    {
        self.lower_bound_by(target, &NaturalOrder)
    }

    fn upper_bound(&self, target: &T) -> usize
    where
        T: Ord,
    {
        self.upper_bound_by(target, &NaturalOrder)
    }

    fn contains_sorted(&self, target: &T) -> bool
    where
        T: Ord,
    {
        self.contains_sorted_by(target, &NaturalOrder)
    }

    fn equal_range(&self, target: &T) -> Range<usize>
    where
        T: Ord,
    {
        self.equal_range_by(target, &NaturalOrder)
    }

    fn lower_bound_by<C: Compare<T>>(&self, target: &T, cmp: &C) -> usize {
        partition_index(self, |elt| cmp.lt(elt, target))
    }

    fn upper_bound_by<C: Compare<T>>(&self, target: &T, cmp: &C) -> usize {
        partition_index(self, |elt| cmp.le(elt, target))
    }

    fn contains_sorted_by<C: Compare<T>>(&self, target: &T, cmp: &C) -> bool {
        let i = self.lower_bound_by(target, cmp);
        i < self.len() && cmp.eq(&self[i], target)
    }

    fn equal_range_by<C: Compare<T>>(
        &self,
        target: &T,
        cmp: &C,
    ) -> Range<usize> {
        self.lower_bound_by(target, cmp)..self.upper_bound_by(target, cmp)
    }
}

// `pred` holds on a prefix; returns the first position where it fails.
fn partition_index<T>(a: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    if a.is_empty() || !pred(&a[0]) {
        return 0;
    }
    let mut ok = 0;
    let mut bad = a.len();
    while bad - ok > 1 {
        let mid = ok + (bad - ok) / 2;
        *(if pred(&a[mid]) { &mut ok } else { &mut bad }) = mid;
    }
    bad
}
