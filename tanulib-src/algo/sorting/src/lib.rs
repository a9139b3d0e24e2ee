use compare::{Compare, NaturalOrder};

const INSERTION_CUTOFF: usize = 16;

/// Sorts ascending under the natural order; O(n log n), not stable.
pub fn sort<T: Ord>(a: &mut [T]) { sort_by(a, &NaturalOrder) }

/// Introsort: median-of-three quicksort, insertion sort on short
/// spans, heapsort once the depth budget runs out.
pub fn sort_by<T, C: Compare<T>>(a: &mut [T], cmp: &C) {
    let depth = 2 * (usize::BITS - a.len().leading_zeros()) as usize;
    introsort(a, cmp, depth);
}

/// After the call, `[0, mid)` is sorted and holds the `mid` smallest
/// elements; the rest is in no particular order. O(n log mid).
pub fn partial_sort<T: Ord>(a: &mut [T], mid: usize) {
    partial_sort_by(a, mid, &NaturalOrder)
}

pub fn partial_sort_by<T, C: Compare<T>>(a: &mut [T], mid: usize, cmp: &C) {
    assert!(
        mid <= a.len(),
        "partial_sort: mid {mid} out of bounds (len {})",
        a.len(),
    );
    if mid == 0 {
        return;
    }

    // max-heap of the current mid smallest over a[..mid]
    for i in (0..mid / 2).rev() {
        sift_down(&mut a[..mid], i, mid, cmp);
    }
    for i in mid..a.len() {
        if cmp.lt(&a[i], &a[0]) {
            a.swap(0, i);
            sift_down(&mut a[..mid], 0, mid, cmp);
        }
    }
    // heap extraction leaves the prefix ascending
    for end in (1..mid).rev() {
        a.swap(0, end);
        sift_down(&mut a[..mid], 0, end, cmp);
    }
}

/// Places the element a full sort would put at `nth`, with everything
/// before it no greater and everything after it no smaller. Average
/// O(n).
///
/// # Panics
/// Panics if `nth >= len`.
pub fn nth_element<T: Ord>(a: &mut [T], nth: usize) {
    nth_element_by(a, nth, &NaturalOrder)
}

pub fn nth_element_by<T, C: Compare<T>>(a: &mut [T], nth: usize, cmp: &C) {
    assert!(
        nth < a.len(),
        "nth_element: nth {nth} out of bounds (len {})",
        a.len(),
    );
    if a.len() <= INSERTION_CUTOFF {
        insertion_sort(a, cmp);
        return;
    }
    let p = partition(a, cmp);
    if nth < p {
        nth_element_by(&mut a[..p], nth, cmp);
    } else if nth > p {
        nth_element_by(&mut a[p + 1..], nth - p - 1, cmp);
    }
}

pub fn is_sorted_seq<T: Ord>(a: &[T]) -> bool {
    is_sorted_by_seq(a, &NaturalOrder)
}

pub fn is_sorted_by_seq<T, C: Compare<T>>(a: &[T], cmp: &C) -> bool {
    a.windows(2).all(|w| cmp.le(&w[0], &w[1]))
}

fn introsort<T, C: Compare<T>>(a: &mut [T], cmp: &C, depth: usize) {
    if a.len() <= INSERTION_CUTOFF {
        insertion_sort(a, cmp);
        return;
    }
    if depth == 0 {
        heapsort(a, cmp);
        return;
    }
    let p = partition(a, cmp);
    introsort(&mut a[..p], cmp, depth - 1);
    introsort(&mut a[p + 1..], cmp, depth - 1);
}

fn insertion_sort<T, C: Compare<T>>(a: &mut [T], cmp: &C) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && cmp.lt(&a[j], &a[j - 1]) {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

// median-of-three pivot, pivot parked at the end during the scan
fn partition<T, C: Compare<T>>(a: &mut [T], cmp: &C) -> usize {
    let n = a.len();
    let mid = n / 2;
    if cmp.lt(&a[mid], &a[0]) {
        a.swap(mid, 0);
    }
    if cmp.lt(&a[n - 1], &a[0]) {
        a.swap(n - 1, 0);
    }
    if cmp.lt(&a[n - 1], &a[mid]) {
        a.swap(n - 1, mid);
    }
    a.swap(mid, n - 1);

    let mut store = 0;
    for i in 0..n - 1 {
        if cmp.lt(&a[i], &a[n - 1]) {
            a.swap(i, store);
            store += 1;
        }
    }
    a.swap(store, n - 1);
    store
}

fn heapsort<T, C: Compare<T>>(a: &mut [T], cmp: &C) {
    let n = a.len();
    for i in (0..n / 2).rev() {
        sift_down(a, i, n, cmp);
    }
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(a, 0, end, cmp);
    }
}

fn sift_down<T, C: Compare<T>>(
    a: &mut [T],
    mut root: usize,
    end: usize,
    cmp: &C,
) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && cmp.lt(&a[child], &a[child + 1]) {
            child += 1;
        }
        if cmp.lt(&a[root], &a[child]) {
            a.swap(root, child);
            root = child;
        } else {
            break;
        }
    }
}
