//! Insertion sorts for the small partitions produced by quicksort.
//!
//! Two variants exist because only interior partitions have a usable neighbor:
//! - [`insertion_sort`]: Classic insertion sort with an explicit left bound, used for the
//!   leftmost partition.
//! - [`pair_insertion_sort`]: Inserts two elements per step and relies on the element just
//!   left of the partition being no greater than anything inside it.

use std::cmp::Ordering;

/// Sorts `v[lo..hi]` without looking at anything left of `lo`.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in (lo + 1)..hi {
        let item = v[i];
        let mut j = i;
        while j > lo && cmp(&item, &v[j - 1]) == Ordering::Less {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = item;
    }
}

/// Sorts `v[lo..hi]` using `v[lo - 1]` as a sentinel.
///
/// The caller guarantees `lo > 0` and that `v[lo - 1]` orders before or equal to every
/// element of the range, so the shifting loops never need the `lo` bound. They still stop
/// at index 0 so that an inconsistent comparator cannot walk off the slice.
pub(crate) fn pair_insertion_sort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if hi <= lo + 1 {
        return;
    }
    let right = hi - 1;
    let mut left = lo;

    // Skip the ascending prefix.
    loop {
        if left >= right {
            return;
        }
        left += 1;
        if cmp(&v[left], &v[left - 1]) == Ordering::Less {
            break;
        }
    }

    // `left` is the first out-of-order element; take it together with its right neighbor.
    let mut k = left;
    left += 1;
    while left <= right {
        let (mut first, mut second) = (v[k], v[left]);
        if cmp(&first, &second) == Ordering::Less {
            second = first;
            first = v[left];
        }

        // `first` is the larger of the pair: shift by two past everything greater.
        let mut j = k;
        while j > 0 && cmp(&first, &v[j - 1]) == Ordering::Less {
            v[j + 1] = v[j - 1];
            j -= 1;
        }
        v[j + 1] = first;

        while j > 0 && cmp(&second, &v[j - 1]) == Ordering::Less {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = second;

        left += 1;
        k = left;
        left += 1;
    }

    // An odd element count leaves the last one unplaced.
    let last = v[right];
    let mut j = right;
    while j > 0 && cmp(&last, &v[j - 1]) == Ordering::Less {
        v[j] = v[j - 1];
        j -= 1;
    }
    v[j] = last;
}
