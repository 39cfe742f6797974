//! Dual-Pivot Quicksort.
//!
//! Each partitioning step samples five evenly spaced elements around the midpoint:
//! - **Distinct samples**: The 2nd and 4th become `pivot1 <= pivot2` and the range is split
//!   into `< pivot1`, `[pivot1, pivot2]` and `> pivot2`.
//! - **Repeated samples**: The range holds many duplicates, so it is split 3-way around the
//!   median sample and the `== pivot` block is left alone.
//!
//! Partitions below [`INSERTION_SORT_THRESHOLD`] are finished by insertion sort. Only the
//! partition touching the start of the caller's range is "leftmost"; every other partition
//! has a placed pivot directly to its left, which lets it use the sentinel variant.

use crate::core::INSERTION_SORT_THRESHOLD;
use crate::insertion::{insertion_sort, pair_insertion_sort};
use std::cmp::Ordering;

/// A half-open sub-range still to be sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    lo: usize,
    hi: usize,
    leftmost: bool,
}

impl Segment {
    #[inline(always)]
    fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }
}

/// Sorts `v[lo..hi]`.
///
/// `leftmost` must be `false` only when `v[lo - 1]` is ordered before or equal to every
/// element of the range.
pub(crate) fn quicksort<T, F>(v: &mut [T], lo: usize, hi: usize, leftmost: bool, cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut current = Segment { lo, hi, leftmost };

    // Recurse into the smaller segments and loop on the largest one, which keeps the
    // stack depth logarithmic whatever the pivots turn out to be.
    loop {
        if current.len() < INSERTION_SORT_THRESHOLD {
            if current.leftmost {
                insertion_sort(v, current.lo, current.hi, cmp);
            } else {
                pair_insertion_sort(v, current.lo, current.hi, cmp);
            }
            return;
        }

        let samples = sample_five(v, current.lo, current.hi - 1, cmp);
        let distinct = samples
            .windows(2)
            .all(|w| cmp(&v[w[0]], &v[w[1]]) != Ordering::Equal);

        current = if distinct {
            let segments = partition_dual(v, current, samples, cmp);
            descend(v, segments, cmp)
        } else {
            let segments = partition_single(v, current, samples[2], cmp);
            descend(v, segments, cmp)
        };
    }
}

/// Sorts every segment except the largest, which is handed back to the caller.
fn descend<T, F, const N: usize>(v: &mut [T], segments: [Segment; N], cmp: &mut F) -> Segment
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut largest = 0;
    for (i, segment) in segments.iter().enumerate() {
        if segment.len() > segments[largest].len() {
            largest = i;
        }
    }

    for (i, segment) in segments.iter().enumerate() {
        if i != largest && segment.len() > 0 {
            quicksort(v, segment.lo, segment.hi, segment.leftmost, cmp);
        }
    }
    segments[largest]
}

/// Sorts five evenly spaced elements around the midpoint of `v[left..=right]` in place and
/// returns their indices in ascending position order.
fn sample_five<T, F>(v: &mut [T], left: usize, right: usize, cmp: &mut F) -> [usize; 5]
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let length = right - left + 1;
    // Inexpensive approximation of length / 7.
    let seventh = (length >> 3) + (length >> 6) + 1;

    let e3 = left + (right - left) / 2;
    let e2 = e3 - seventh;
    let e1 = e2 - seventh;
    let e4 = e3 + seventh;
    let e5 = e4 + seventh;
    let samples = [e1, e2, e3, e4, e5];

    for i in 1..samples.len() {
        let item = v[samples[i]];
        let mut j = i;
        while j > 0 && cmp(&item, &v[samples[j - 1]]) == Ordering::Less {
            v[samples[j]] = v[samples[j - 1]];
            j -= 1;
        }
        v[samples[j]] = item;
    }
    samples
}

/// Walks `great` leftwards over elements matching `skip`.
///
/// Returns `None` when the walk reaches `k`, meaning everything from `k` onwards already
/// belongs to the right part and partitioning is finished.
#[inline(always)]
fn retreat<T, P>(v: &[T], mut great: usize, k: usize, mut skip: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    while skip(&v[great]) {
        if great == k {
            return None;
        }
        great -= 1;
    }
    Some(great)
}

/// Partitions `v[seg.lo..seg.hi]` around the 2nd and 4th samples.
///
/// ```text
///   left part           center part                   right part
/// +--------------------------------------------------------------+
/// |  < pivot1  |  pivot1 <= && <= pivot2  |    ?    |  > pivot2  |
/// +--------------------------------------------------------------+
///               ^                          ^       ^
///              less                        k     great
/// ```
fn partition_dual<T, F>(
    v: &mut [T],
    seg: Segment,
    samples: [usize; 5],
    cmp: &mut F,
) -> [Segment; 3]
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left, right) = (seg.lo, seg.hi - 1);
    let [e1, e2, _, e4, e5] = samples;

    let pivot1 = v[e2];
    let pivot2 = v[e4];

    // The end elements take the pivots' slots; the pivots return to their final
    // positions once partitioning is done.
    v[e2] = v[left];
    v[e4] = v[right];

    let mut less = left + 1;
    while less < right && cmp(&v[less], &pivot1) == Ordering::Less {
        less += 1;
    }
    let mut great = right - 1;
    while great >= less && cmp(&v[great], &pivot2) == Ordering::Greater {
        great -= 1;
    }

    let mut k = less;
    while k <= great {
        let ak = v[k];
        if cmp(&ak, &pivot1) == Ordering::Less {
            v[k] = v[less];
            v[less] = ak;
            less += 1;
        } else if cmp(&ak, &pivot2) == Ordering::Greater {
            match retreat(v, great, k, |x| cmp(x, &pivot2) == Ordering::Greater) {
                Some(g) => great = g,
                None => {
                    great = k - 1;
                    break;
                }
            }
            if cmp(&v[great], &pivot1) == Ordering::Less {
                v[k] = v[less];
                v[less] = v[great];
                less += 1;
            } else {
                v[k] = v[great];
            }
            v[great] = ak;
            great -= 1;
        }
        k += 1;
    }

    v[left] = v[less - 1];
    v[less - 1] = pivot1;
    v[right] = v[great + 1];
    v[great + 1] = pivot2;

    let outer_left = Segment { lo: left, hi: less - 1, leftmost: seg.leftmost };
    let outer_right = Segment { lo: great + 2, hi: right + 1, leftmost: false };

    // A center part spanning more than about 4/7 of the range is full of pivot
    // duplicates; pull them out so the recursion only sees values strictly between.
    if less < e1 && e5 < great {
        (less, great) = squeeze_pivots(v, less, great, pivot1, pivot2, cmp);
    }

    let center = Segment { lo: less, hi: great + 1, leftmost: false };
    [outer_left, outer_right, center]
}

/// Moves elements equal to `pivot1` to the front of `v[less..=great]` and elements equal to
/// `pivot2` to its back, returning the bounds of what is left in between.
///
/// ```text
///   left part         center part                  right part
/// +----------------------------------------------------------+
/// | == pivot1 |  pivot1 < && < pivot2  |    ?    | == pivot2 |
/// +----------------------------------------------------------+
///              ^                        ^       ^
///             less                      k     great
/// ```
fn squeeze_pivots<T, F>(
    v: &mut [T],
    mut less: usize,
    mut great: usize,
    pivot1: T,
    pivot2: T,
    cmp: &mut F,
) -> (usize, usize)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    while less <= great && cmp(&v[less], &pivot1) == Ordering::Equal {
        less += 1;
    }
    while great >= less && cmp(&v[great], &pivot2) == Ordering::Equal {
        great -= 1;
    }

    let mut k = less;
    while k <= great {
        let ak = v[k];
        if cmp(&ak, &pivot1) == Ordering::Equal {
            v[k] = v[less];
            v[less] = ak;
            less += 1;
        } else if cmp(&ak, &pivot2) == Ordering::Equal {
            match retreat(v, great, k, |x| cmp(x, &pivot2) == Ordering::Equal) {
                Some(g) => great = g,
                None => {
                    great = k - 1;
                    break;
                }
            }
            if cmp(&v[great], &pivot1) == Ordering::Equal {
                // Relocate the resident element rather than writing `pivot1`: values that
                // compare equal need not be identical (signed zeros, custom comparators).
                v[k] = v[less];
                v[less] = v[great];
                less += 1;
            } else {
                v[k] = v[great];
            }
            v[great] = ak;
            great -= 1;
        }
        k += 1;
    }
    (less, great)
}

/// Partitions `v[seg.lo..seg.hi]` 3-way around the element at `median`.
///
/// ```text
///   left part    center part              right part
/// +-------------------------------------------------+
/// |  < pivot  |   == pivot   |     ?    |  > pivot  |
/// +-------------------------------------------------+
///              ^              ^        ^
///             less            k      great
/// ```
///
/// The `== pivot` block is already sorted, so only the outer parts are returned.
fn partition_single<T, F>(v: &mut [T], seg: Segment, median: usize, cmp: &mut F) -> [Segment; 2]
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (left, right) = (seg.lo, seg.hi - 1);
    let pivot = v[median];

    let mut less = left;
    let mut great = right;
    let mut right_lo = None;
    let mut k = less;
    while k <= great {
        let ak = v[k];
        match cmp(&ak, &pivot) {
            Ordering::Equal => {}
            Ordering::Less => {
                v[k] = v[less];
                v[less] = ak;
                less += 1;
            }
            Ordering::Greater => {
                match retreat(v, great, k, |x| cmp(x, &pivot) == Ordering::Greater) {
                    Some(g) => great = g,
                    None => {
                        right_lo = Some(k);
                        break;
                    }
                }
                if cmp(&v[great], &pivot) == Ordering::Less {
                    v[k] = v[less];
                    v[less] = v[great];
                    less += 1;
                } else {
                    // Equal to the pivot: move the resident value, not `pivot` itself.
                    v[k] = v[great];
                }
                v[great] = ak;
                // Reachable only when the comparator answers differently for `ak` twice.
                if great == k {
                    break;
                }
                great -= 1;
            }
        }
        k += 1;
    }
    let right_lo = right_lo.unwrap_or(great + 1);

    [
        Segment { lo: left, hi: less, leftmost: seg.leftmost },
        Segment { lo: right_lo, hi: right + 1, leftmost: false },
    ]
}
