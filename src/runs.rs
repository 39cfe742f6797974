//! Run detection and adaptive merging for large ranges.
//!
//! Before committing to quicksort, a large range is scanned once and split into maximal
//! monotonic runs. Descending runs are reversed on the spot. If the range turns out to be a
//! handful of long runs, they are merged pairwise, ping-ponging between the range and a
//! scratch buffer. Too many runs, or an overly long flat stretch, hands the whole range to
//! quicksort instead.

use crate::core::{MAX_RUN_COUNT, MAX_RUN_LENGTH, Scratch};
use crate::quicksort::quicksort;
use cuneiform::cuneiform;
use log::trace;
use std::cmp::Ordering;

/// Outcome of probing a range for runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The range is a single non-decreasing run.
    Sorted,
    /// The range is not structured enough for merging.
    Unstructured,
    /// The range splits into this many non-decreasing runs, recorded in the run table.
    Runs(usize),
}

// Cache-aligned run boundaries: `starts[i]` is where run `i` begins and `starts[count]` is
// the end of the range.
#[cuneiform]
pub(crate) struct RunTable {
    starts: [usize; MAX_RUN_COUNT + 1],
}

impl RunTable {
    pub(crate) fn new() -> Self {
        RunTable {
            starts: [0; MAX_RUN_COUNT + 1],
        }
    }
}

/// Sorts `v` by merging its runs, or by quicksort when it has too little structure.
///
/// `workspace` is used as the merge buffer when it can hold `v.len()` elements.
pub(crate) fn merge_sort<T, F>(v: &mut [T], workspace: Option<&mut [T]>, cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs = RunTable::new();
    match probe(v, &mut runs, cmp) {
        Probe::Sorted => trace!("{} elements already sorted", v.len()),
        Probe::Unstructured => quicksort(v, 0, v.len(), true, cmp),
        Probe::Runs(count) => {
            trace!("merging {count} runs over {} elements", v.len());
            merge_runs(v, &mut runs, count, workspace, cmp);
        }
    }
}

/// Scans `v` left to right, reversing descending runs and recording where each run starts.
pub(crate) fn probe<T, F>(v: &mut [T], runs: &mut RunTable, cmp: &mut F) -> Probe
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return Probe::Sorted;
    }
    let right = len - 1;
    let starts = &mut runs.starts;

    let mut count = 0;
    starts[0] = 0;
    let mut k = 0;
    while k < right {
        match cmp(&v[k], &v[k + 1]) {
            Ordering::Less => {
                k += 1;
                while k <= right && cmp(&v[k - 1], &v[k]) != Ordering::Greater {
                    k += 1;
                }
            }
            Ordering::Greater => {
                k += 1;
                while k <= right && cmp(&v[k - 1], &v[k]) != Ordering::Less {
                    k += 1;
                }
                v[starts[count]..k].reverse();
            }
            Ordering::Equal => {
                let mut budget = MAX_RUN_LENGTH;
                k += 1;
                while k <= right && cmp(&v[k - 1], &v[k]) == Ordering::Equal {
                    budget -= 1;
                    if budget == 0 {
                        trace!("flat run longer than {MAX_RUN_LENGTH} at {k}, falling back");
                        return Probe::Unstructured;
                    }
                    k += 1;
                }
            }
        }

        count += 1;
        if count == MAX_RUN_COUNT {
            trace!("{MAX_RUN_COUNT} runs before index {k}, falling back");
            return Probe::Unstructured;
        }
        starts[count] = k;
    }

    if starts[count] == right {
        // The last run holds a single element.
        count += 1;
        starts[count] = len;
    } else if count == 1 {
        return Probe::Sorted;
    }
    Probe::Runs(count)
}

/// Which buffer currently holds the authoritative runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Input,
    Scratch,
}

impl Side {
    fn flip(self) -> Self {
        match self {
            Side::Input => Side::Scratch,
            Side::Scratch => Side::Input,
        }
    }
}

/// Merges `count >= 2` adjacent non-decreasing runs of `v` into one.
pub(crate) fn merge_runs<T, F>(
    v: &mut [T],
    runs: &mut RunTable,
    mut count: usize,
    workspace: Option<&mut [T]>,
    cmp: &mut F,
) where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    // Each pass halves the run count. Start on whichever side makes the last pass land in `v`.
    let mut odd = false;
    let mut n = 1;
    loop {
        n <<= 1;
        if n >= count {
            break;
        }
        odd = !odd;
    }

    // Starting from the scratch side needs it to hold the input first.
    let mut scratch = Scratch::for_range(v, workspace, !odd);
    let work = scratch.as_mut_slice();
    let mut source = if odd { Side::Input } else { Side::Scratch };

    let starts = &mut runs.starts;
    while count > 1 {
        count = match source {
            Side::Input => merge_pass(v, work, starts, count, cmp),
            Side::Scratch => merge_pass(work, v, starts, count, cmp),
        };
        source = source.flip();
    }
}

/// Merges runs pairwise from `src` into `dst` and compacts the run table.
///
/// Returns the new run count. An odd trailing run is copied over unchanged.
fn merge_pass<T, F>(
    src: &[T],
    dst: &mut [T],
    starts: &mut [usize; MAX_RUN_COUNT + 1],
    count: usize,
    cmp: &mut F,
) -> usize
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let end = starts[count];
    let mut last = 0;

    let mut k = 2;
    while k <= count {
        let (lo, mid, hi) = (starts[k - 2], starts[k - 1], starts[k]);
        let (mut p, mut q) = (lo, mid);
        for slot in &mut dst[lo..hi] {
            // Ties go to the left run.
            if q >= hi || (p < mid && cmp(&src[p], &src[q]) != Ordering::Greater) {
                *slot = src[p];
                p += 1;
            } else {
                *slot = src[q];
                q += 1;
            }
        }
        last += 1;
        starts[last] = hi;
        k += 2;
    }

    if count % 2 != 0 {
        let lo = starts[count - 1];
        dst[lo..end].copy_from_slice(&src[lo..end]);
        last += 1;
        starts[last] = end;
    }
    last
}
