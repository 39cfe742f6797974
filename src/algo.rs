//! Public sorting entry points.
//!
//! Every entry point funnels into one engine, chosen by range length:
//! - **Dual-Pivot Quicksort**: Ranges of at most [`QUICKSORT_THRESHOLD`] elements, and any
//!   larger range without enough structure.
//! - **Adaptive Merge Sort**: Larger ranges made of a few long monotonic runs.
//! - **Insertion Sort**: Small partitions inside quicksort.
//!
//! The main entry points are [`sort`] and [`sort_by`].

use crate::core::{QUICKSORT_THRESHOLD, Scalar};
use crate::error::SortError;
use crate::quicksort::quicksort;
use crate::runs::merge_sort;
use log::trace;
use std::cmp::Ordering;

/// Sorts the slice in ascending order of [`Scalar::natural_cmp`].
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place. Long
/// inputs made of a few monotonic runs are merged through a temporary buffer.
///
/// # Examples
///
/// ```
/// use dualsort::sort;
///
/// let mut data = [3, 1, 2];
/// sort(&mut data);
///
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn sort<T: Scalar>(v: &mut [T]) {
    sort_by(v, T::natural_cmp);
}

/// Sorts the slice with a comparator function.
///
/// The comparator must define a total order. If it does not, the slice ends up in some
/// unspecified order, but the call still returns normally and never reads or writes
/// outside the slice.
///
/// # Arguments
///
/// * `v` - The slice to be sorted.
/// * `cmp` - Three-way comparison; `Less` means the first argument sorts first.
///
/// # Examples
///
/// ```
/// use dualsort::sort_by;
///
/// let mut data = [1, 2, 3];
/// sort_by(&mut data, |a, b| b.cmp(a));
///
/// assert_eq!(data, [3, 2, 1]);
/// ```
pub fn sort_by<T, F>(v: &mut [T], cmp: F)
where
    T: Scalar,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(v, None, cmp);
}

/// Sorts the inclusive range `v[left..=right]` with a comparator function.
///
/// Elements outside the range are never touched. A range with `right < left` is empty
/// and leaves the slice unchanged.
///
/// # Panics
///
/// Panics if the range is non-empty and `right >= v.len()`. Use [`try_sort_range_by`] to
/// get an error instead.
///
/// # Examples
///
/// ```
/// use dualsort::sort_range_by;
///
/// let mut data = [9, 4, 3, 2, 1, 0];
/// sort_range_by(&mut data, 1, 4, |a: &i32, b: &i32| a.cmp(b));
///
/// assert_eq!(data, [9, 1, 2, 3, 4, 0]);
/// ```
pub fn sort_range_by<T, F>(v: &mut [T], left: usize, right: usize, cmp: F)
where
    T: Scalar,
    F: FnMut(&T, &T) -> Ordering,
{
    if right < left {
        return;
    }
    sort_slice(&mut v[left..=right], None, cmp);
}

/// Sorts the inclusive range `v[left..=right]`, merging through a caller-supplied workspace.
///
/// The workspace is only needed when the range turns out to be made of long runs. It is
/// used when it holds at least `right - left + 1` elements; otherwise a private buffer of
/// exactly that size is allocated for the call. Slice it beforehand to choose an offset and
/// usable length. Its contents afterwards are unspecified.
///
/// # Panics
///
/// Panics if the range is non-empty and `right >= v.len()`.
///
/// # Examples
///
/// ```
/// use dualsort::sort_range_with_workspace;
///
/// let mut data: Vec<u32> = (0..1000).rev().collect();
/// let mut work = vec![0u32; 1024];
/// sort_range_with_workspace(&mut data, 0, 999, &mut work[24..], |a, b| a.cmp(b));
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn sort_range_with_workspace<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    workspace: &mut [T],
    cmp: F,
) where
    T: Scalar,
    F: FnMut(&T, &T) -> Ordering,
{
    if right < left {
        return;
    }
    sort_slice(&mut v[left..=right], Some(workspace), cmp);
}

/// Sorts the inclusive range `v[left..=right]`, validating the range first.
///
/// # Returns
///
/// [`SortError::RangeOutOfBounds`] if the range is non-empty and does not fit in `v`, in
/// which case the slice is left untouched.
///
/// # Examples
///
/// ```
/// use dualsort::{try_sort_range_by, SortError};
///
/// let mut data = [3, 1, 2];
/// assert!(try_sort_range_by(&mut data, 0, 2, |a: &i32, b: &i32| a.cmp(b)).is_ok());
/// assert_eq!(data, [1, 2, 3]);
///
/// let err = try_sort_range_by(&mut data, 1, 3, |a: &i32, b: &i32| a.cmp(b));
/// assert_eq!(err, Err(SortError::RangeOutOfBounds { left: 1, right: 3, len: 3 }));
/// ```
pub fn try_sort_range_by<T, F>(
    v: &mut [T],
    left: usize,
    right: usize,
    cmp: F,
) -> Result<(), SortError>
where
    T: Scalar,
    F: FnMut(&T, &T) -> Ordering,
{
    SortError::check_range(left, right, v.len())?;
    sort_range_by(v, left, right, cmp);
    Ok(())
}

/// Sorts the whole of `v`, picking quicksort or run merging by length.
fn sort_slice<T, F>(v: &mut [T], workspace: Option<&mut [T]>, mut cmp: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= QUICKSORT_THRESHOLD {
        quicksort(v, 0, len, true, &mut cmp);
        return;
    }
    trace!("probing {len} elements for runs");
    merge_sort(v, workspace, &mut cmp);
}
