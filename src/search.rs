//! Binary search over slices sorted by the same comparator as [`crate::sort_by`].

use crate::error::SortError;
use std::cmp::Ordering;

/// Searches a slice sorted by `cmp` for `key`.
///
/// Returns `Ok(index)` of a matching element, or `Err(index)` of the position where `key`
/// could be inserted to keep the slice sorted. With duplicate matches any of them may be
/// returned.
///
/// # Examples
///
/// ```
/// use dualsort::binary_search_by;
///
/// let data = [6, 5, 4, 3, 2, 1];
/// let reverse = |a: &i32, b: &i32| b.cmp(a);
///
/// assert_eq!(binary_search_by(&data, &4, reverse), Ok(2));
/// assert_eq!(binary_search_by(&data, &7, reverse), Err(0));
/// assert_eq!(binary_search_by(&data, &0, reverse), Err(6));
/// ```
pub fn binary_search_by<T, F>(v: &[T], key: &T, cmp: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    search(v, 0, v.len(), key, cmp)
}

/// Searches the inclusive range `[left, right]` of a slice sorted by `cmp` for `key`.
///
/// Indices in the result are relative to the whole slice. A range with `right < left` is
/// empty and yields `Err(left)`.
pub fn binary_search_range_by<T, F>(
    v: &[T],
    left: usize,
    right: usize,
    key: &T,
    cmp: F,
) -> Result<Result<usize, usize>, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    SortError::check_range(left, right, v.len())?;
    if right < left {
        return Ok(Err(left));
    }
    Ok(search(v, left, right + 1, key, cmp))
}

fn search<T, F>(v: &[T], mut lo: usize, mut hi: usize, key: &T, mut cmp: F) -> Result<usize, usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    while lo < hi {
        let mid = lo + (hi - lo - 1) / 2;
        match cmp(&v[mid], key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(lo)
}
