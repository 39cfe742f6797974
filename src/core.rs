//! Core traits and types for Dualsort.
//!
//! This module defines:
//! - [`Scalar`]: The fixed-width element types the engine sorts, with their default ordering.
//! - The tuning constants that choose between insertion sort, quicksort and run merging.
//! - Scratch: Internal merge buffer, either borrowed from the caller or owned by the call.

use std::cmp::Ordering;

/// The maximum number of runs the prober records before giving up on merging.
pub const MAX_RUN_COUNT: usize = 67;

/// The maximum length of a run of equal elements tolerated by the prober.
///
/// Longer flat stretches send the whole range to quicksort, which handles
/// duplicates through its 3-way partition.
pub const MAX_RUN_LENGTH: usize = 33;

/// Ranges with at most this many elements are sorted by quicksort without probing for runs.
pub const QUICKSORT_THRESHOLD: usize = 286;

/// Ranges with fewer elements than this are sorted by insertion sort.
pub const INSERTION_SORT_THRESHOLD: usize = 47;

/// A fixed-width scalar value that can be sorted by the engine.
///
/// The engine itself only needs values to be `Copy`; this trait supplies the
/// ordering used by [`crate::sort`] when the caller has no comparator of their own.
///
/// # Examples
///
/// ```
/// use dualsort::core::Scalar;
/// use std::cmp::Ordering;
///
/// assert_eq!(3u8.natural_cmp(&7), Ordering::Less);
/// assert_eq!((-0.0f64).natural_cmp(&0.0), Ordering::Less);
/// ```
pub trait Scalar: Copy {
    /// Returns the default total order between `self` and `other`.
    fn natural_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_scalar_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_scalar_ord!(
    i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, char, bool
);

// Floats have several bit patterns that `==` treats alike (signed zeros, NaN payloads).
// `total_cmp` tells them apart, so the default order is a total one.
impl Scalar for f32 {
    #[inline(always)]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Merge buffer for a single top-level call.
///
/// Borrows the caller's workspace when it has room for the whole range,
/// otherwise owns a private buffer of exactly the range length.
pub(crate) enum Scratch<'a, T> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<'a, T: Copy> Scratch<'a, T> {
    /// Picks the caller's workspace if it can hold `src.len()` elements.
    ///
    /// With `mirror` set the scratch starts as a copy of `src`, otherwise its
    /// contents are unspecified.
    pub(crate) fn for_range(src: &[T], workspace: Option<&'a mut [T]>, mirror: bool) -> Self {
        let needed = src.len();
        match workspace {
            Some(work) if work.len() >= needed => {
                let work = &mut work[..needed];
                if mirror {
                    work.copy_from_slice(src);
                }
                Scratch::Borrowed(work)
            }
            _ => {
                log::trace!("allocating {needed} element merge buffer");
                match src.first() {
                    Some(&fill) if !mirror => Scratch::Owned(vec![fill; needed]),
                    _ => Scratch::Owned(src.to_vec()),
                }
            }
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Scratch::Borrowed(work) => work,
            Scratch::Owned(buf) => buf.as_mut_slice(),
        }
    }
}
