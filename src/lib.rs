//! # Dualsort
//!
//! `dualsort` is a comparator-driven, in-place sorting library for fixed-width scalars:
//! integers of every width, `f32`/`f64`, `char` and `bool`.
//!
//! It implements **Dual-Pivot Quicksort**, which partitions around two pivots at a time and
//! is faster on average than a classic single-pivot quicksort, combined with an adaptive
//! run merger for inputs that are already highly structured.
//!
//! ## Key Features
//!
//! - **Any Comparator**: Every entry point takes a three-way comparator, so descending orders,
//!   key projections and custom float orders need no wrapper types.
//! - **Adaptive Strategy**: Long inputs are scanned once for monotonic runs. Sorted,
//!   reverse-sorted and few-run inputs are merged in linear-ish time instead of partitioned.
//! - **Duplicate Aware**: Samples that collide switch partitioning to a 3-way scheme, and
//!   oversized middle partitions are squeezed, so heavy duplication stays cheap.
//! - **Bounded Stack**: Quicksort recurses into the smaller partitions only, keeping stack
//!   depth logarithmic.
//! - **Range Sorting**: [`sort_range_by`] sorts `v[left..=right]` without touching the rest
//!   of the slice, optionally merging through a caller-supplied workspace.
//!
//! ## Usage
//!
//! ```rust
//! use dualsort::{sort, sort_by};
//!
//! let mut data = [5, 4, 3, 2, 1];
//! sort(&mut data);
//! assert_eq!(data, [1, 2, 3, 4, 5]);
//!
//! let mut floats = [0.5f64, -0.0, 0.0, -1.5];
//! sort_by(&mut floats, |a, b| b.total_cmp(a));
//! assert_eq!(floats, [0.5, 0.0, -0.0, -1.5]);
//! ```
//!
//! Searching the sorted output uses the same comparator:
//!
//! ```rust
//! use dualsort::{binary_search_by, sort_by};
//!
//! let reverse = |a: &i64, b: &i64| b.cmp(a);
//! let mut data = [3i64, 9, 1, 7];
//! sort_by(&mut data, reverse);
//!
//! assert_eq!(binary_search_by(&data, &7, reverse), Ok(1));
//! assert_eq!(binary_search_by(&data, &5, reverse), Err(2));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: O(N) for sorted, reverse-sorted or few-run inputs.
//! - **Average Case**: O(N log N) with fewer comparisons and swaps than single-pivot quicksort.
//! - **Memory Overhead**: None for quicksort; the merge path needs one buffer the size of the
//!   range, borrowed from the caller or allocated per call.
//!
//! Sorting is unstable: elements that compare equal may be reordered.

pub mod algo;
pub mod core;
pub mod error;
mod insertion;
mod quicksort;
mod runs;
pub mod search;

pub use crate::algo::{
    sort, sort_by, sort_range_by, sort_range_with_workspace, try_sort_range_by,
};
pub use crate::core::Scalar;
pub use crate::error::SortError;
pub use crate::search::{binary_search_by, binary_search_range_by};

pub mod prelude {
    pub use crate::algo::{
        sort, sort_by, sort_range_by, sort_range_with_workspace, try_sort_range_by,
    };
    pub use crate::core::Scalar;
    pub use crate::error::SortError;
    pub use crate::search::{binary_search_by, binary_search_range_by};
}
