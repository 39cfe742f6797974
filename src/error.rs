//! Error types for Dualsort.
//!
//! The sorting engine itself cannot fail. The only errors come from the validating entry
//! points, which check a caller-supplied index range before touching the slice.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for the validating entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// The inclusive range `[left, right]` does not fit in a slice of `len` elements.
    RangeOutOfBounds {
        /// First index of the range.
        left: usize,
        /// Last index of the range, inclusive.
        right: usize,
        /// Length of the slice.
        len: usize,
    },
}

impl SortError {
    /// Checks that `[left, right]` lies within a slice of `len` elements.
    ///
    /// A range with `right < left` is empty and always valid.
    pub(crate) fn check_range(
        left: usize,
        right: usize,
        len: usize,
    ) -> std::result::Result<(), Self> {
        if right >= left && right >= len {
            return Err(SortError::RangeOutOfBounds { left, right, len });
        }
        Ok(())
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::RangeOutOfBounds { left, right, len } => write!(
                f,
                "Range out of bounds: [{left}, {right}] does not fit in a slice of length {len}"
            ),
        }
    }
}

impl Error for SortError {}
