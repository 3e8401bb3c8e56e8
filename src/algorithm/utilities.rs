//! # Utilities
//!
//! Helper functions for reading coordinate lists.
use num_traits::PrimInt;

use crate::error::{AssemblyError, Axis, Result};

/// Check that the three sequences of a coordinate list have equal length.
pub(crate) fn check_lengths(rows: usize, columns: usize, values: usize) -> Result<()> {
    if rows == columns && columns == values {
        Ok(())
    } else {
        Err(AssemblyError::LengthMismatch { rows, columns, values })
    }
}

/// Convert an index from a coordinate list to a `usize` within `0..extent`.
///
/// # Arguments
///
/// * `index` - Index of any primitive integer type. Negative values are rejected.
/// * `axis` - Sequence the index was taken from, used for error reporting.
/// * `position` - Position of the index within its sequence, used for error reporting.
/// * `extent` - Number of rows or columns.
pub(crate) fn to_index<I: PrimInt>(
    index: &I,
    axis: Axis,
    position: usize,
    extent: usize,
) -> Result<usize> {
    let index = index.to_usize().ok_or(AssemblyError::InvalidIndex { axis, position })?;

    if index < extent {
        Ok(index)
    } else {
        Err(AssemblyError::OutOfRange { axis, position, index, extent })
    }
}

/// The smallest extent containing all indices, that is, the largest index plus one.
///
/// # Errors
///
/// If there are no indices, or if one of them is negative or equal to `usize::MAX`.
pub(crate) fn extent<I: PrimInt>(indices: &[I], axis: Axis) -> Result<usize> {
    let mut largest = None;
    for (position, index) in indices.iter().enumerate() {
        let index = index.to_usize()
            .filter(|&index| index < usize::MAX)
            .ok_or(AssemblyError::InvalidIndex { axis, position })?;
        largest = Some(largest.map_or(index, |largest: usize| largest.max(index)));
    }

    largest.map(|largest| largest + 1).ok_or(AssemblyError::Empty)
}
