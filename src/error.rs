//! # Error reporting for matrix assembly
//!
//! Everything that can be wrong with a coordinate list or with dense input data. These are all
//! problems with the input, never with the state of the crate.
use std::fmt;
use std::fmt::Display;

use thiserror::Error;

/// Result type used by all checked assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Which of the two index sequences of a coordinate list is meant.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// An `AssemblyError` is returned when input can't be assembled into a matrix.
///
/// No partial result is ever produced: when an error is returned, any output argument is left as
/// it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// The row indices, column indices and values don't have the same length.
    #[error("coordinate list has {rows} row indices, {columns} column indices and {values} values")]
    LengthMismatch {
        /// Number of row indices.
        rows: usize,
        /// Number of column indices.
        columns: usize,
        /// Number of values.
        values: usize,
    },
    /// An index is negative, or too large to be represented as a `usize`.
    #[error("{axis} index at position {position} is negative or does not fit in a usize")]
    InvalidIndex {
        /// Sequence containing the index.
        axis: Axis,
        /// Position of the index within its sequence.
        position: usize,
    },
    /// An index lies outside of the extent of the matrix.
    #[error("{axis} index {index} at position {position} is out of range for extent {extent}")]
    OutOfRange {
        /// Sequence containing the index.
        axis: Axis,
        /// Position of the index within its sequence.
        position: usize,
        /// The offending index.
        index: usize,
        /// Number of rows or columns of the matrix.
        extent: usize,
    },
    /// The extent of a matrix can't be inferred from a coordinate list without entries.
    #[error("cannot infer the extent of an empty coordinate list")]
    Empty,
    /// Dense data in which not all rows have the same length.
    #[error("row {row} of the dense data has {len} values, expected {expected}")]
    RaggedRow {
        /// Index of the first row with a deviating length.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
}
