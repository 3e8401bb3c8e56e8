//! # Matrix implementations
//!
//! A compressed sparse matrix, which is what assembly produces, and a plain dense matrix, which
//! can be converted into one.
//!
//! Sparse matrices store their entries either column by column or row by row. Which one is
//! decided at compile time by the `Order` type parameter, so that code written for one storage
//! order can't accidentally be handed the other.
use std::fmt::Debug;

pub use dense::Dense as DenseMatrix;
pub use sparse::Sparse as SparseMatrix;

mod dense;
mod sparse;

/// Storage order of a sparse matrix.
///
/// The "major" dimension is the one that is compressed: columns for `ColumnMajor`, rows for
/// `RowMajor`. Entries are grouped by their major index and sorted by their minor index within
/// each group.
pub trait Order: Copy + Debug + Eq {
    /// Number of major groups of a matrix with the given extent.
    fn nr_major(nr_rows: usize, nr_columns: usize) -> usize;
    /// Translate a (row, column) coordinate into a (major, minor) coordinate.
    fn to_major_minor(row: usize, column: usize) -> (usize, usize);
    /// Translate a (major, minor) coordinate into a (row, column) coordinate.
    fn to_row_column(major: usize, minor: usize) -> (usize, usize);
}

/// Entries grouped by column, sorted by row within each column.
///
/// This is the default order of a `SparseMatrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnMajor;

impl Order for ColumnMajor {
    fn nr_major(_nr_rows: usize, nr_columns: usize) -> usize {
        nr_columns
    }

    fn to_major_minor(row: usize, column: usize) -> (usize, usize) {
        (column, row)
    }

    fn to_row_column(major: usize, minor: usize) -> (usize, usize) {
        (minor, major)
    }
}

/// Entries grouped by row, sorted by column within each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowMajor;

impl Order for RowMajor {
    fn nr_major(nr_rows: usize, _nr_columns: usize) -> usize {
        nr_rows
    }

    fn to_major_minor(row: usize, column: usize) -> (usize, usize) {
        (row, column)
    }

    fn to_row_column(major: usize, minor: usize) -> (usize, usize) {
        (major, minor)
    }
}
