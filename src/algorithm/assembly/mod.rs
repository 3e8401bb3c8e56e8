//! # Assembly of sparse matrices from coordinate lists
//!
//! A coordinate list consists of three parallel sequences: row indices, column indices and
//! values. Entry `k` of the list contributes `values[k]` to the matrix entry at
//! (`rows[k]`, `columns[k]`). Contributions that share a coordinate are summed.
//!
//! The checked entry points validate their input and report problems as an `AssemblyError`. The
//! unchecked entry point skips that validation for callers that already know their input to be
//! valid.
use itertools::izip;
use num_traits::PrimInt;

use crate::algorithm::utilities::{check_lengths, extent, to_index};
use crate::data::linear_algebra::matrix::{Order, SparseMatrix};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::triplet::Triplet;
use crate::error::{Axis, Result};

#[cfg(feature = "deprecated-dense")]
#[allow(deprecated)]
pub use dense::{dense_into_sparse, dense_to_sparse};

#[cfg(feature = "deprecated-dense")]
mod dense;

/// Assemble a sparse matrix just large enough to contain all entries of a coordinate list.
///
/// The matrix has `max(rows) + 1` rows and `max(columns) + 1` columns.
///
/// # Arguments
///
/// * `rows`: Row index of each entry. Any primitive integer type.
/// * `columns`: Column index of each entry. Any primitive integer type, not necessarily the same
/// as that of `rows`.
/// * `values`: Value of each entry.
///
/// # Errors
///
/// If the sequences differ in length, if there are no entries at all, or if an index is
/// negative.
///
/// # Examples
///
/// ```
/// use relp_triplets::{sparse, SparseMatrix};
///
/// let m: SparseMatrix<i32> = sparse(&[0_u8, 2, 0], &[1_i64, 0, 1], &[2, 7, 3]).unwrap();
/// assert_eq!(m.shape(), (3, 2));
/// assert_eq!(m.get(0, 1), Some(&5));
/// ```
///
/// Indices are integers, a fractional index doesn't compile:
///
/// ```compile_fail
/// use relp_triplets::{sparse, SparseMatrix};
///
/// let m: SparseMatrix<i32> = sparse(&[-0.5_f64], &[0_i32], &[1]).unwrap();
/// ```
pub fn sparse<I, J, F, O>(rows: &[I], columns: &[J], values: &[F]) -> Result<SparseMatrix<F, O>>
where
    I: PrimInt,
    J: PrimInt,
    F: Element,
    O: Order,
{
    check_lengths(rows.len(), columns.len(), values.len())?;
    let nr_rows = extent(rows, Axis::Row)?;
    let nr_columns = extent(columns, Axis::Column)?;

    sparse_with_shape(rows, columns, values, nr_rows, nr_columns)
}

/// Assemble a sparse matrix of extent `nr_rows` x `nr_columns` from a coordinate list.
///
/// # Arguments
///
/// * `rows`: Row index of each entry. Any primitive integer type.
/// * `columns`: Column index of each entry. Any primitive integer type, not necessarily the same
/// as that of `rows`.
/// * `values`: Value of each entry.
/// * `nr_rows`: Number of rows of the matrix. All row indices need to be smaller.
/// * `nr_columns`: Number of columns of the matrix. All column indices need to be smaller.
///
/// # Return value
///
/// A matrix storing one entry per distinct coordinate, with the sum of the values at that
/// coordinate. An empty coordinate list results in a matrix without stored entries.
///
/// # Errors
///
/// If the sequences differ in length, or if an index is negative or out of range. The first
/// offending index is reported.
pub fn sparse_with_shape<I, J, F, O>(
    rows: &[I],
    columns: &[J],
    values: &[F],
    nr_rows: usize,
    nr_columns: usize,
) -> Result<SparseMatrix<F, O>>
where
    I: PrimInt,
    J: PrimInt,
    F: Element,
    O: Order,
{
    check_lengths(rows.len(), columns.len(), values.len())?;

    let mut triplets = Vec::with_capacity(values.len());
    for (position, (row, column, value)) in izip!(rows, columns, values).enumerate() {
        let row = to_index(row, Axis::Row, position, nr_rows)?;
        let column = to_index(column, Axis::Column, position, nr_columns)?;
        triplets.push(Triplet::new(row, column, value.clone()));
    }

    Ok(SparseMatrix::from_triplets_unchecked(triplets, nr_rows, nr_columns))
}

/// Assemble into an existing matrix, which is resized to `nr_rows` x `nr_columns`.
///
/// See `sparse_with_shape`. Any previous contents of `matrix` are discarded.
///
/// # Errors
///
/// As `sparse_with_shape`. The matrix is not modified when an error is returned.
pub fn sparse_with_shape_into<I, J, F, O>(
    rows: &[I],
    columns: &[J],
    values: &[F],
    nr_rows: usize,
    nr_columns: usize,
    matrix: &mut SparseMatrix<F, O>,
) -> Result<()>
where
    I: PrimInt,
    J: PrimInt,
    F: Element,
    O: Order,
{
    *matrix = sparse_with_shape(rows, columns, values, nr_rows, nr_columns)?;

    Ok(())
}

/// Assemble a sparse matrix from a coordinate list that is known to be valid.
///
/// The input is only validated in debug builds. It is the caller's responsibility that the
/// sequences have equal length and that all indices lie within the extent.
///
/// # Panics
///
/// If an index is out of range, also in release builds. If the sequences differ in length, the
/// surplus of the longer sequences is ignored in release builds.
#[must_use]
pub fn sparse_with_shape_unchecked<F, O>(
    rows: &[usize],
    columns: &[usize],
    values: &[F],
    nr_rows: usize,
    nr_columns: usize,
) -> SparseMatrix<F, O>
where
    F: Element,
    O: Order,
{
    debug_assert_eq!(rows.len(), values.len());
    debug_assert_eq!(columns.len(), values.len());

    let triplets = izip!(rows, columns, values)
        .map(|(&row, &column, value)| Triplet::new(row, column, value.clone()))
        .collect();

    SparseMatrix::from_triplets_unchecked(triplets, nr_rows, nr_columns)
}
