//! # Extraction from dense matrices
//!
//! Kept for callers that still assemble a sparse matrix out of a dense one through the triplet
//! route. New code should use `DenseMatrix::to_sparse`.
use tracing::warn;

use crate::algorithm::assembly::sparse_with_shape_unchecked;
use crate::data::linear_algebra::matrix::{DenseMatrix, Order, SparseMatrix};
use crate::data::linear_algebra::traits::Element;

/// Overwrite `matrix` with the non-zero cells of `dense`.
///
/// See `dense_to_sparse`.
#[deprecated(since = "0.1.0", note = "use `DenseMatrix::to_sparse` instead")]
pub fn dense_into_sparse<F, O>(dense: &DenseMatrix<F>, matrix: &mut SparseMatrix<F, O>)
where
    F: Element,
    O: Order,
{
    #[allow(deprecated)]
    let assembled = dense_to_sparse(dense);
    *matrix = assembled;
}

/// Create a sparse matrix holding the non-zero cells of `dense`.
///
/// Cells are visited row by row, collected as a coordinate list and assembled. The result has the
/// extent of `dense`.
#[deprecated(since = "0.1.0", note = "use `DenseMatrix::to_sparse` instead")]
#[must_use]
pub fn dense_to_sparse<F, O>(dense: &DenseMatrix<F>) -> SparseMatrix<F, O>
where
    F: Element,
    O: Order,
{
    warn!(
        nr_rows = dense.nr_rows(),
        nr_columns = dense.nr_columns(),
        "dense extraction through triplets is deprecated, use DenseMatrix::to_sparse instead"
    );

    let mut rows = Vec::new();
    let mut columns = Vec::new();
    let mut values = Vec::new();
    for i in 0..dense.nr_rows() {
        for (j, value) in dense.row(i).iter().enumerate() {
            if !value.is_zero() {
                rows.push(i);
                columns.push(j);
                values.push(value.clone());
            }
        }
    }

    sparse_with_shape_unchecked(&rows, &columns, &values, dense.nr_rows(), dense.nr_columns())
}
