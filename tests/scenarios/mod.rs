//! # Small worked examples
//!
//! Each coordinate list is given together with the dense matrix it describes.
use relp_triplets::DenseMatrix;

/// # Assembly of the worked examples
mod test;

/// Build a dense matrix from literal rows.
fn dense<F>(rows: Vec<Vec<F>>) -> DenseMatrix<F> {
    DenseMatrix::new(rows).unwrap()
}
