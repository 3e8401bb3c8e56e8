//! # Linear algebra primitives
//!
//! Matrices in a dense or a compressed sparse format, and the triplets that sparse matrices are
//! assembled from.

pub mod matrix;
pub mod traits;
pub mod triplet;
mod utilities;

/// A `(minor index, value)` pair inside a single row or column of a sparse matrix.
pub type SparseTuple<F> = (usize, F);
