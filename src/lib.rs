//! # Assembly of sparse matrices from coordinate lists
//!
//! A matrix described as three parallel sequences of row indices, column indices and values is
//! turned into a compressed sparse matrix. Entries that share a coordinate are summed.
//!
//! The three entry points are [`sparse`], which infers the extent of the matrix from the largest
//! indices, [`sparse_with_shape`], which takes the extent explicitly, and the deprecated dense
//! extraction in [`algorithm::assembly`].
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::assembly::{sparse, sparse_with_shape, sparse_with_shape_into, sparse_with_shape_unchecked};
pub use data::linear_algebra::matrix::{ColumnMajor, DenseMatrix, Order, RowMajor, SparseMatrix};
pub use data::linear_algebra::triplet::Triplet;
pub use error::{AssemblyError, Axis};
