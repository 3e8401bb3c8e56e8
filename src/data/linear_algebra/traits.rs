//! # Traits for elements in matrices
//!
//! Assembly needs very little of the values it moves around: a zero to compare with and to start
//! sums from, addition to merge duplicate coordinates, and the ability to copy a value out of a
//! borrowed input. Integers, floats, complex numbers and exact rationals all qualify.
use num_traits::Zero;

/// Element of a `SparseMatrix` or `DenseMatrix`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element: Zero + Clone {
}
impl<T: Zero + Clone> Element for T {
}
