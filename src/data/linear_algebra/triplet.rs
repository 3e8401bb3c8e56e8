//! # Triplets
//!
//! One entry of a coordinate list.

/// A single contribution `value` to the matrix entry at (`row`, `column`).
///
/// Several triplets may share a coordinate; their values are summed during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet<F> {
    /// Row index, starting at `0`.
    pub row: usize,
    /// Column index, starting at `0`.
    pub column: usize,
    /// The contribution.
    pub value: F,
}

impl<F> Triplet<F> {
    /// Create a new triplet.
    #[must_use]
    pub const fn new(row: usize, column: usize, value: F) -> Self {
        Self { row, column, value }
    }
}

impl<F> From<(usize, usize, F)> for Triplet<F> {
    fn from((row, column, value): (usize, usize, F)) -> Self {
        Self::new(row, column, value)
    }
}
