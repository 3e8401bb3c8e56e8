//! # Dense matrix
//!
//! Every cell is stored, row by row.
use std::fmt;
use std::fmt::Display;

use crate::data::linear_algebra::matrix::{Order, SparseMatrix};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::triplet::Triplet;
use crate::error::{AssemblyError, Result};

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> Dense<F> {
    /// Create a `DenseMatrix` from rows of values.
    ///
    /// # Errors
    ///
    /// If not all rows have the same length.
    pub fn new(data: Vec<Vec<F>>) -> Result<Self> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        if let Some((row, values)) = data.iter().enumerate()
            .find(|(_, values)| values.len() != nr_columns) {
            return Err(AssemblyError::RaggedRow { row, len: values.len(), expected: nr_columns });
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

impl<F: Element> Dense<F> {
    /// Create a dense matrix of zeros of dimension `nr_rows` x `nr_columns`.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![vec![F::zero(); nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a sparse matrix of the same extent holding exactly the non-zero cells.
    ///
    /// Cells are visited row by row.
    pub fn to_sparse<O: Order>(&self) -> SparseMatrix<F, O> {
        let triplets = self.data.iter().enumerate()
            .flat_map(|(i, row)| {
                row.iter().enumerate()
                    .filter(|(_, value)| !value.is_zero())
                    .map(move |(j, value)| Triplet::new(i, j, value.clone()))
            })
            .collect();

        SparseMatrix::from_triplets_unchecked(triplets, self.nr_rows, self.nr_columns)
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
