//! # Compressed sparse matrix
//!
//! Three `Vec`s as back-end: where each major group starts, the minor index of every stored entry
//! and the value of every stored entry. Extent is fixed at creation.
use std::fmt;
use std::fmt::Display;
use std::marker::PhantomData;
use std::mem;
use std::ops::Range;

use tracing::{debug, trace};

use crate::data::linear_algebra::matrix::{ColumnMajor, DenseMatrix, Order, RowMajor};
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::triplet::Triplet;
use crate::data::linear_algebra::utilities::sum_duplicates;
use crate::error::{AssemblyError, Axis, Result};

/// A matrix that only stores the entries it was assembled from.
///
/// Indices start at `0`. Within a major group (a column for `ColumnMajor`, a row for `RowMajor`)
/// the minor indices are strictly increasing, so every coordinate is stored at most once.
///
/// A stored entry can be zero, when the contributions to its coordinate cancel out. Such entries
/// are kept until `eliminate_zeros` is called, and they count towards `nnz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sparse<F, O: Order = ColumnMajor> {
    /// Start of every major group in the other two fields, followed by the number of entries.
    major_start: Vec<usize>,
    minor_indices: Vec<usize>,
    values: Vec<F>,

    nr_rows: usize,
    nr_columns: usize,

    phantom_order: PhantomData<O>,
}

impl<F, O: Order> Sparse<F, O> {
    /// Create a matrix of extent `nr_rows` x `nr_columns` without any stored entries.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            major_start: vec![0; O::nr_major(nr_rows, nr_columns) + 1],
            minor_indices: Vec::new(),
            values: Vec::new(),

            nr_rows,
            nr_columns,

            phantom_order: PhantomData,
        }
    }

    fn nr_major(&self) -> usize {
        self.major_start.len() - 1
    }

    fn major_range(&self, major: usize) -> Range<usize> {
        self.major_start[major]..self.major_start[major + 1]
    }

    /// Get the value stored at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// `None` if nothing is stored at that coordinate.
    pub fn get(&self, row: usize, column: usize) -> Option<&F> {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        let (major, minor) = O::to_major_minor(row, column);
        let range = self.major_range(major);
        self.minor_indices[range.clone()].binary_search(&minor).ok()
            .map(|index| &self.values[range.start + index])
    }

    /// All (minor index, value) pairs of one major group, by increasing minor index.
    pub fn major(&self, major: usize) -> impl Iterator<Item=(usize, &F)> {
        debug_assert!(major < self.nr_major());

        let range = self.major_range(major);
        self.minor_indices[range.clone()].iter().copied().zip(&self.values[range])
    }

    /// Iterate over all stored entries as (`row`, `column`, `value`) in storage order.
    pub fn iter(&self) -> impl Iterator<Item=(usize, usize, &F)> {
        (0..self.nr_major()).flat_map(move |major| {
            self.major(major).map(move |(minor, value)| {
                let (row, column) = O::to_row_column(major, minor);
                (row, column, value)
            })
        })
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Number of rows and number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Get the number of stored entries, including stored zeros.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Start of each major group in `minor_indices` and `values`, followed by `nnz`.
    pub fn major_start(&self) -> &[usize] {
        &self.major_start
    }

    /// Minor index of each stored entry.
    pub fn minor_indices(&self) -> &[usize] {
        &self.minor_indices
    }

    /// Value of each stored entry.
    pub fn values(&self) -> &[F] {
        &self.values
    }
}

impl<F: Element, O: Order> Sparse<F, O> {
    /// Assemble a matrix from triplets, summing the values of triplets that share a coordinate.
    ///
    /// # Errors
    ///
    /// If a triplet lies outside of the extent. The first offending triplet is reported.
    pub fn from_triplets(
        triplets: Vec<Triplet<F>>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> Result<Self> {
        for (position, triplet) in triplets.iter().enumerate() {
            if triplet.row >= nr_rows {
                return Err(AssemblyError::OutOfRange {
                    axis: Axis::Row,
                    position,
                    index: triplet.row,
                    extent: nr_rows,
                });
            }
            if triplet.column >= nr_columns {
                return Err(AssemblyError::OutOfRange {
                    axis: Axis::Column,
                    position,
                    index: triplet.column,
                    extent: nr_columns,
                });
            }
        }

        Ok(Self::from_triplets_unchecked(triplets, nr_rows, nr_columns))
    }

    /// Assemble a matrix from triplets that are known to lie within the extent.
    ///
    /// Triplets are bucketed by their major index, each bucket is sorted by minor index and
    /// neighbouring duplicates are summed while the compressed representation is written.
    ///
    /// # Panics
    ///
    /// If a triplet lies outside of the extent, also in release builds.
    #[must_use]
    pub fn from_triplets_unchecked(
        triplets: Vec<Triplet<F>>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> Self {
        debug_assert!(triplets.iter().all(|triplet| triplet.row < nr_rows));
        debug_assert!(triplets.iter().all(|triplet| triplet.column < nr_columns));

        let nr_triplets = triplets.len();
        trace!(nr_triplets, nr_rows, nr_columns, "assembling sparse matrix from triplets");

        let (nr_major, nr_minor) = O::to_major_minor(nr_rows, nr_columns);
        let mut group_sizes = vec![0_usize; nr_major];
        for triplet in &triplets {
            let (major, minor) = O::to_major_minor(triplet.row, triplet.column);
            // The major index is bounds checked by the indexing below
            assert!(minor < nr_minor, "minor index {} out of range for extent {}", minor, nr_minor);
            group_sizes[major] += 1;
        }
        let mut groups: Vec<Vec<SparseTuple<F>>> = group_sizes.into_iter()
            .map(Vec::with_capacity)
            .collect();
        for Triplet { row, column, value } in triplets {
            let (major, minor) = O::to_major_minor(row, column);
            groups[major].push((minor, value));
        }

        let mut major_start = Vec::with_capacity(nr_major + 1);
        major_start.push(0);
        let mut minor_indices = Vec::with_capacity(nr_triplets);
        let mut values = Vec::with_capacity(nr_triplets);
        for mut group in groups {
            // Stable: duplicates are summed in input order
            group.sort_by_key(|&(minor, _)| minor);
            for (minor, value) in sum_duplicates(group) {
                minor_indices.push(minor);
                values.push(value);
            }
            major_start.push(values.len());
        }

        debug!(
            nr_triplets,
            nnz = values.len(),
            nr_merged = nr_triplets - values.len(),
            "assembled sparse matrix"
        );

        Self {
            major_start,
            minor_indices,
            values,

            nr_rows,
            nr_columns,

            phantom_order: PhantomData,
        }
    }

    /// Copy all stored entries out as triplets, in storage order.
    pub fn to_triplets(&self) -> Vec<Triplet<F>> {
        self.iter()
            .map(|(row, column, value)| Triplet::new(row, column, value.clone()))
            .collect()
    }

    /// Create a dense matrix with the same entries.
    pub fn to_dense(&self) -> DenseMatrix<F> {
        let mut dense = DenseMatrix::zeros(self.nr_rows, self.nr_columns);
        for (row, column, value) in self.iter() {
            dense.set_value(row, column, value.clone());
        }

        dense
    }

    /// Remove stored entries that are equal to zero.
    pub fn eliminate_zeros(&mut self) {
        let nr_stored = self.nnz();
        let minor_indices = mem::take(&mut self.minor_indices);
        let values = mem::take(&mut self.values);
        let mut entries = minor_indices.into_iter().zip(values);

        let mut old_start = 0;
        for major in 0..self.nr_major() {
            let old_end = self.major_start[major + 1];
            for (minor, value) in entries.by_ref().take(old_end - old_start) {
                if !value.is_zero() {
                    self.minor_indices.push(minor);
                    self.values.push(value);
                }
            }
            self.major_start[major + 1] = self.values.len();
            old_start = old_end;
        }

        debug!(nr_removed = nr_stored - self.nnz(), "eliminated stored zeros");
    }
}

impl<F> Sparse<F, ColumnMajor> {
    /// Get all (`row`, `value`) tuples of column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item=(usize, &F)> {
        debug_assert!(j < self.nr_columns);

        self.major(j)
    }
}

impl<F> Sparse<F, RowMajor> {
    /// Get all (`column`, `value`) tuples of row `i`.
    pub fn row(&self, i: usize) -> impl Iterator<Item=(usize, &F)> {
        debug_assert!(i < self.nr_rows);

        self.major(i)
    }
}

impl<F: Display, O: Order> Display for Sparse<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.nr_rows {
            for column in 0..self.nr_columns {
                if column > 0 {
                    f.write_str("\t")?;
                }
                match self.get(row, column) {
                    Some(value) => write!(f, "{}", value)?,
                    None => f.write_str("0")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
