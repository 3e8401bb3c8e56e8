//! Helper algorithms for the `linear_algebra` module.
use std::ops::Add;

use itertools::Itertools;

use crate::data::linear_algebra::SparseTuple;

/// Merge tuples with the same index by summing their values.
///
/// The order in which values that share an index are added is the order in which they appear.
///
/// # Arguments
///
/// * `tuples` - `Vec` of (index, value) tuples, assumed sorted by index.
///
/// # Return value
///
/// The tuples, with strictly increasing indices.
pub(super) fn sum_duplicates<F: Add<Output=F>>(
    tuples: Vec<SparseTuple<F>>,
) -> impl Iterator<Item=SparseTuple<F>> {
    debug_assert!(tuples.is_sorted_by_key(|&(i, _)| i));

    tuples.into_iter().coalesce(|(i, x), (j, y)| {
        if i == j {
            Ok((i, x + y))
        } else {
            Err(((i, x), (j, y)))
        }
    })
}
