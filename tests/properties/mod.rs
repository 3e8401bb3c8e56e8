//! # Properties of assembly on random coordinate lists
use proptest::prelude::*;


/// A coordinate list together with an extent that contains all of its coordinates.
#[derive(Debug, Clone)]
struct CoordinateList {
    rows: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<i64>,
    nr_rows: usize,
    nr_columns: usize,
}

/// Random extents of at most 11 x 11 with up to 64 entries, which often collide.
fn coordinate_list() -> impl Strategy<Value=CoordinateList> {
    (1..12_usize, 1..12_usize).prop_flat_map(|(nr_rows, nr_columns)| {
        prop::collection::vec((0..nr_rows, 0..nr_columns, -50..50_i64), 0..64)
            .prop_map(move |entries| {
                let mut rows = Vec::with_capacity(entries.len());
                let mut columns = Vec::with_capacity(entries.len());
                let mut values = Vec::with_capacity(entries.len());
                for (row, column, value) in entries {
                    rows.push(row);
                    columns.push(column);
                    values.push(value);
                }

                CoordinateList { rows, columns, values, nr_rows, nr_columns }
            })
    })
}
