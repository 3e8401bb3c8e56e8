use num_complex::Complex64;
use relp_num::{RB, RationalBig};

use relp_triplets::{AssemblyError, Axis, ColumnMajor, RowMajor, SparseMatrix, Triplet};
use relp_triplets::{sparse, sparse_with_shape, sparse_with_shape_into, sparse_with_shape_unchecked};

use super::dense;
use crate::init_tracing;

#[test]
fn diagonal() {
    init_tracing();

    let m: SparseMatrix<i32> = sparse_with_shape(&[0, 1, 2], &[0, 1, 2], &[5, 7, 9], 3, 3).unwrap();

    assert_eq!(m.shape(), (3, 3));
    assert_eq!(m.nnz(), 3);
    assert_eq!(m.to_dense(), dense(vec![vec![5, 0, 0], vec![0, 7, 0], vec![0, 0, 9]]));
}

#[test]
fn duplicate_inferred() {
    init_tracing();

    let m: SparseMatrix<i32> = sparse(&[0, 0], &[1, 1], &[2, 3]).unwrap();

    assert_eq!(m.shape(), (1, 2));
    assert_eq!(m.nnz(), 1);
    assert_eq!(m.to_triplets(), vec![Triplet::new(0, 1, 5)]);
}

#[test]
fn empty_with_shape() {
    init_tracing();

    let m: SparseMatrix<f64> = sparse_with_shape::<usize, usize, _, _>(&[], &[], &[], 4, 4).unwrap();

    assert_eq!(m.shape(), (4, 4));
    assert_eq!(m.nnz(), 0);
    assert_eq!(m.to_dense(), dense(vec![vec![0f64; 4]; 4]));
}

#[test]
#[cfg(feature = "deprecated-dense")]
#[allow(deprecated)]
fn dense_extraction() {
    use relp_triplets::algorithm::assembly::dense_to_sparse;

    init_tracing();

    let d = dense(vec![vec![0, 2], vec![0, 0]]);
    let m: SparseMatrix<i32> = dense_to_sparse(&d);

    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.nnz(), 1);
    assert_eq!(m.get(0, 1), Some(&2));
    assert_eq!(m, d.to_sparse());
}

#[test]
fn row_equal_to_extent() {
    init_tracing();

    let result: Result<SparseMatrix<i32>, _> = sparse_with_shape(&[0, 2], &[0, 0], &[1, 1], 2, 2);

    assert_eq!(
        result,
        Err(AssemblyError::OutOfRange { axis: Axis::Row, position: 1, index: 2, extent: 2 }),
    );
}

#[test]
fn cancelling_contributions() {
    init_tracing();

    let mut m: SparseMatrix<RationalBig, RowMajor> = sparse(
        &[0, 1, 0, 1],
        &[0, 1, 0, 0],
        &[RB!(1, 2), RB!(3), RB!(-1, 2), RB!(1, 7)],
    ).unwrap();

    // The cancelled entry is still stored until zeros are eliminated
    assert_eq!(m.nnz(), 3);
    assert_eq!(m.get(0, 0), Some(&RB!(0)));
    m.eliminate_zeros();
    assert_eq!(m.nnz(), 2);
    assert_eq!(
        m.to_dense(),
        dense(vec![vec![RB!(0), RB!(0)], vec![RB!(1, 7), RB!(3)]]),
    );
}

#[test]
fn reuse_output() {
    init_tracing();

    let mut m = SparseMatrix::<f32, ColumnMajor>::zeros(0, 0);
    sparse_with_shape_into(&[0_u16, 1], &[1_i8, 1], &[1.5_f32, 2.5], 2, 2, &mut m).unwrap();
    assert_eq!(m.column(1).collect::<Vec<_>>(), vec![(0, &1.5), (1, &2.5)]);

    let result = sparse_with_shape_into(&[0, 1], &[1], &[1_f32, 2_f32], 2, 2, &mut m);
    assert_eq!(result, Err(AssemblyError::LengthMismatch { rows: 2, columns: 1, values: 2 }));
    assert_eq!(m.nnz(), 2);
}

#[test]
fn prevalidated() {
    init_tracing();

    let rows = [3, 0, 3, 1];
    let columns = [0, 0, 0, 2];
    let values = [1_u64, 2, 3, 4];

    let m: SparseMatrix<u64, RowMajor> = sparse_with_shape_unchecked(&rows, &columns, &values, 4, 3);

    assert_eq!(m.nnz(), 3);
    assert_eq!(m.get(3, 0), Some(&4));
    assert_eq!(m.row(3).count(), 1);
    assert_eq!(m.to_string(), "2\t0\t0\n0\t0\t4\n0\t0\t0\n4\t0\t0\n");
}

#[test]
fn complex_values() {
    init_tracing();

    let rows = [1, 0, 1, 1];
    let columns = [1, 0, 1, 0];
    let values = [
        Complex64::new(1.5, -2.),
        Complex64::new(0., 1.),
        Complex64::new(0.5, 2.),
        Complex64::new(-3., 0.25),
    ];

    let m: SparseMatrix<Complex64, RowMajor> = sparse(&rows, &columns, &values).unwrap();

    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.nnz(), 3);
    // The imaginary parts cancel, the entry stays stored
    assert_eq!(m.get(1, 1), Some(&Complex64::new(2., 0.)));
    assert_eq!(m.get(0, 0), Some(&Complex64::new(0., 1.)));
    assert_eq!(m.get(0, 1), None);
    assert_eq!(m.row(1).collect::<Vec<_>>(), vec![(0, &Complex64::new(-3., 0.25)), (1, &Complex64::new(2., 0.))]);
}
