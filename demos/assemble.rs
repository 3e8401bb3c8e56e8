//! Assemble a small matrix from a coordinate list with duplicate entries and print it.
//!
//! Run with `RUST_LOG=debug` to see the assembly steps.
use tracing_subscriber::EnvFilter;

use relp_triplets::{sparse, AssemblyError, RowMajor, SparseMatrix};

fn main() -> Result<(), AssemblyError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rows = [0, 2, 1, 0, 2];
    let columns = [0, 1, 1, 0, 3];
    let values = [1.5, -2., 4., 0.5, 1.];

    let matrix: SparseMatrix<f64, RowMajor> = sparse(&rows, &columns, &values)?;
    println!("{} x {} with {} stored entries", matrix.nr_rows(), matrix.nr_columns(), matrix.nnz());
    print!("{}", matrix);

    let result: Result<SparseMatrix<f64>, _> = sparse(&[0, -1], &[0, 0], &[1., 1.]);
    if let Err(error) = result {
        println!("rejected: {}", error);
    }

    Ok(())
}
