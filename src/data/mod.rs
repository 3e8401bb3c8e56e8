//! # Storing of matrices in memory
//!
//! This module provides the data structures that assembly reads from and writes to. Algorithms
//! that operate on them live in `algorithm`.

pub mod linear_algebra;
