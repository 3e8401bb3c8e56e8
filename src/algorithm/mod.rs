//! # Algorithms
//!
//! Everything that turns one representation of a matrix into another.

pub mod assembly;
mod utilities;
