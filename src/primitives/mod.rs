//! Core numeric primitives (Vector, Matrix).
//!
//! These types carry the performance measurements the profile is built
//! from. NaN is the sentinel for "algorithm failed on this problem".

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
