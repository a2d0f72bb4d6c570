//! # Linear algebra primitives
//!
//! Linear algebra primitives in a sparse format. Values with a magnitude below `EPSILON` are
//! treated as zero and never stored.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;
mod utilities;

/// Magnitude below which a value is considered to be zero.
pub const EPSILON: f64 = 1e-10;

/// An index together with the (nonzero) value at that index.
pub type SparseTuple<F> = (usize, F);
