//! # Sparse vector and matrix algebra
//!
//! Vectors and matrices that only store the values that are not (numerically) zero, together
//! with the usual arithmetic on them: scalar operations, sums, products, transposition, inversion
//! through Gauss-Jordan elimination and integer powers.
//!
//! All operations produce new values, operands are never changed.
#![warn(missing_docs)]

pub mod data;
