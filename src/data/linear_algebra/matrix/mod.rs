//! # Matrix implementations
//!
//! The `Matrix` trait defines a set of operations available for all matrix types defined in this
//! module. It is also all that other types need to know about a matrix to compute a product with
//! it.
use std::fmt::{Debug, Display};

pub use sparse::Sparse as SparseMatrix;

mod gauss_jordan;
mod sparse;

/// Defines basic ways to create or inspect a matrix, regardless of back-end.
pub trait Matrix: PartialEq + Display + Debug {
    /// Create a matrix of zeros of dimension `rows` x `cols`.
    fn zeros(rows: usize, cols: usize) -> Self;
    /// Create a square identity matrix of size `size`.
    fn identity(size: usize) -> Self;
    /// Retrieve the value at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// `None` if the value is zero and hence not stored.
    fn get(&self, row: usize, column: usize) -> Option<&f64>;
    /// Retrieve the value at coordinate (`row`, `column`), zero if it is not stored.
    fn value(&self, row: usize, column: usize) -> f64 {
        self.get(row, column).copied().unwrap_or(0f64)
    }
    /// Iterate over the stored `((row, column), value)` triplets, in no particular order.
    fn iter(&self) -> impl Iterator<Item=((usize, usize), f64)> + '_;
    /// Number of rows in this matrix.
    fn rows(&self) -> usize;
    /// Number of columns in this matrix.
    fn cols(&self) -> usize;
    /// Number of values stored in this matrix.
    fn nnz(&self) -> usize;
    /// Whether the number of rows equals the number of columns.
    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }
}
