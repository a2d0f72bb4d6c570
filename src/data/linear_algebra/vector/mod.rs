//! # Vector types
//!
//! Sparse vectors. These were written by hand, because the sparsity invariant (no value close to
//! zero is ever stored) needs to be maintained by every operation.
use std::fmt::{Debug, Display};

pub use sparse::Sparse as SparseVector;

mod sparse;

/// Defines basic ways to create or inspect a vector, regardless of back-end.
pub trait Vector: PartialEq + Display + Debug {
    /// Items stored internally.
    type Inner;

    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Values that are (numerically) zero are dropped.
    /// * `size`: Length of the vector represented (and not necessarily of the internal data
    /// structure).
    ///
    /// # Return value
    ///
    /// Input data wrapped inside a vector.
    fn new(data: Vec<Self::Inner>, size: usize) -> Self;
    /// Create a vector of length `size` containing only zeros.
    fn zeros(size: usize) -> Self;
    /// Retrieve the value at an index.
    ///
    /// # Return value
    ///
    /// `None` if the value at the index is zero and hence not stored.
    fn get(&self, index: usize) -> Option<&f64>;
    /// Retrieve the value at an index, zero if it is not stored.
    fn value(&self, index: usize) -> f64 {
        self.get(index).copied().unwrap_or(0f64)
    }
    /// Iterate over the stored `(index, value)` pairs, in no particular order.
    fn iter(&self) -> impl Iterator<Item=(usize, f64)> + '_;
    /// Number of items represented by the vector.
    fn size(&self) -> usize;
    /// Whether the vector has length zero.
    fn is_empty(&self) -> bool;
    /// Number of values stored in the internal data structure.
    fn nnz(&self) -> usize;
}
