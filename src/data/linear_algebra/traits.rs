//! # Traits for elements in sparse datastructures
//!
//! A sparse data structure only stores the values that are not zero. For floating point numbers,
//! exact comparison with zero is not meaningful after a few operations: rounding errors leave tiny
//! values behind where the exact result would have been zero. Such values are treated as zero and
//! are not stored.
use crate::data::linear_algebra::EPSILON;

/// Decides whether a value is stored in a sparse data structure.
pub trait NotZero: Sized {
    /// Whether the value is (numerically) different from zero.
    fn is_not_zero(&self) -> bool;

    /// Keep the value only if it should be stored.
    ///
    /// # Return value
    ///
    /// `None` if the value is (numerically) zero.
    fn into_not_zero(self) -> Option<Self> {
        if self.is_not_zero() {
            Some(self)
        } else {
            None
        }
    }
}

impl NotZero for f64 {
    fn is_not_zero(&self) -> bool {
        self.abs() >= EPSILON
    }
}
