//! # Sparse vector
//!
//! Wrapping a `HashMap<usize, f64>`, fixed size.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, BitXor, Div, Mul, Sub};

use approx::AbsDiffEq;
use itertools::Itertools;
use num_traits::{One, Zero};

use crate::data::linear_algebra::{EPSILON, SparseTuple};
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use crate::data::linear_algebra::traits::NotZero;
use crate::data::linear_algebra::utilities::{format_value, merge_sparse, remove_zeros};
use crate::data::linear_algebra::vector::Vector;

/// A sparse vector using a `HashMap` from index to value as back-end. Indices start at `0`.
///
/// Values that are (numerically) zero are never stored.
#[derive(PartialEq, Clone, Debug)]
pub struct Sparse {
    data: HashMap<usize, f64>,
    size: usize,
}

impl Sparse {
    fn from_map(data: HashMap<usize, f64>, size: usize) -> Self {
        debug_assert!(data.keys().all(|&i| i < size));
        debug_assert!(data.values().all(|value| value.is_not_zero()));

        Self { data, size }
    }

    fn check_size(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(LinearAlgebraError::SizeMismatch { left: self.size, right: other.size })
        }
    }

    /// Create a `SparseVector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at zero, and runs
    /// until (not through) `size`.
    /// * `size`: Size of the `SparseVector`.
    #[must_use]
    pub fn standard_basis_vector(i: usize, size: usize) -> Self {
        debug_assert!(i < size);

        Self::from_map(HashMap::from([(i, f64::one())]), size)
    }

    /// Add a value to every element of the vector, including the ones that are not stored.
    ///
    /// Adding a value that is (numerically) zero returns a copy of this vector.
    #[must_use]
    pub fn add_scalar(&self, value: f64) -> Self {
        if !value.is_not_zero() {
            return self.clone();
        }

        let data = (0..self.size)
            .filter_map(|i| (self.value(i) + value).into_not_zero().map(|v| (i, v)))
            .collect();

        Self::from_map(data, self.size)
    }

    /// Subtract a value from every element of the vector, including the ones that are not stored.
    ///
    /// Subtracting a value that is (numerically) zero returns a copy of this vector.
    #[must_use]
    pub fn subtract_scalar(&self, value: f64) -> Self {
        self.add_scalar(-value)
    }

    /// Multiply each element of the vector by a value.
    ///
    /// Multiplying by a value that is (numerically) zero results in a vector of zeros.
    #[must_use]
    pub fn multiply_scalar(&self, value: f64) -> Self {
        if !value.is_not_zero() {
            return Self::zeros(self.size);
        }

        self.map_values(|v| v * value)
    }

    /// Divide each element of the vector by a value.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the value is (numerically) zero.
    pub fn divide_scalar(&self, value: f64) -> Result<Self, LinearAlgebraError> {
        if !value.is_not_zero() {
            return Err(LinearAlgebraError::DivisionByZero);
        }

        Ok(self.map_values(|v| v / value))
    }

    /// Element-wise sum with another vector of the same length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_size(other)?;

        Ok(Self::from_map(merge_sparse(&self.data, &other.data, |x, y| x + y), self.size))
    }

    /// Element-wise difference with another vector of the same length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn subtract_vector(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_size(other)?;

        Ok(Self::from_map(merge_sparse(&self.data, &other.data, |x, y| x - y), self.size))
    }

    /// Calculate the inner product between two vectors.
    ///
    /// Only indices that are stored in both vectors contribute.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64, LinearAlgebraError> {
        self.check_size(other)?;

        let (smaller, larger) = if self.nnz() <= other.nnz() {
            (self, other)
        } else {
            (other, self)
        };

        Ok(smaller.data.iter()
            .sorted_unstable_by_key(|&(&i, _)| i)
            .filter_map(|(i, value)| larger.data.get(i).map(|other_value| value * other_value))
            .fold(f64::zero(), |total, product| total + product))
    }

    /// Raise every stored element to a power.
    ///
    /// Elements that are not stored stay zero, so the exponent should be positive.
    #[must_use]
    pub fn power(&self, exponent: f64) -> Self {
        debug_assert!(exponent > 0f64);

        self.map_values(|v| v.powf(exponent))
    }

    /// Multiply this vector, as a row vector, with a matrix from the right.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Matrix with as many rows as this vector is long.
    ///
    /// # Return value
    ///
    /// A vector with as many elements as the matrix has columns.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the length of this vector differs from the number of rows.
    pub fn multiply_by_matrix<M: Matrix>(&self, matrix: &M) -> Result<Self, LinearAlgebraError> {
        if self.size != matrix.rows() {
            return Err(LinearAlgebraError::DimensionMismatch {
                left: (1, self.size),
                right: (matrix.rows(), matrix.cols()),
            });
        }

        let mut data = HashMap::new();
        for ((row, column), value) in matrix.iter().sorted_unstable_by_key(|&(index, _)| index) {
            if let Some(vector_value) = self.data.get(&row) {
                *data.entry(column).or_insert_with(f64::zero) += vector_value * value;
            }
        }
        remove_zeros(&mut data);

        Ok(Self::from_map(data, matrix.cols()))
    }

    /// Apply a function to every stored value, dropping results that are (numerically) zero.
    fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        let data = self.data.iter()
            .filter_map(|(&i, &value)| f(value).into_not_zero().map(|v| (i, v)))
            .collect();

        Self::from_map(data, self.size)
    }
}

impl Vector for Sparse {
    type Inner = SparseTuple<f64>;

    /// Create a vector of length `size` from `data`.
    ///
    /// Values close to zero are filtered out. If an index appears more than once, the last nonzero
    /// value is kept.
    fn new(data: Vec<Self::Inner>, size: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < size));

        let data = data.into_iter()
            .filter(|(_, value)| value.is_not_zero())
            .collect();

        Self::from_map(data, size)
    }

    fn zeros(size: usize) -> Self {
        Self::from_map(HashMap::new(), size)
    }

    fn get(&self, index: usize) -> Option<&f64> {
        debug_assert!(index < self.size);

        self.data.get(&index)
    }

    fn iter(&self) -> impl Iterator<Item=(usize, f64)> + '_ {
        self.data.iter().map(|(&i, &value)| (i, value))
    }

    /// The length of this vector.
    fn size(&self) -> usize {
        self.size
    }

    /// Whether this vector has zero length.
    fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of values stored.
    fn nnz(&self) -> usize {
        self.data.len()
    }
}

impl FromIterator<f64> for Sparse {
    fn from_iter<I: IntoIterator<Item=f64>>(iter: I) -> Self {
        let mut data = HashMap::new();
        let mut counter = 0;

        for item in iter {
            if item.is_not_zero() {
                data.insert(counter, item);
            }
            counter += 1;
        }

        Self::from_map(data, counter)
    }
}

impl From<Vec<f64>> for Sparse {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[f64]> for Sparse {
    fn from(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[f64; N]> for Sparse {
    fn from(values: [f64; N]) -> Self {
        values.into_iter().collect()
    }
}

impl Add<f64> for &Sparse {
    type Output = Sparse;

    fn add(self, value: f64) -> Sparse {
        self.add_scalar(value)
    }
}

impl Sub<f64> for &Sparse {
    type Output = Sparse;

    fn sub(self, value: f64) -> Sparse {
        self.subtract_scalar(value)
    }
}

impl Mul<f64> for &Sparse {
    type Output = Sparse;

    fn mul(self, value: f64) -> Sparse {
        self.multiply_scalar(value)
    }
}

impl Div<f64> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If `value` is (numerically) zero. Use `divide_scalar` to handle this case.
    fn div(self, value: f64) -> Sparse {
        self.divide_scalar(value).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl Add<&Sparse> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the lengths differ. Use `add_vector` to handle this case.
    fn add(self, other: &Sparse) -> Sparse {
        self.add_vector(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl Sub<&Sparse> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the lengths differ. Use `subtract_vector` to handle this case.
    fn sub(self, other: &Sparse) -> Sparse {
        self.subtract_vector(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

/// Inner product.
impl Mul<&Sparse> for &Sparse {
    type Output = f64;

    /// # Panics
    ///
    /// If the lengths differ. Use `dot` to handle this case.
    fn mul(self, other: &Sparse) -> f64 {
        self.dot(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

/// Element-wise power.
///
/// Note that `^` binds weaker than `+` and `*`.
impl BitXor<f64> for &Sparse {
    type Output = Sparse;

    fn bitxor(self, exponent: f64) -> Sparse {
        self.power(exponent)
    }
}

impl Mul<&SparseMatrix> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the length differs from the number of rows. Use `multiply_by_matrix` to handle this
    /// case.
    fn mul(self, matrix: &SparseMatrix) -> Sparse {
        self.multiply_by_matrix(matrix).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl AbsDiffEq for Sparse {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Equal length, and every element (including the ones that are not stored) within `epsilon`.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.size == other.size && self.data.keys().chain(other.data.keys())
            .all(|&i| (self.value(i) - other.value(i)).abs() <= epsilon)
    }
}

/// Values separated by spaces, zeros included, each with six significant digits.
impl Display for Sparse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", (0..self.size).map(|i| format_value(self.value(i))).join(" "))
    }
}
