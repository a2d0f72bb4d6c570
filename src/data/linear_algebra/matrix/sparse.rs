//! # Sparse matrix
//!
//! Wrapping a `HashMap<(usize, usize), f64>` keyed by (row, column), fixed dimensions.
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, BitXor, Div, Mul, Sub};

use approx::AbsDiffEq;
use itertools::{iproduct, Itertools};
use log::debug;
use num_traits::{One, Zero};

use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::gauss_jordan;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::traits::NotZero;
use crate::data::linear_algebra::utilities::{format_value, merge_sparse, remove_zeros};

/// Uses a single map from (row, column) to value as underlying data structure. Indices start at
/// `0`, dimensions are fixed at creation.
#[derive(PartialEq, Clone, Debug)]
pub struct Sparse {
    data: HashMap<(usize, usize), f64>,
    rows: usize,
    cols: usize,
}

impl Sparse {
    pub(super) fn from_map(data: HashMap<(usize, usize), f64>, rows: usize, cols: usize) -> Self {
        debug_assert!(data.keys().all(|&(i, j)| i < rows && j < cols));
        debug_assert!(data.values().all(|value| value.is_not_zero()));

        Self { data, rows, cols }
    }

    fn check_same_dimensions(&self, other: &Self) -> Result<(), LinearAlgebraError> {
        if self.dimensions() == other.dimensions() {
            Ok(())
        } else {
            Err(LinearAlgebraError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            })
        }
    }

    fn check_square(&self) -> Result<(), LinearAlgebraError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinearAlgebraError::NotSquare { rows: self.rows, cols: self.cols })
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Create a `SparseMatrix` from rows of values.
    ///
    /// Values close to zero are not stored. An empty `data` gives a matrix without rows and
    /// columns.
    ///
    /// # Errors
    ///
    /// `RaggedRows` if not all rows have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Self, LinearAlgebraError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if let Some((row, values)) = data.iter().find_position(|values| values.len() != cols) {
            return Err(LinearAlgebraError::RaggedRows { row, expected: cols, found: values.len() });
        }

        let entries = data.into_iter()
            .enumerate()
            .flat_map(|(i, values)| values.into_iter()
                .enumerate()
                .filter(|(_, value)| value.is_not_zero())
                .map(move |(j, value)| ((i, j), value)))
            .collect();

        Ok(Self::from_map(entries, rows, cols))
    }

    /// Create a `SparseMatrix` from `((row, column), value)` triplets.
    ///
    /// Values close to zero are filtered out. If an index appears more than once, the last nonzero
    /// value is kept.
    pub fn from_triplets(data: Vec<((usize, usize), f64)>, rows: usize, cols: usize) -> Self {
        debug_assert!(data.iter().all(|&((i, j), _)| i < rows && j < cols));

        let data = data.into_iter()
            .filter(|(_, value)| value.is_not_zero())
            .collect();

        Self::from_map(data, rows, cols)
    }

    /// Add a value to every element of the matrix, including the ones that are not stored.
    ///
    /// Adding a value that is (numerically) zero returns a copy of this matrix.
    #[must_use]
    pub fn add_scalar(&self, value: f64) -> Self {
        if !value.is_not_zero() {
            return self.clone();
        }

        let data = iproduct!(0..self.rows, 0..self.cols)
            .filter_map(|(i, j)| (self.value(i, j) + value).into_not_zero().map(|v| ((i, j), v)))
            .collect();

        Self::from_map(data, self.rows, self.cols)
    }

    /// Subtract a value from every element of the matrix, including the ones that are not stored.
    ///
    /// Subtracting a value that is (numerically) zero returns a copy of this matrix.
    #[must_use]
    pub fn subtract_scalar(&self, value: f64) -> Self {
        self.add_scalar(-value)
    }

    /// Multiply each element of the matrix by a value.
    ///
    /// Multiplying by a value that is (numerically) zero results in a matrix of zeros.
    #[must_use]
    pub fn multiply_scalar(&self, value: f64) -> Self {
        if !value.is_not_zero() {
            return Self::zeros(self.rows, self.cols);
        }

        self.map_values(|v| v * value)
    }

    /// Divide each element of the matrix by a value.
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

    /// Element-wise sum with a matrix of the same dimensions.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the dimensions differ.
    pub fn add_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_same_dimensions(other)?;

        let data = merge_sparse(&self.data, &other.data, |x, y| x + y);
        Ok(Self::from_map(data, self.rows, self.cols))
    }

    /// Element-wise difference with a matrix of the same dimensions.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the dimensions differ.
    pub fn subtract_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        self.check_same_dimensions(other)?;

        let data = merge_sparse(&self.data, &other.data, |x, y| x - y);
        Ok(Self::from_map(data, self.rows, self.cols))
    }

    /// Matrix product `self * other`.
    ///
    /// Products are accumulated in a fixed order (row-major through `self`, by column through each
    /// row of `other`), so the result doesn't depend on the internal layout of the maps.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the number of columns of `self` differs from the number of rows of
    /// `other`.
    pub fn multiply_matrix(&self, other: &Self) -> Result<Self, LinearAlgebraError> {
        if self.cols != other.rows {
            return Err(LinearAlgebraError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let mut other_rows = vec![Vec::new(); other.rows];
        for ((k, j), value) in other.data.iter().sorted_unstable_by_key(|&(&index, _)| index) {
            other_rows[*k].push((*j, *value));
        }

        let mut data = HashMap::new();
        for (&(i, k), value) in self.data.iter().sorted_unstable_by_key(|&(&index, _)| index) {
            for &(j, other_value) in &other_rows[k] {
                *data.entry((i, j)).or_insert_with(f64::zero) += value * other_value;
            }
        }
        remove_zeros(&mut data);

        Ok(Self::from_map(data, self.rows, other.cols))
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = self.data.iter()
            .map(|(&(i, j), &value)| ((j, i), value))
            .collect();

        Self::from_map(data, self.cols, self.rows)
    }

    /// Compute the inverse using Gauss-Jordan elimination with row exchanges.
    ///
    /// # Errors
    ///
    /// `NotSquare` if this matrix is not square, `SingularMatrix` if it can't be inverted.
    pub fn inverse(&self) -> Result<Self, LinearAlgebraError> {
        gauss_jordan::invert(self)
    }

    /// Multiply this matrix with itself repeatedly.
    ///
    /// The zeroth power is the identity matrix. Takes `exponent - 1` multiplications.
    ///
    /// # Errors
    ///
    /// `NotSquare` if this matrix is not square.
    pub fn power(&self, exponent: u32) -> Result<Self, LinearAlgebraError> {
        self.check_square()?;

        if exponent == 0 {
            return Ok(Self::identity(self.rows));
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.multiply_matrix(self)?;
        }
        debug!("Raised a {0}x{0} matrix to power {1}, {2} values in the result", self.rows, exponent, result.nnz());

        Ok(result)
    }

    /// Apply a function to every stored value, dropping results that are (numerically) zero.
    fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        let data = self.data.iter()
            .filter_map(|(&index, &value)| f(value).into_not_zero().map(|v| (index, v)))
            .collect();

        Self::from_map(data, self.rows, self.cols)
    }
}

impl Matrix for Sparse {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_map(HashMap::new(), rows, cols)
    }

    fn identity(size: usize) -> Self {
        let data = (0..size).map(|i| ((i, i), f64::one())).collect();

        Self::from_map(data, size, size)
    }

    fn get(&self, row: usize, column: usize) -> Option<&f64> {
        debug_assert!(row < self.rows);
        debug_assert!(column < self.cols);

        self.data.get(&(row, column))
    }

    fn iter(&self) -> impl Iterator<Item=((usize, usize), f64)> + '_ {
        self.data.iter().map(|(&index, &value)| (index, value))
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn nnz(&self) -> usize {
        self.data.len()
    }
}

/// Create a matrix from a literal, row by row.
impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Sparse {
    fn from(rows: [[f64; C]; R]) -> Self {
        let data = rows.into_iter()
            .enumerate()
            .flat_map(|(i, values)| values.into_iter()
                .enumerate()
                .filter(|(_, value)| value.is_not_zero())
                .map(move |(j, value)| ((i, j), value)))
            .collect();

        Self::from_map(data, R, C)
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
    /// If the dimensions differ. Use `add_matrix` to handle this case.
    fn add(self, other: &Sparse) -> Sparse {
        self.add_matrix(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl Sub<&Sparse> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the dimensions differ. Use `subtract_matrix` to handle this case.
    fn sub(self, other: &Sparse) -> Sparse {
        self.subtract_matrix(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl Mul<&Sparse> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the inner dimensions differ. Use `multiply_matrix` to handle this case.
    fn mul(self, other: &Sparse) -> Sparse {
        self.multiply_matrix(other).unwrap_or_else(|error| panic!("{}", error))
    }
}

/// Integer power.
///
/// Note that `^` binds weaker than `+` and `*`.
impl BitXor<u32> for &Sparse {
    type Output = Sparse;

    /// # Panics
    ///
    /// If the matrix is not square. Use `power` to handle this case.
    fn bitxor(self, exponent: u32) -> Sparse {
        self.power(exponent).unwrap_or_else(|error| panic!("{}", error))
    }
}

impl AbsDiffEq for Sparse {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    /// Equal dimensions, and every element (including the ones that are not stored) within
    /// `epsilon`.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimensions() == other.dimensions() && self.data.keys().chain(other.data.keys())
            .all(|&(i, j)| (self.value(i, j) - other.value(i, j)).abs() <= epsilon)
    }
}

/// Row-major, every value right-aligned in a column of width 5 and shown with six significant
/// digits. Wider values are not truncated.
impl Display for Sparse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = (0..self.rows)
            .map(|i| (0..self.cols).map(|j| format!("{:>5}", format_value(self.value(i, j)))).join(""))
            .join("\n");

        write!(f, "{}", rows)
    }
}
