//! # Inversion through Gauss-Jordan elimination
//!
//! The matrix is copied to a row-major working representation, next to an identity matrix. Row
//! operations that reduce the copy to the identity turn the identity into the inverse.
//!
//! Rows are exchanged when needed (partial pivoting): in each column, the remaining row with the
//! value of largest magnitude becomes the pivot row.
use std::collections::HashMap;
use std::mem;

use log::{debug, trace};

use crate::data::linear_algebra::error::LinearAlgebraError;
use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use crate::data::linear_algebra::traits::NotZero;

/// Invert a square matrix.
///
/// # Errors
///
/// `NotSquare` if the matrix is not square, `SingularMatrix` if no nonzero pivot can be found for
/// one of the columns.
pub(super) fn invert(matrix: &SparseMatrix) -> Result<SparseMatrix, LinearAlgebraError> {
    if !matrix.is_square() {
        return Err(LinearAlgebraError::NotSquare { rows: matrix.rows(), cols: matrix.cols() });
    }

    let size = matrix.rows();
    let mut current = RowMajor::from_matrix(matrix);
    let mut inverse = RowMajor::identity(size);

    for i in 0..size {
        let pivot_row = current.choose_pivot_row(i)
            .ok_or(LinearAlgebraError::SingularMatrix { column: i })?;
        if pivot_row != i {
            trace!("Exchanging rows {} and {} to pivot on column {}", i, pivot_row, i);
            current.swap_rows(i, pivot_row);
            inverse.swap_rows(i, pivot_row);
        }

        let pivot = current.value(i, i);
        current.divide_row(i, pivot);
        inverse.divide_row(i, pivot);

        for k in (0..size).filter(|&k| k != i) {
            let factor = current.value(k, i);
            if factor.is_not_zero() {
                current.mul_add_rows(i, k, -factor);
                inverse.mul_add_rows(i, k, -factor);
            }
        }
    }

    let inverse = inverse.into_matrix();
    debug!("Inverted a {0}x{0} matrix, {1} values in the inverse", size, inverse.nnz());

    Ok(inverse)
}

/// Working copy of a matrix during elimination.
///
/// Each row is a map from column index to value. Values that are (numerically) zero are not
/// stored.
#[derive(Debug)]
struct RowMajor {
    rows: Vec<HashMap<usize, f64>>,
}

impl RowMajor {
    fn from_matrix(matrix: &SparseMatrix) -> Self {
        let mut rows = vec![HashMap::new(); matrix.rows()];
        for ((row, column), value) in matrix.iter() {
            rows[row].insert(column, value);
        }

        Self { rows }
    }

    fn identity(size: usize) -> Self {
        Self {
            rows: (0..size).map(|i| HashMap::from([(i, 1f64)])).collect(),
        }
    }

    fn value(&self, row: usize, column: usize) -> f64 {
        self.rows[row].get(&column).copied().unwrap_or(0f64)
    }

    /// Row at index `column` or below with the largest value in `column`.
    ///
    /// # Return value
    ///
    /// `None` if all these values are zero. Ties are broken by taking the lowest row index.
    fn choose_pivot_row(&self, column: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for row in column..self.rows.len() {
            let magnitude = self.value(row, column).abs();
            if magnitude.is_not_zero() && best.is_none_or(|(_, largest)| magnitude > largest) {
                best = Some((row, magnitude));
            }
        }

        best.map(|(row, _)| row)
    }

    fn swap_rows(&mut self, first: usize, second: usize) {
        self.rows.swap(first, second);
    }

    /// Divide row `i` by a nonzero `divisor`.
    fn divide_row(&mut self, i: usize, divisor: f64) {
        debug_assert!(divisor.is_not_zero());

        self.rows[i].retain(|_, value| {
            *value /= divisor;
            value.is_not_zero()
        });
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert_ne!(read_row, write_row);

        let mut write = mem::take(&mut self.rows[write_row]);
        for (&column, &value) in &self.rows[read_row] {
            let new_value = write.get(&column).copied().unwrap_or(0f64) + factor * value;
            if new_value.is_not_zero() {
                write.insert(column, new_value);
            } else {
                write.remove(&column);
            }
        }
        self.rows[write_row] = write;
    }

    fn into_matrix(self) -> SparseMatrix {
        let (rows, cols) = (self.rows.len(), self.rows.len());
        let data = self.rows.into_iter()
            .enumerate()
            .flat_map(|(i, row)| row.into_iter().map(move |(j, value)| ((i, j), value)))
            .collect();

        SparseMatrix::from_map(data, rows, cols)
    }
}
