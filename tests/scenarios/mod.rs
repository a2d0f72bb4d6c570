//! # Scenarios
//!
//! Small, hand-checked computations through the public API.
use approx::assert_abs_diff_eq;

use spalg::data::linear_algebra::error::LinearAlgebraError;
use spalg::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use spalg::data::linear_algebra::vector::{SparseVector, Vector};

#[test]
fn near_zero_literal_is_elided() {
    let v = SparseVector::from([1f64, 0f64, 0f64, 1e-12f64, 2f64]);

    assert_eq!(v.to_string(), "1 0 0 0 2");
    assert_eq!(v.nnz(), 2);
    assert_eq!(v.get(3), None);
}

#[test]
fn identity_power() {
    let identity = SparseMatrix::from([[1f64, 0f64], [0f64, 1f64]]);

    assert_eq!(identity.power(2), Ok(identity.clone()));
    assert_eq!(&identity ^ 7, identity);
}

#[test]
fn vector_times_matrix() {
    let v = SparseVector::from([1f64, 1f64]);
    let m = SparseMatrix::from([[2f64, 0f64], [0f64, 2f64]]);

    assert_eq!(&v * &m, SparseVector::from([2f64, 2f64]));
}

#[test]
fn size_mismatch() {
    let v = SparseVector::from([1f64, 2f64, 3f64]);
    let w = SparseVector::from([1f64, 2f64, 3f64, 4f64]);

    assert_eq!(v.add_vector(&w), Err(LinearAlgebraError::SizeMismatch { left: 3, right: 4 }));
    assert_eq!(w.subtract_vector(&v), Err(LinearAlgebraError::SizeMismatch { left: 4, right: 3 }));
    assert_eq!(v.dot(&w), Err(LinearAlgebraError::SizeMismatch { left: 3, right: 4 }));
}

#[test]
fn add_then_subtract() {
    let v = SparseVector::from([0.1f64, 0f64, -7f64, 3.25f64]);
    let w = SparseVector::from([0.2f64, 5f64, 7f64, 0f64]);

    let result = v.add_vector(&w).and_then(|sum| sum.subtract_vector(&w)).unwrap();
    assert_abs_diff_eq!(result, v);
    assert_abs_diff_eq!(v.add_scalar(1.5f64).subtract_scalar(1.5f64), v);
}

#[test]
fn transpose_of_product() {
    let a = SparseMatrix::from([[1f64, 0f64, 2f64], [0f64, -1f64, 3f64]]);
    let b = SparseMatrix::from([[4f64, 1f64], [0f64, 0f64], [-2f64, 5f64]]);

    let left = a.multiply_matrix(&b).unwrap().transpose();
    let right = b.transpose().multiply_matrix(&a.transpose()).unwrap();
    assert_eq!(left, right);
    assert_eq!(left, SparseMatrix::from([[0f64, -6f64], [11f64, 15f64]]));
}

#[test]
fn product_with_inverse() {
    let a = SparseMatrix::from([[3f64, 2f64, 1f64], [0f64, 4f64, 6f64], [1f64, 1f64, 1f64]]);
    let inverse = a.inverse().unwrap();

    assert_abs_diff_eq!(&a * &inverse, SparseMatrix::identity(3));
    assert_abs_diff_eq!(&inverse * &a, SparseMatrix::identity(3));
    assert_abs_diff_eq!(inverse.inverse().unwrap(), a, epsilon = 1e-9);
}

#[test]
fn inverse_with_row_exchange() {
    let a = SparseMatrix::from([[0f64, 1f64], [1f64, 0f64]]);

    assert_eq!(a.inverse(), Ok(a.clone()));
}

#[test]
fn errors() {
    let singular = SparseMatrix::from([[1f64, 2f64], [2f64, 4f64]]);
    assert_eq!(singular.inverse(), Err(LinearAlgebraError::SingularMatrix { column: 1 }));

    let v = SparseVector::from([1f64, 2f64]);
    assert_eq!(v.divide_scalar(0f64), Err(LinearAlgebraError::DivisionByZero));

    let rectangular = SparseMatrix::zeros(2, 3);
    assert_eq!(rectangular.power(2), Err(LinearAlgebraError::NotSquare { rows: 2, cols: 3 }));
    assert_eq!(rectangular.inverse(), Err(LinearAlgebraError::NotSquare { rows: 2, cols: 3 }));

    let error = rectangular.multiply_matrix(&rectangular).unwrap_err();
    assert_eq!(error.to_string(), "DimensionMismatch: operands of dimensions 2x3 and 2x3 are not compatible");
}

#[test]
fn display_matrix() {
    let a = SparseMatrix::from([[3f64, 2f64, 1f64], [0f64, 4f64, 6f64], [1f64, 1f64, 1f64]]);
    let b = SparseMatrix::from([[9f64, 2f64, 6f64], [6f64, -13f64, 5f64], [-1f64, 4f64, 3f64]]);

    assert_eq!((&a + &b).to_string(), "   12    4    7\n    6   -9   11\n    0    5    4");
    assert_eq!((&a - &b).to_string(), "   -6    0   -5\n   -6   17    1\n    2   -3   -2");
    assert_eq!((&a * &b).to_string(), "   38  -16   31\n   18  -28   38\n   14   -7   14");
}
