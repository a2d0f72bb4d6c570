//! # Properties
//!
//! Invariants that should hold for all inputs, checked on generated vectors and matrices.
use approx::abs_diff_eq;
use proptest::prelude::*;

use spalg::data::linear_algebra::EPSILON;
use spalg::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use spalg::data::linear_algebra::vector::{SparseVector, Vector};

/// Values of which roughly half are zero.
fn sparse_value() -> impl Strategy<Value=f64> {
    prop_oneof![
        Just(0f64),
        -100f64..100f64,
    ]
}

fn vector_pair() -> impl Strategy<Value=(Vec<f64>, Vec<f64>)> {
    (0usize..20).prop_flat_map(|size| (
        prop::collection::vec(sparse_value(), size),
        prop::collection::vec(sparse_value(), size),
    ))
}

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value=SparseMatrix> {
    prop::collection::vec(prop::collection::vec(sparse_value(), cols), rows)
        .prop_map(|data| SparseMatrix::from_data(data).unwrap())
}

/// Pairs of matrices that can be multiplied.
fn compatible_pair() -> impl Strategy<Value=(SparseMatrix, SparseMatrix)> {
    (1usize..6, 1usize..6, 1usize..6)
        .prop_flat_map(|(m, n, p)| (matrix(m, n), matrix(n, p)))
}

/// Strictly diagonally dominant, hence invertible.
fn invertible() -> impl Strategy<Value=SparseMatrix> {
    (1usize..8).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(-1f64..1f64, size), size)
            .prop_map(move |mut data| {
                for (i, row) in data.iter_mut().enumerate() {
                    row[i] = size as f64 + 1f64;
                }
                SparseMatrix::from_data(data).unwrap()
            })
    })
}

fn vector_is_sparse(vector: &SparseVector) -> bool {
    vector.iter().all(|(_, value)| value.abs() >= EPSILON)
}

fn matrix_is_sparse(matrix: &SparseMatrix) -> bool {
    matrix.iter().all(|(_, value)| value.abs() >= EPSILON)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn add_then_subtract_vector((first, second) in vector_pair()) {
        let v = SparseVector::from(first);
        let w = SparseVector::from(second);

        let sum = v.add_vector(&w).unwrap();
        let result = sum.subtract_vector(&w).unwrap();
        prop_assert!(abs_diff_eq!(result, v, epsilon = 1e-9));
        prop_assert!(vector_is_sparse(&sum));
        prop_assert!(vector_is_sparse(&result));
    }

    #[test]
    fn scalar_operations_keep_vector_sparse(values in prop::collection::vec(sparse_value(), 0..20), scalar in -10f64..10f64) {
        let v = SparseVector::from(values);

        prop_assert!(vector_is_sparse(&v.add_scalar(scalar)));
        prop_assert!(vector_is_sparse(&v.multiply_scalar(scalar)));
        if let Ok(quotient) = v.divide_scalar(scalar) {
            prop_assert!(vector_is_sparse(&quotient));
        }
        prop_assert!(abs_diff_eq!(v.add_scalar(scalar).subtract_scalar(scalar), v, epsilon = 1e-9));
    }

    #[test]
    fn dot_is_symmetric((first, second) in vector_pair()) {
        let v = SparseVector::from(first.clone());
        let w = SparseVector::from(second.clone());

        let expected = first.iter().zip(&second).map(|(x, y)| x * y).sum::<f64>();
        let dot = v.dot(&w).unwrap();
        prop_assert!(abs_diff_eq!(dot, w.dot(&v).unwrap(), epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(dot, expected, epsilon = 1e-6));
    }

    #[test]
    fn transpose_of_product((a, b) in compatible_pair()) {
        let left = a.multiply_matrix(&b).unwrap().transpose();
        let right = b.transpose().multiply_matrix(&a.transpose()).unwrap();

        prop_assert!(abs_diff_eq!(left, right, epsilon = 1e-9));
        prop_assert!(matrix_is_sparse(&left));
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn add_then_subtract_matrix(a in matrix(4, 3), b in matrix(4, 3)) {
        let sum = a.add_matrix(&b).unwrap();
        prop_assert!(matrix_is_sparse(&sum));
        prop_assert!(abs_diff_eq!(sum.subtract_matrix(&b).unwrap(), a, epsilon = 1e-9));
    }

    #[test]
    fn product_with_inverse(a in invertible()) {
        let inverse = a.inverse().unwrap();

        prop_assert!(matrix_is_sparse(&inverse));
        prop_assert!(abs_diff_eq!(a.multiply_matrix(&inverse).unwrap(), SparseMatrix::identity(a.rows()), epsilon = 1e-9));
    }

    #[test]
    fn vector_times_identity(values in prop::collection::vec(sparse_value(), 1..20)) {
        let v = SparseVector::from(values);
        let identity = SparseMatrix::identity(v.size());

        prop_assert_eq!(v.multiply_by_matrix(&identity).unwrap(), v);
    }
}
