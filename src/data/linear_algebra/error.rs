//! # Error reporting for operations on vectors and matrices
//!
//! Every fallible operation checks its preconditions before it computes anything. A violated
//! precondition is described by a `LinearAlgebraError`; no partial result is ever returned.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A precondition of a vector or matrix operation was not met.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// Two vectors were combined that don't have the same length.
    SizeMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// The dimensions of two operands are not compatible with the operation.
    ///
    /// A vector of length `n` is described as having dimensions `(1, n)`.
    DimensionMismatch {
        /// `(rows, columns)` of the left operand.
        left: (usize, usize),
        /// `(rows, columns)` of the right operand.
        right: (usize, usize),
    },
    /// The operation is only defined for square matrices.
    NotSquare {
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },
    /// No nonzero pivot could be found in a column during inversion.
    SingularMatrix {
        /// Column in which elimination got stuck.
        column: usize,
    },
    /// Division by a value that is (numerically) zero.
    DivisionByZero,
    /// Rows of a nested row literal don't all have the same length.
    RaggedRows {
        /// Index of the first row with a deviating length.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the deviating row.
        found: usize,
    },
}

impl Display for LinearAlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearAlgebraError::SizeMismatch { left, right } => write!(
                f, "SizeMismatch: vectors of length {} and {} can't be combined", left, right,
            ),
            LinearAlgebraError::DimensionMismatch { left, right } => write!(
                f, "DimensionMismatch: operands of dimensions {}x{} and {}x{} are not compatible",
                left.0, left.1, right.0, right.1,
            ),
            LinearAlgebraError::NotSquare { rows, cols } => write!(
                f, "NotSquare: the matrix has {} rows and {} columns", rows, cols,
            ),
            LinearAlgebraError::SingularMatrix { column } => write!(
                f, "SingularMatrix: no nonzero pivot in column {}", column,
            ),
            LinearAlgebraError::DivisionByZero => write!(f, "DivisionByZero: divisor is zero"),
            LinearAlgebraError::RaggedRows { row, expected, found } => write!(
                f, "RaggedRows: row {} has length {}, expected {}", row, found, expected,
            ),
        }
    }
}

impl Error for LinearAlgebraError {}
