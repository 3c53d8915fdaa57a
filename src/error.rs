//! Error types for linear_steps

use num_bigint::BigInt;
use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Supplied matrix is not n rows by n+1 columns
    #[error("Shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Every candidate pivot at or below the diagonal is zero
    #[error("Singular matrix: no nonzero pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("El sistema no tiene solución única.")]
    NoUniqueSolution,

    /// The reduced fraction for x ended with a zero denominator
    #[error("Zero denominator while reducing {numerator}/{denominator}")]
    ZeroDenominator {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Infinite or NaN operands would never terminate Euclid's recurrence
    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),

    /// A textual cell did not parse as a number (1-based position)
    #[error("Introduce un número válido en la posición [{row}, {col}].")]
    InvalidNumber { row: usize, col: usize },
}
