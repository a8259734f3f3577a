use thiserror::Error;

/// Shape and validation failures raised by matrix construction, mutation
/// and solver construction.
///
/// Numeric edge cases (division by a zero pivot) are never reported here,
/// they follow the scalar type's own division semantics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Input matrix must be not empty")]
    EmptyMatrix,
    #[error("Input matrix must be not stepped: row {row} has {got} values, expected {expected}")]
    SteppedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Column size {got} does not match the number of matrix rows {expected}")]
    ColumnLengthMismatch { expected: usize, got: usize },
    #[error("Row size {got} does not match the number of matrix columns {expected}")]
    RowLengthMismatch { expected: usize, got: usize },
    #[error("Input matrix has {got} rows, expected {expected}")]
    RowCountMismatch { expected: usize, got: usize },
    #[error("Input matrix has {got} columns, expected {expected}")]
    ColumnCountMismatch { expected: usize, got: usize },
    #[error("Row {row} is out of bounds for a matrix with {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },
    #[error("Row {row} has no main diagonal entry, the matrix only has {cols} columns")]
    DiagonalOutOfBounds { row: usize, cols: usize },
    #[error("Free vector has {got} values, expected one per equation ({expected})")]
    FreeVectorLength { expected: usize, got: usize },
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRationalError {
    #[error("No number")]
    Empty,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Denominator cannot be zero")]
    ZeroDenominator,
}

pub type Result<T> = std::result::Result<T, MatrixError>;

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
