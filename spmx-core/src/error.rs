//! Error types for SPMX operations

use alloc::string::String;

use crate::ops::Operation;

/// Errors that can occur while decoding or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The `rows=` / `cols=` header lines are missing or invalid
    MalformedHeader {
        /// Header key that was expected at this position
        expected: &'static str,
        /// Line found instead, if any
        found: Option<String>,
    },
    /// An entry line does not match `(<row>, <col>, <value>)`
    MalformedEntry {
        /// 1-based position among the non-empty lines
        line: usize,
        /// The offending line, trimmed
        content: String,
    },
    /// Operand shapes are incompatible for the requested operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Coordinate outside the declared dimensions
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// An accumulated value no longer fits in an `i64`
    Overflow { row: usize, col: usize },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::MalformedHeader { expected, found } => match found {
                Some(line) => write!(f, "Malformed header: expected '{expected}<integer>', found '{line}'"),
                None => write!(f, "Malformed header: missing '{expected}<integer>' line"),
            },
            MatrixError::MalformedEntry { line, content } => {
                write!(f, "Invalid line format at line {line}: {content}")
            }
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => {
                let requirement = match operation {
                    Operation::Multiply => "A.cols == B.rows",
                    Operation::Add | Operation::Subtract => "matching dimensions",
                };
                write!(
                    f,
                    "Dimension mismatch for {operation}: {}x{} and {}x{} (requires {requirement})",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "Entry ({row}, {col}) is outside a {rows}x{cols} matrix"),
            MatrixError::Overflow { row, col } => {
                write!(f, "Integer overflow while computing entry ({row}, {col})")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for SPMX operations
pub type Result<T> = core::result::Result<T, MatrixError>;
