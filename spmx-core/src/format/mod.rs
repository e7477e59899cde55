//! Text format for sparse matrices
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Lines are trimmed and blank lines are ignored. The two header lines must
//! come first and in this order.

pub mod parsing;

use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;
use crate::traits::SparseView;

pub use parsing::{parse_entry, parse_header};

/// Header key for the row count
pub const ROWS_KEY: &str = "rows=";

/// Header key for the column count
pub const COLS_KEY: &str = "cols=";

/// Options controlling [`decode_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject entries outside the declared dimensions
    pub strict_bounds: bool,
}

impl DecodeOptions {
    /// Set strict bounds checking
    pub fn with_strict_bounds(mut self, strict_bounds: bool) -> Self {
        self.strict_bounds = strict_bounds;
        self
    }
}

/// Decode a matrix from its text form
///
/// Entries outside the declared dimensions are accepted as-is; use
/// [`decode_with`] to reject them.
pub fn decode(text: &str) -> Result<SparseMatrix> {
    decode_with(text, DecodeOptions::default())
}

/// Decode a matrix from its text form with explicit options
pub fn decode_with(text: &str, options: DecodeOptions) -> Result<SparseMatrix> {
    let mut lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let rows = read_header(lines.next(), ROWS_KEY)?;
    let cols = read_header(lines.next(), COLS_KEY)?;
    let mut matrix = SparseMatrix::new(rows, cols);

    // Header lines are 1 and 2
    for (line_number, line) in (3..).zip(lines) {
        let (row, col, value) =
            parse_entry(line).ok_or_else(|| MatrixError::MalformedEntry {
                line: line_number,
                content: line.to_string(),
            })?;

        if options.strict_bounds {
            matrix.try_set(row, col, value)?;
        } else {
            matrix.set(row, col, value);
        }
    }

    Ok(matrix)
}

fn read_header(line: Option<&str>, key: &'static str) -> Result<usize> {
    let line = line.ok_or(MatrixError::MalformedHeader {
        expected: key,
        found: None,
    })?;
    parse_header(line, key).ok_or_else(|| MatrixError::MalformedHeader {
        expected: key,
        found: Some(line.to_string()),
    })
}

/// Encode a matrix into its text form
///
/// Entries are written in row-major order. The output has no trailing
/// newline.
pub fn encode<M: SparseView + ?Sized>(matrix: &M) -> String {
    let (rows, cols) = matrix.dimensions();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = write!(out, "{ROWS_KEY}{rows}\n{COLS_KEY}{cols}");
    for (row, col, value) in matrix.triplets() {
        let _ = write!(out, "\n({row}, {col}, {value})");
    }
    out
}
