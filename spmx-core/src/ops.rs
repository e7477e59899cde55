//! Arithmetic on sparse matrices
//!
//! Every operation builds a fresh matrix and leaves its operands untouched.
//! Shape checks happen before any work, so a failed call never produces a
//! partial result.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::SparseMatrix;

/// Binary operation selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// Lowercase name used on the command line and in output file names
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Apply this operation to `left` and `right`
    pub fn apply(self, left: &SparseMatrix, right: &SparseMatrix) -> Result<SparseMatrix> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply(right),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl SparseMatrix {
    /// Element-wise sum `self + other`
    ///
    /// Fails with `DimensionMismatch` unless both matrices have the same
    /// shape. Keys whose sum is exactly zero are left out of the result.
    pub fn add(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.elementwise(other, Operation::Add, i64::checked_add)
    }

    /// Element-wise difference `self - other`
    ///
    /// Same shape rules as [`SparseMatrix::add`].
    pub fn subtract(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        self.elementwise(other, Operation::Subtract, i64::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`.
    pub fn multiply(&self, other: &SparseMatrix) -> Result<SparseMatrix> {
        if self.cols() != other.rows() {
            return Err(self.mismatch(other, Operation::Multiply));
        }

        // Group the right operand by row so each left entry only visits the
        // non-zeros it actually meets. Columns at or past `other.cols()` are
        // never part of the product.
        let mut right_rows: HashMap<usize, Vec<(usize, i64)>> = HashMap::new();
        for (k, j, w) in other.iter() {
            if j < other.cols() {
                right_rows.entry(k).or_default().push((j, w));
            }
        }

        // Partial sums are kept in i128 so only the final value has to fit
        // in an i64, whatever order the entries are visited in.
        let mut sums: HashMap<(usize, usize), i128> = HashMap::new();
        for (i, k, v) in self.iter() {
            let Some(row) = right_rows.get(&k) else {
                continue;
            };
            for &(j, w) in row {
                let overflow = MatrixError::Overflow { row: i, col: j };
                let product = v.checked_mul(w).ok_or(overflow.clone())?;
                let slot = sums.entry((i, j)).or_insert(0);
                *slot = slot.checked_add(i128::from(product)).ok_or(overflow)?;
            }
        }

        let mut result = HashMap::with_capacity(sums.len());
        for ((row, col), sum) in sums {
            let value = i64::try_from(sum).map_err(|_| MatrixError::Overflow { row, col })?;
            if value != 0 {
                result.insert((row, col), value);
            }
        }

        Ok(SparseMatrix::from_entries(self.rows(), other.cols(), result))
    }

    fn elementwise(
        &self,
        other: &SparseMatrix,
        operation: Operation,
        combine: fn(i64, i64) -> Option<i64>,
    ) -> Result<SparseMatrix> {
        if self.dimensions() != other.dimensions() {
            return Err(self.mismatch(other, operation));
        }

        let mut result = self.entries().clone();
        for (&(row, col), &value) in other.entries() {
            let current = result.get(&(row, col)).copied().unwrap_or(0);
            let combined =
                combine(current, value).ok_or(MatrixError::Overflow { row, col })?;
            if combined == 0 {
                result.remove(&(row, col));
            } else {
                result.insert((row, col), combined);
            }
        }

        Ok(SparseMatrix::from_entries(self.rows(), self.cols(), result))
    }

    fn mismatch(&self, other: &SparseMatrix, operation: Operation) -> MatrixError {
        MatrixError::DimensionMismatch {
            operation,
            left: self.dimensions(),
            right: other.dimensions(),
        }
    }
}
