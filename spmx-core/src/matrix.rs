//! Sparse integer matrix backed by a coordinate hash map
//!
//! Only non-zero values are stored. Writing a zero removes the entry, so a
//! stored value is never 0.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::traits::SparseView;

/// Sparse matrix of `i64` values keyed by `(row, col)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from `(row, col, value)` triplets
    ///
    /// Triplets are applied in order with [`SparseMatrix::set`] semantics:
    /// zeros are dropped and a repeated key keeps the last value.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, i64)>,
    {
        let mut matrix = Self::new(rows, cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `(row, col)`, 0 when nothing is stored there
    ///
    /// Coordinates outside the declared dimensions also read as 0.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Store `value` at `(row, col)`, removing the entry when `value` is 0
    ///
    /// No bounds check is performed: keeping coordinates inside
    /// `[0, rows) x [0, cols)` is the caller's responsibility. Use
    /// [`SparseMatrix::try_set`] for a checked write.
    pub fn set(&mut self, row: usize, col: usize, value: i64) {
        if value == 0 {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Bounds-checked variant of [`SparseMatrix::set`]
    pub fn try_set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Fail with `IndexOutOfBounds` if `(row, col)` lies outside the matrix
    pub fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Iterate over stored entries as `(row, col, value)` in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    /// Stored entries in row-major order
    pub fn sorted_entries(&self) -> Vec<(usize, usize, i64)> {
        let mut triplets: Vec<_> = self.iter().collect();
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));
        triplets
    }

    /// Crate-internal constructor for results whose entries are already
    /// zero-free
    pub(crate) fn from_entries(
        rows: usize,
        cols: usize,
        entries: HashMap<(usize, usize), i64>,
    ) -> Self {
        debug_assert!(entries.values().all(|&value| value != 0));
        Self {
            rows,
            cols,
            entries,
        }
    }

    pub(crate) fn entries(&self) -> &HashMap<(usize, usize), i64> {
        &self.entries
    }
}

impl SparseView for SparseMatrix {
    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<i64> {
        self.entries.get(&(row, col)).copied()
    }

    fn triplets(&self) -> Vec<(usize, usize, i64)> {
        self.sorted_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_matrix_is_empty() {
        let matrix = SparseMatrix::new(3, 4);
        assert_eq!(matrix.dimensions(), (3, 4));
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
        assert_eq!(matrix.get(1, 1), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.set(0, 1, 7);
        matrix.set(1, 0, -3);
        assert_eq!(matrix.get(0, 1), 7);
        assert_eq!(matrix.get(1, 0), -3);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.nnz(), 2);

        // Overwrite keeps a single entry
        matrix.set(0, 1, 9);
        assert_eq!(matrix.get(0, 1), 9);
        assert_eq!(matrix.nnz(), 2);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = SparseMatrix::new(2, 2);
        matrix.set(1, 1, 4);
        matrix.set(1, 1, 0);
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get(1, 1), 0);

        // Zero on an absent key is a no-op
        matrix.set(0, 0, 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_get_out_of_range_is_zero() {
        let matrix = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1)]);
        assert_eq!(matrix.get(10, 10), 0);
        assert_eq!(matrix.get(usize::MAX, 0), 0);
    }

    #[test]
    fn test_set_is_unchecked() {
        let mut matrix = SparseMatrix::new(1, 1);
        matrix.set(5, 5, 2);
        assert_eq!(matrix.get(5, 5), 2);
    }

    #[test]
    fn test_try_set_checks_bounds() {
        let mut matrix = SparseMatrix::new(2, 3);
        assert_eq!(matrix.try_set(1, 2, 8), Ok(()));
        assert_eq!(
            matrix.try_set(2, 0, 1),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 3
            })
        );
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_from_triplets_last_write_wins() {
        let matrix = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 0), (0, 0, 5)]);
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(0, 0), 5);
    }

    #[test]
    fn test_sorted_entries_row_major() {
        let matrix =
            SparseMatrix::from_triplets(3, 3, vec![(2, 0, 1), (0, 2, 2), (0, 1, 3), (1, 1, 4)]);
        assert_eq!(
            matrix.sorted_entries(),
            vec![(0, 1, 3), (0, 2, 2), (1, 1, 4), (2, 0, 1)]
        );
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1), (1, 1, 2)]);
        let b = SparseMatrix::from_triplets(2, 2, vec![(1, 1, 2), (0, 0, 1)]);
        assert_eq!(a, b);

        let c = SparseMatrix::from_triplets(2, 3, vec![(0, 0, 1), (1, 1, 2)]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sparse_view_impl() {
        let matrix = SparseMatrix::from_triplets(2, 2, vec![(1, 0, 6)]);
        let view: &dyn SparseView = &matrix;
        assert_eq!(view.dimensions(), (2, 2));
        assert_eq!(view.nnz(), 1);
        assert_eq!(view.get_element(1, 0), Some(6));
        assert_eq!(view.get_element(0, 0), None);
        assert_eq!(view.get(0, 0), 0);
        assert_eq!(view.triplets(), vec![(1, 0, 6)]);
    }
}
