//! Read-only access trait for sparse matrices

use alloc::vec::Vec;

/// Format-agnostic read access to a sparse integer matrix
///
/// The text encoder works against this trait rather than a concrete
/// storage type.
pub trait SparseView {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored).
    fn get_element(&self, row: usize, col: usize) -> Option<i64>;

    /// Value at the specified position with implicit zeros filled in
    fn get(&self, row: usize, col: usize) -> i64 {
        self.get_element(row, col).unwrap_or(0)
    }

    /// All stored elements as `(row, col, value)`, in row-major order
    fn triplets(&self) -> Vec<(usize, usize, i64)>;
}
