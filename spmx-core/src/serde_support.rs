//! Serde support for [`SparseMatrix`]
//!
//! A matrix serializes as `{ "rows": R, "cols": C, "entries": [[r, c, v], ...] }`
//! with entries in row-major order. Zero values in the input are dropped on
//! deserialization.

use alloc::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrix::SparseMatrix;

#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    entries: Vec<(usize, usize, i64)>,
}

impl Serialize for SparseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRepr {
            rows: self.rows(),
            cols: self.cols(),
            entries: self.sorted_entries(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SparseMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::deserialize(deserializer)?;
        Ok(SparseMatrix::from_triplets(repr.rows, repr.cols, repr.entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::Operation;
    use alloc::vec;

    #[test]
    fn test_json_shape() {
        let matrix = SparseMatrix::from_triplets(2, 3, vec![(1, 2, -4), (0, 0, 1)]);
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":3,"entries":[[0,0,1],[1,2,-4]]}"#);

        let back: SparseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }

    #[test]
    fn test_deserialize_drops_zeros() {
        let json = r#"{"rows":2,"cols":2,"entries":[[0,0,0],[1,1,3]]}"#;
        let matrix: SparseMatrix = serde_json::from_str(json).unwrap();
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(matrix.get(1, 1), 3);
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(
            serde_json::to_string(&Operation::Subtract).unwrap(),
            r#""subtract""#
        );
        let op: Operation = serde_json::from_str(r#""multiply""#).unwrap();
        assert_eq!(op, Operation::Multiply);
    }
}
