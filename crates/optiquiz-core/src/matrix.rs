//! Square distance matrix between candidate nodes.

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Non-negative distances between `len()` nodes with a zero diagonal.
///
/// Symmetry is not required; [`DistanceMatrix::is_symmetric`] reports it.
///
/// # Example
///
/// ```
/// use optiquiz_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 4, 7],
///     vec![4, 0, 2],
///     vec![7, 2, 0],
/// ]).unwrap();
///
/// assert_eq!(matrix.len(), 3);
/// assert_eq!(matrix.distance(0, 2), 7);
/// assert!(matrix.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct DistanceMatrix {
    rows: Vec<Vec<u32>>,
}

impl DistanceMatrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Validation`] if the matrix is empty, not square,
    /// or has a non-zero diagonal entry.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(QuizError::Validation("distance matrix is empty".into()));
        }
        if let Some(bad) = rows.iter().position(|row| row.len() != n) {
            return Err(QuizError::Validation(format!(
                "distance matrix must be {n}x{n}, row {bad} has {} entries",
                rows[bad].len()
            )));
        }
        if let Some(i) = (0..n).find(|&i| rows[i][i] != 0) {
            return Err(QuizError::Validation(format!(
                "distance matrix diagonal must be 0, found {} at {i}",
                rows[i][i]
            )));
        }
        Ok(Self { rows })
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> u32 {
        self.rows[from][to]
    }

    /// Returns true if `distance(i, j) == distance(j, i)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }
}

impl TryFrom<Vec<Vec<u32>>> for DistanceMatrix {
    type Error = QuizError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<u32>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            DistanceMatrix::new(vec![]),
            Err(QuizError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_ragged() {
        let err = DistanceMatrix::new(vec![vec![0, 1], vec![1]]);
        assert!(matches!(err, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_rejects_nonzero_diagonal() {
        let err = DistanceMatrix::new(vec![vec![0, 1], vec![1, 3]]);
        assert!(matches!(err, Err(QuizError::Validation(_))));
    }

    #[test]
    fn test_asymmetric_is_allowed() {
        let matrix = DistanceMatrix::new(vec![vec![0, 1], vec![5, 0]]).unwrap();
        assert!(!matrix.is_symmetric());
        assert_eq!(matrix.distance(1, 0), 5);
    }

    #[test]
    fn test_json_round_trip_validates() {
        let matrix: DistanceMatrix = serde_json::from_str("[[0,3],[3,0]]").unwrap();
        assert_eq!(matrix.distance(0, 1), 3);

        let bad: std::result::Result<DistanceMatrix, _> = serde_json::from_str("[[1,3],[3,0]]");
        assert!(bad.is_err());
    }
}
