//! Random symmetric distance matrices for the tour game.

use optiquiz_core::{DistanceMatrix, QuizError, Result};
use rand::Rng;

/// Generates an `n x n` symmetric matrix with a zero diagonal and every
/// other entry drawn uniformly from `low..=high`.
///
/// # Example
///
/// ```
/// use optiquiz_solver::generate_matrix;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let matrix = generate_matrix(5, 50, 100, &mut rng).unwrap();
///
/// assert_eq!(matrix.len(), 5);
/// assert!(matrix.is_symmetric());
/// ```
pub fn generate_matrix<R: Rng + ?Sized>(
    n: usize,
    low: u32,
    high: u32,
    rng: &mut R,
) -> Result<DistanceMatrix> {
    if n == 0 {
        return Err(QuizError::Validation(
            "cannot generate a matrix without nodes".into(),
        ));
    }
    if low > high {
        return Err(QuizError::Validation(format!(
            "distance range {low}..={high} is empty"
        )));
    }

    let mut rows = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let d = rng.random_range(low..=high);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    DistanceMatrix::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_entries_within_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let matrix = generate_matrix(10, 50, 100, &mut rng).unwrap();
        for i in 0..10 {
            for j in 0..10 {
                let d = matrix.distance(i, j);
                if i == j {
                    assert_eq!(d, 0);
                } else {
                    assert!((50..=100).contains(&d));
                    assert_eq!(d, matrix.distance(j, i));
                }
            }
        }
    }

    #[test]
    fn test_single_node() {
        let mut rng = StdRng::seed_from_u64(5);
        let matrix = generate_matrix(1, 50, 100, &mut rng).unwrap();
        assert_eq!(matrix.rows(), &[vec![0]]);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            generate_matrix(0, 50, 100, &mut rng),
            Err(QuizError::Validation(_))
        ));
        assert!(matches!(
            generate_matrix(3, 9, 1, &mut rng),
            Err(QuizError::Validation(_))
        ));
    }
}
