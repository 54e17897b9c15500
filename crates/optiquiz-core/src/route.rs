//! Closed routes and algorithm results.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::matrix::DistanceMatrix;

/// Ordered node indices starting and ending at the home node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route(Vec<usize>);

impl Route {
    /// Builds `home, order..., home`.
    ///
    /// # Example
    ///
    /// ```
    /// use optiquiz_core::Route;
    ///
    /// let route = Route::closed(0, &[2, 1]);
    /// assert_eq!(route.as_slice(), &[0, 2, 1, 0]);
    /// ```
    pub fn closed(home: usize, order: &[usize]) -> Self {
        let mut nodes = Vec::with_capacity(order.len() + 2);
        nodes.push(home);
        nodes.extend_from_slice(order);
        nodes.push(home);
        Self(nodes)
    }

    /// Wraps an arbitrary node sequence without checking it.
    pub fn from_nodes(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Returns the nodes strictly between the two home visits.
    pub fn interior(&self) -> &[usize] {
        match self.0.len() {
            0..=2 => &[],
            len => &self.0[1..len - 1],
        }
    }
}

impl Deref for Route {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

/// Sums `matrix[route[i]][route[i + 1]]` over consecutive pairs.
///
/// # Example
///
/// ```
/// use optiquiz_core::{route_cost, DistanceMatrix};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 4, 7],
///     vec![4, 0, 2],
///     vec![7, 2, 0],
/// ]).unwrap();
///
/// assert_eq!(route_cost(&matrix, &[0, 1, 2, 0]), 13);
/// assert_eq!(route_cost(&matrix, &[0]), 0);
/// ```
pub fn route_cost(matrix: &DistanceMatrix, route: &[usize]) -> u64 {
    route
        .windows(2)
        .map(|pair| u64::from(matrix.distance(pair[0], pair[1])))
        .sum()
}

/// Outcome of one timed strategy run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub route: Route,
    pub distance: u64,
    pub elapsed_nanos: u64,
}

impl AlgorithmResult {
    /// Returns the elapsed time in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.elapsed_nanos as f64 / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0, 1, 9, 1],
            vec![1, 0, 1, 9],
            vec![9, 1, 0, 1],
            vec![1, 9, 1, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_closed_route_shape() {
        let route = Route::closed(3, &[0, 1, 2]);
        assert_eq!(route.len(), 5);
        assert_eq!(route.first(), Some(&3));
        assert_eq!(route.last(), Some(&3));
        assert_eq!(route.interior(), &[0, 1, 2]);
    }

    #[test]
    fn test_route_cost_perimeter() {
        assert_eq!(route_cost(&square(), &Route::closed(0, &[1, 2, 3])), 4);
        assert_eq!(route_cost(&square(), &Route::closed(0, &[2, 1, 3])), 20);
    }

    #[test]
    fn test_route_cost_is_directional() {
        let matrix = DistanceMatrix::new(vec![vec![0, 2], vec![5, 0]]).unwrap();
        assert_eq!(route_cost(&matrix, &[0, 1]), 2);
        assert_eq!(route_cost(&matrix, &[1, 0]), 5);
    }

    #[test]
    fn test_duration_ms() {
        let result = AlgorithmResult {
            route: Route::closed(0, &[1]),
            distance: 2,
            elapsed_nanos: 2_500_000,
        };
        assert!((result.duration_ms() - 2.5).abs() < f64::EPSILON);
    }
}
