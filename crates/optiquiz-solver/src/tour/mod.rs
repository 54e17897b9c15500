//! Closed tours from a home node through a required subset of nodes.
//!
//! # Strategies
//!
//! - **Exact**: enumerates every ordering (ground truth, `O(k!)`)
//! - **Nearest Neighbor**: greedy walk to the closest unvisited node
//! - **Spanning Tree Approx**: Prim's tree walked in pre-order
//! - **Random Search**: exact below [`EXHAUSTIVE_LIMIT`], sampled orderings above it
//!
//! All strategies work on a validated [`TourProblem`] and return a
//! [`TourSolution`] whose distance equals [`route_cost`] of its route.

mod exact;
mod nearest_neighbor;
mod random_search;
mod spanning_tree;


use std::collections::BTreeSet;
use std::fmt;

use optiquiz_core::{route_cost, DistanceMatrix, QuizError, Result, Route};
use rand::Rng;
use serde::Serialize;

pub use exact::solve_exact;
pub use nearest_neighbor::solve_nearest_neighbor;
pub use random_search::{solve_random_search, EXHAUSTIVE_LIMIT};
pub use spanning_tree::solve_spanning_tree_approx;

/// A validated tour instance.
///
/// `required` is non-empty, free of duplicates, does not contain `home`,
/// and every index fits the matrix.
///
/// # Example
///
/// ```
/// use optiquiz_core::DistanceMatrix;
/// use optiquiz_solver::{solve_exact, TourProblem};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0, 2, 9],
///     vec![2, 0, 4],
///     vec![9, 4, 0],
/// ]).unwrap();
/// let problem = TourProblem::new(0, vec![1, 2], &matrix).unwrap();
///
/// let best = solve_exact(&problem);
/// assert_eq!(best.route.as_slice(), &[0, 1, 2, 0]);
/// assert_eq!(best.distance, 15);
/// ```
#[derive(Debug, Clone)]
pub struct TourProblem<'a> {
    home: usize,
    required: Vec<usize>,
    matrix: &'a DistanceMatrix,
}

impl<'a> TourProblem<'a> {
    /// Validates and builds a tour instance.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::SolverPrecondition`] for an empty required set,
    /// duplicates, a required `home`, or indices outside the matrix.
    pub fn new(home: usize, required: Vec<usize>, matrix: &'a DistanceMatrix) -> Result<Self> {
        let n = matrix.len();
        if home >= n {
            return Err(QuizError::SolverPrecondition(format!(
                "home node {home} outside a {n}-node matrix"
            )));
        }
        if required.is_empty() {
            return Err(QuizError::SolverPrecondition(
                "required node set is empty".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for &node in &required {
            if node >= n {
                return Err(QuizError::SolverPrecondition(format!(
                    "required node {node} outside a {n}-node matrix"
                )));
            }
            if node == home {
                return Err(QuizError::SolverPrecondition(format!(
                    "required nodes contain the home node {home}"
                )));
            }
            if !seen.insert(node) {
                return Err(QuizError::SolverPrecondition(format!(
                    "required node {node} listed twice"
                )));
            }
        }
        Ok(Self {
            home,
            required,
            matrix,
        })
    }

    pub fn home(&self) -> usize {
        self.home
    }

    pub fn required(&self) -> &[usize] {
        &self.required
    }

    pub fn matrix(&self) -> &'a DistanceMatrix {
        self.matrix
    }

    /// Cost of `home -> order... -> home` without building the route.
    fn closed_cost(&self, order: &[usize]) -> u64 {
        let d = |a: usize, b: usize| u64::from(self.matrix.distance(a, b));
        match (order.first(), order.last()) {
            (Some(&first), Some(&last)) => {
                d(self.home, first)
                    + order.windows(2).map(|w| d(w[0], w[1])).sum::<u64>()
                    + d(last, self.home)
            }
            _ => d(self.home, self.home),
        }
    }

    /// Closes `order` into a route and prices it.
    fn solution(&self, order: &[usize]) -> TourSolution {
        let route = Route::closed(self.home, order);
        let distance = route_cost(self.matrix, &route);
        TourSolution { route, distance }
    }

    /// Keeps the cheapest ordering; the first one seen wins ties.
    ///
    /// Falls back to the required order when `orders` is empty.
    fn best_of<I>(&self, orders: I) -> TourSolution
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        let mut best: Option<(u64, Vec<usize>)> = None;
        for order in orders {
            let cost = self.closed_cost(&order);
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, order));
            }
        }
        match best {
            Some((_, order)) => self.solution(&order),
            None => self.solution(&self.required),
        }
    }
}

/// A closed route and its total distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourSolution {
    pub route: Route,
    pub distance: u64,
}

/// The tour strategies run for every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TourAlgorithm {
    Exact,
    NearestNeighbor,
    SpanningTreeApprox,
    RandomSearch,
}

impl TourAlgorithm {
    /// Every tour strategy, in the order the quiz runs them.
    pub const ALL: [TourAlgorithm; 4] = [
        TourAlgorithm::Exact,
        TourAlgorithm::NearestNeighbor,
        TourAlgorithm::SpanningTreeApprox,
        TourAlgorithm::RandomSearch,
    ];

    /// Name used for performance samples and response keys.
    pub fn name(self) -> &'static str {
        match self {
            TourAlgorithm::Exact => "bruteforce",
            TourAlgorithm::NearestNeighbor => "nearest_neighbor",
            TourAlgorithm::SpanningTreeApprox => "mst_prim",
            TourAlgorithm::RandomSearch => "random_search",
        }
    }

    /// Human-readable running time.
    pub fn complexity(self) -> &'static str {
        match self {
            TourAlgorithm::Exact => {
                "O(k!) where k is the number of selected cities (exact search over all permutations)."
            }
            TourAlgorithm::NearestNeighbor => {
                "O(k^2) - greedy algorithm: for each step, scan the remaining cities to find the nearest one."
            }
            TourAlgorithm::SpanningTreeApprox => {
                "O(k^3) - build a Minimum Spanning Tree with Prim's algorithm, then do a DFS traversal."
            }
            TourAlgorithm::RandomSearch => {
                "O(I * k) where I is the number of random permutations sampled."
            }
        }
    }

    /// Returns true if the strategy always finds the optimum.
    pub fn is_exact(self) -> bool {
        matches!(self, TourAlgorithm::Exact)
    }

    /// Runs the strategy. `iterations` only affects [`TourAlgorithm::RandomSearch`].
    pub fn solve<R: Rng + ?Sized>(
        self,
        problem: &TourProblem<'_>,
        iterations: usize,
        rng: &mut R,
    ) -> TourSolution {
        match self {
            TourAlgorithm::Exact => solve_exact(problem),
            TourAlgorithm::NearestNeighbor => solve_nearest_neighbor(problem),
            TourAlgorithm::SpanningTreeApprox => solve_spanning_tree_approx(problem),
            TourAlgorithm::RandomSearch => solve_random_search(problem, iterations, rng),
        }
    }
}

impl fmt::Display for TourAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
