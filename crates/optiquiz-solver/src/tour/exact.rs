//! Exhaustive enumeration of every visiting order.

use itertools::Itertools;

use super::{TourProblem, TourSolution};

/// Tries every permutation of the required nodes in lexicographic position
/// order and keeps the cheapest; the first cheapest ordering wins ties.
///
/// Runs in `O(k!)` time. Callers bound `k` before invoking it.
pub fn solve_exact(problem: &TourProblem<'_>) -> TourSolution {
    let required = problem.required();
    problem.best_of(required.iter().copied().permutations(required.len()))
}
