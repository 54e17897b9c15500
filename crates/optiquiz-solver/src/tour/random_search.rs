//! Random permutation sampling.

use rand::seq::SliceRandom;
use rand::Rng;

use super::exact::solve_exact;
use super::{TourProblem, TourSolution};

/// Largest required set that random search enumerates exhaustively.
pub const EXHAUSTIVE_LIMIT: usize = 7;

/// Up to [`EXHAUSTIVE_LIMIT`] required nodes this is [`solve_exact`].
/// Beyond that it shuffles the required nodes `iterations` times,
/// independently, and keeps the cheapest ordering. Not guaranteed optimal.
pub fn solve_random_search<R: Rng + ?Sized>(
    problem: &TourProblem<'_>,
    iterations: usize,
    rng: &mut R,
) -> TourSolution {
    if problem.required().len() <= EXHAUSTIVE_LIMIT {
        return solve_exact(problem);
    }

    let required = problem.required();
    problem.best_of((0..iterations).map(|_| {
        let mut order = required.to_vec();
        order.shuffle(rng);
        order
    }))
}
