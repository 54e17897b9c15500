//! Greedy nearest-neighbour walk.

use super::{TourProblem, TourSolution};

/// Repeatedly moves to the closest unvisited required node, then returns
/// home. Equal distances go to the lowest node index.
pub fn solve_nearest_neighbor(problem: &TourProblem<'_>) -> TourSolution {
    let matrix = problem.matrix();
    let mut unvisited = problem.required().to_vec();
    let mut order = Vec::with_capacity(unvisited.len());
    let mut current = problem.home();

    while let Some(pos) = unvisited
        .iter()
        .enumerate()
        .min_by_key(|&(_, &node)| (matrix.distance(current, node), node))
        .map(|(pos, _)| pos)
    {
        current = unvisited.swap_remove(pos);
        order.push(current);
    }

    problem.solution(&order)
}
