//! Spanning-tree approximation: Prim's tree walked in pre-order.

use std::collections::{BTreeMap, BTreeSet};

use super::{TourProblem, TourSolution};

/// Builds a minimum spanning tree over home and the required nodes, then
/// visits the tree in depth-first pre-order from home and closes the loop.
///
/// Prim's expansion scans tree nodes in the order they joined and outside
/// nodes by ascending index, keeping the first strictly cheapest edge. The
/// walk uses an explicit `(node, parent)` stack and visits children in the
/// order their edges were added.
pub fn solve_spanning_tree_approx(problem: &TourProblem<'_>) -> TourSolution {
    let matrix = problem.matrix();
    let home = problem.home();

    let mut in_tree = vec![home];
    let mut outside: BTreeSet<usize> = problem.required().iter().copied().collect();
    let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();

    while !outside.is_empty() {
        let mut cheapest: Option<(u32, usize, usize)> = None;
        for &u in &in_tree {
            for &v in &outside {
                let w = matrix.distance(u, v);
                if cheapest.map_or(true, |(best, _, _)| w < best) {
                    cheapest = Some((w, u, v));
                }
            }
        }
        let Some((_, u, v)) = cheapest else {
            break;
        };
        adjacency.entry(u).or_default().push(v);
        adjacency.entry(v).or_default().push(u);
        outside.remove(&v);
        in_tree.push(v);
    }

    let mut order = Vec::with_capacity(in_tree.len());
    let mut stack: Vec<(usize, Option<usize>)> = vec![(home, None)];
    while let Some((node, parent)) = stack.pop() {
        order.push(node);
        if let Some(neighbours) = adjacency.get(&node) {
            // reversed so the first child is popped first
            for &next in neighbours.iter().rev() {
                if Some(next) != parent {
                    stack.push((next, Some(node)));
                }
            }
        }
    }

    // order[0] is home
    problem.solution(&order[1..])
}
