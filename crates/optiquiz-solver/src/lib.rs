//! OptiQuiz Solver Engine
//!
//! This crate computes the answers the quiz grades players against:
//! - Board and distance-matrix generation
//! - Minimum dice throws over a board (breadth-first search and Dijkstra)
//! - Closed tours over a required city subset (exact enumeration, nearest
//!   neighbour, spanning-tree approximation, random search)
//! - Closed algorithm registries ([`BoardAlgorithm::ALL`], [`TourAlgorithm::ALL`])

pub mod board;
pub mod matrix;
pub mod shortest_path;
pub mod tour;

pub use board::{generate_board, BoardGenerator};
pub use matrix::generate_matrix;
pub use shortest_path::{solve_bfs, solve_dijkstra, BoardAlgorithm, DICE_FACES};
pub use tour::{
    solve_exact, solve_nearest_neighbor, solve_random_search, solve_spanning_tree_approx,
    TourAlgorithm, TourProblem, TourSolution, EXHAUSTIVE_LIMIT,
};
