//! OptiQuiz Core - problem model shared by the solver and benchmark crates
//!
//! This crate provides:
//! - [`Board`]: a snakes-and-ladders board with its teleport mapping
//! - [`DistanceMatrix`]: a square city-distance matrix
//! - [`Route`] and [`route_cost`] for closed tours
//! - [`AlgorithmResult`], [`PerformanceSample`] and [`TrendSeries`] for benchmarking
//! - [`QuizError`], the error type of every fallible operation

pub mod board;
pub mod error;
pub mod matrix;
pub mod route;
pub mod sample;

pub use board::{Board, MAX_BOARD_SIDE, MIN_BOARD_SIDE};
pub use error::{QuizError, Result};
pub use matrix::DistanceMatrix;
pub use route::{route_cost, AlgorithmResult, Route};
pub use sample::{next_run_id, PerformanceSample, RunId, TrendSeries};
