//! OptiQuiz - guess the optimal answer
//!
//! Players see a random snakes-and-ladders board or a city distance matrix
//! and must find the best answer. Every round runs several solvers, times
//! them, and stores the timings for the performance chart.
//!
//! # Example
//!
//! ```rust
//! use optiquiz::prelude::*;
//!
//! let config = QuizConfig::new().with_random_seed(3);
//! let mut quiz = BoardQuiz::new(config, MemoryStore::new());
//!
//! let round = quiz.start_round(8).unwrap();
//! assert_eq!(round.board_size, 64);
//! assert!(round.choices.contains(&round.correct_answer));
//! ```

pub mod distractor;
pub mod quiz;
pub mod validation;

pub use distractor::generate_choices;
pub use quiz::{
    complexity_table, AlgorithmReport, BoardQuiz, BoardRound, NewTourGame, TourQuiz,
    TourSubmission, TourVerdict,
};

pub use optiquiz_benchmark as benchmark;
pub use optiquiz_config as config;
pub use optiquiz_core as model;
pub use optiquiz_solver as solver;

#[cfg(feature = "console")]
pub use optiquiz_console as console;

pub mod prelude {
    pub use super::{
        complexity_table, generate_choices, AlgorithmReport, BoardQuiz, BoardRound, NewTourGame,
        TourQuiz, TourSubmission, TourVerdict,
    };
    pub use optiquiz_benchmark::{
        aggregate, JsonLinesStore, MemoryStore, PerformanceStore, ResultStore,
    };
    pub use optiquiz_config::QuizConfig;
    pub use optiquiz_core::{Board, DistanceMatrix, QuizError, Result, Route, TrendSeries};
    pub use optiquiz_solver::{BoardAlgorithm, TourAlgorithm};
}
