//! Quiz rounds: generate a puzzle, benchmark every solver on it, grade the
//! player and keep the timings.
//!
//! Each quiz owns its store. Give the board and tour quizzes separate stores
//! so their performance charts only contain their own algorithms.

mod board;
mod tour;

#[cfg(test)]
mod tests;

use optiquiz_core::{next_run_id, RunId};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use board::{BoardQuiz, BoardRound};
pub use tour::{
    complexity_table, AlgorithmReport, NewTourGame, TourQuiz, TourSubmission, TourVerdict,
};

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Hands out strictly increasing run ids.
#[derive(Debug, Default)]
struct RunClock {
    last: Option<RunId>,
}

impl RunClock {
    fn next(&mut self) -> RunId {
        let id = next_run_id(self.last);
        self.last = Some(id);
        id
    }
}
