use std::collections::BTreeMap;

use optiquiz_benchmark::{aggregate, PerformanceRecorder, PerformanceStore, ResultStore};
use optiquiz_config::QuizConfig;
use optiquiz_core::{QuizError, Result, RunId, TrendSeries};
use optiquiz_solver::{BoardAlgorithm, BoardGenerator};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use super::{seeded_rng, RunClock};
use crate::distractor::generate_choices;
use crate::validation::{require_non_empty, validate_board_side, validate_player_name};

/// What the player sees for one board round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRound {
    pub snakes: BTreeMap<u32, u32>,
    pub ladders: BTreeMap<u32, u32>,
    pub board_size: u32,
    pub choices: Vec<u32>,
    pub correct_answer: u32,
    pub run_id: RunId,
}

/// The snakes-and-ladders quiz: how few dice throws reach the last cell?
pub struct BoardQuiz<St> {
    config: QuizConfig,
    generator: BoardGenerator,
    store: St,
    rng: StdRng,
    clock: RunClock,
}

impl<St: PerformanceStore + ResultStore> BoardQuiz<St> {
    /// Creates a quiz seeded from `config.random_seed`, or from the OS when
    /// no seed is configured.
    pub fn new(config: QuizConfig, store: St) -> Self {
        Self {
            generator: BoardGenerator::from_config(&config.generation),
            rng: seeded_rng(config.random_seed),
            config,
            store,
            clock: RunClock::default(),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Generates a board of side `n`, times every [`BoardAlgorithm`] on it
    /// under one run id, and builds the multiple-choice options.
    ///
    /// # Errors
    ///
    /// [`QuizError::Validation`] for an out-of-range `n`, generation and
    /// store failures as they occur, and [`QuizError::Internal`] if the
    /// solvers disagree.
    pub fn start_round(&mut self, n: u32) -> Result<BoardRound> {
        let n = validate_board_side(n, &self.config.board)?;
        let run_id = self.clock.next();
        info!(event = "round_start", game = "board", run_id, n);

        let board = self.generator.generate(n, &mut self.rng)?;

        let recorder = PerformanceRecorder::new(&self.store, run_id);
        let mut answers = Vec::with_capacity(BoardAlgorithm::ALL.len());
        for algorithm in BoardAlgorithm::ALL {
            let (throws, _) = recorder.time_result(algorithm.name(), || algorithm.solve(&board))?;
            answers.push((algorithm, throws));
        }

        let Some(&(_, correct_answer)) = answers.first() else {
            return Err(QuizError::Internal("no board algorithm registered".into()));
        };
        if let Some((algorithm, throws)) = answers.iter().find(|(_, t)| *t != correct_answer) {
            return Err(QuizError::Internal(format!(
                "{algorithm} found {throws} throws but {} found {correct_answer}",
                BoardAlgorithm::ALL[0]
            )));
        }

        let d = &self.config.distractors;
        let choices = generate_choices(
            correct_answer,
            d.count,
            d.spread,
            d.max_attempts,
            &mut self.rng,
        )?;

        info!(
            event = "round_end",
            game = "board",
            run_id,
            answer = u64::from(correct_answer)
        );
        Ok(BoardRound {
            snakes: board.snakes().clone(),
            ladders: board.ladders().clone(),
            board_size: board.size(),
            choices,
            correct_answer,
            run_id,
        })
    }

    /// Records how a player did.
    pub fn save_result(&self, player: &str, outcome: &str) -> Result<()> {
        let player = validate_player_name(player)?;
        let outcome = require_non_empty(outcome, "Result is required")?;
        self.store.record_outcome(player, outcome)
    }

    /// Timing chart over the last `limit` rounds (the configured default
    /// when `None` or out of range).
    pub fn performance(&self, limit: Option<usize>) -> Result<TrendSeries> {
        let rounds = self.config.trend.resolve_limit(limit);
        let samples = self
            .store
            .fetch_recent_samples(rounds * BoardAlgorithm::ALL.len())?;
        Ok(aggregate(&samples))
    }
}
