use std::collections::BTreeMap;

use optiquiz_benchmark::{
    aggregate, GameRecord, PerformanceRecorder, PerformanceStore, ResultStore, SessionId,
};
use optiquiz_config::QuizConfig;
use optiquiz_core::{
    route_cost, AlgorithmResult, DistanceMatrix, QuizError, Result, Route, TrendSeries,
};
use optiquiz_solver::{generate_matrix, TourAlgorithm, TourProblem};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{seeded_rng, RunClock};
use crate::validation::require_non_empty;

/// A fresh tour puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTourGame {
    pub cities: Vec<String>,
    pub home_city: String,
    pub home_index: usize,
    pub distance_matrix: DistanceMatrix,
}

/// A player's answer: the cities visited between leaving and returning home.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSubmission {
    pub player_name: String,
    pub home_city: String,
    pub route_between: Vec<String>,
    pub distance_matrix: Vec<Vec<u32>>,
}

/// One strategy's answer, with city names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmReport {
    pub route: Vec<String>,
    pub distance: u64,
    pub duration_ms: f64,
}

/// The graded answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourVerdict {
    pub session_id: SessionId,
    pub correct: bool,
    pub home_city: String,
    pub your_route: Vec<String>,
    pub your_distance: u64,
    pub optimal_route: Vec<String>,
    pub optimal_distance: u64,
    pub algorithms: BTreeMap<String, AlgorithmReport>,
    pub message: String,
}

/// Every [`TourAlgorithm`] name with its running time.
///
/// ```
/// let table = optiquiz::complexity_table();
/// assert!(table["bruteforce"].starts_with("O(k!)"));
/// ```
pub fn complexity_table() -> BTreeMap<&'static str, &'static str> {
    TourAlgorithm::ALL
        .iter()
        .map(|a| (a.name(), a.complexity()))
        .collect()
}

struct ParsedSubmission<'s> {
    player: &'s str,
    home_index: usize,
    selected: Vec<usize>,
    matrix: DistanceMatrix,
}

/// The travelling-salesman quiz: find the shortest closed route through
/// the chosen cities.
pub struct TourQuiz<St> {
    config: QuizConfig,
    store: St,
    rng: StdRng,
    clock: RunClock,
}

impl<St: PerformanceStore + ResultStore> TourQuiz<St> {
    pub fn new(config: QuizConfig, store: St) -> Self {
        Self {
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

    fn cities(&self) -> &[String] {
        &self.config.tour.cities
    }

    /// Random symmetric matrix over the configured cities and a random home.
    pub fn new_game(&mut self) -> Result<NewTourGame> {
        let tour = &self.config.tour;
        let n = tour.cities.len();
        let distance_matrix = generate_matrix(n, tour.matrix_low, tour.matrix_high, &mut self.rng)?;
        let home_index = self.rng.random_range(0..n);
        Ok(NewTourGame {
            cities: tour.cities.clone(),
            home_city: tour.cities[home_index].clone(),
            home_index,
            distance_matrix,
        })
    }

    fn parse<'s>(&self, submission: &'s TourSubmission) -> Result<ParsedSubmission<'s>> {
        let player = require_non_empty(&submission.player_name, "playerName is required")?;
        if submission.route_between.is_empty() {
            return Err(QuizError::Validation(
                "routeBetween must contain at least one city".into(),
            ));
        }
        let cities = self.cities();
        let home_city = require_non_empty(&submission.home_city, "homeCity is required")?;
        let home_index = cities
            .iter()
            .position(|c| c == home_city)
            .ok_or_else(|| QuizError::Validation("Invalid homeCity".into()))?;

        let n = cities.len();
        if submission.distance_matrix.len() != n
            || submission.distance_matrix.iter().any(|row| row.len() != n)
        {
            return Err(QuizError::Validation(format!(
                "distanceMatrix must be a {n}x{n} matrix"
            )));
        }
        let matrix = DistanceMatrix::new(submission.distance_matrix.clone())?;

        let mut selected = Vec::with_capacity(submission.route_between.len());
        for city in &submission.route_between {
            let index = cities.iter().position(|c| c == city).ok_or_else(|| {
                QuizError::Validation(format!("Unknown city {city} in routeBetween"))
            })?;
            if index == home_index {
                return Err(QuizError::Validation(
                    "routeBetween must not include home city".into(),
                ));
            }
            if selected.contains(&index) {
                return Err(QuizError::Validation(
                    "routeBetween must not contain duplicate cities".into(),
                ));
            }
            selected.push(index);
        }

        let max = self.config.tour.max_route_cities;
        if selected.len() > max {
            return Err(QuizError::Validation(format!(
                "Please choose at most {max} cities to keep the game fast."
            )));
        }

        Ok(ParsedSubmission {
            player,
            home_index,
            selected,
            matrix,
        })
    }

    fn names(&self, route: &[usize]) -> Vec<String> {
        route.iter().map(|&i| self.cities()[i].clone()).collect()
    }

    /// Grades a submission against the exact optimum.
    ///
    /// Every [`TourAlgorithm`] runs on the submitted cities under one run id;
    /// the first failure aborts the whole request. A route is correct when
    /// its distance equals the optimal distance, so any equally short
    /// ordering (the optimum reversed, or a tie) is accepted even when it
    /// differs from `optimal_route`. The session is always recorded, the
    /// game only when the answer is correct.
    pub fn check_answer(&mut self, submission: &TourSubmission) -> Result<TourVerdict> {
        let parsed = self.parse(submission)?;
        let home_index = parsed.home_index;
        let run_id = self.clock.next();
        info!(
            event = "round_start",
            game = "tour",
            run_id,
            cities = parsed.selected.len() as u64
        );

        let problem = TourProblem::new(home_index, parsed.selected.clone(), &parsed.matrix)?;
        let iterations = self.config.tour.random_search_iterations;
        let recorder = PerformanceRecorder::new(&self.store, run_id);
        let mut results: Vec<(TourAlgorithm, AlgorithmResult)> =
            Vec::with_capacity(TourAlgorithm::ALL.len());
        for algorithm in TourAlgorithm::ALL {
            let rng = &mut self.rng;
            let (solution, elapsed_nanos) = recorder.time(algorithm.name(), || {
                algorithm.solve(&problem, iterations, rng)
            })?;
            results.push((
                algorithm,
                AlgorithmResult {
                    route: solution.route,
                    distance: solution.distance,
                    elapsed_nanos,
                },
            ));
        }

        let optimal = results
            .iter()
            .find(|(algorithm, _)| algorithm.is_exact())
            .map(|(_, result)| result.clone())
            .ok_or_else(|| QuizError::Internal("no exact tour algorithm registered".into()))?;

        let your_route = Route::closed(home_index, &parsed.selected);
        let your_distance = route_cost(&parsed.matrix, &your_route);
        let correct = your_distance == optimal.distance;

        let home_city = self.cities()[home_index].clone();
        let session_id = self.store.record_session(&home_city, &parsed.matrix)?;
        if correct {
            self.store.record_game(GameRecord {
                session_id,
                player: parsed.player.to_string(),
                home_city: home_city.clone(),
                selected_cities: self.names(&parsed.selected),
                shortest_route: self.names(&optimal.route),
            })?;
        }

        info!(
            event = "round_end",
            game = "tour",
            run_id,
            answer = optimal.distance,
            correct
        );

        let algorithms = results
            .iter()
            .map(|(algorithm, result)| {
                (
                    algorithm.name().to_string(),
                    AlgorithmReport {
                        route: self.names(&result.route),
                        distance: result.distance,
                        duration_ms: result.duration_ms(),
                    },
                )
            })
            .collect();

        Ok(TourVerdict {
            session_id,
            correct,
            home_city,
            your_route: self.names(&your_route),
            your_distance,
            optimal_route: self.names(&optimal.route),
            optimal_distance: optimal.distance,
            algorithms,
            message: if correct {
                "Correct! Well done.".to_string()
            } else {
                "Not quite. Check the optimal route below.".to_string()
            },
        })
    }

    /// Timing chart over the last `limit` rounds.
    pub fn performance(&self, limit: Option<usize>) -> Result<TrendSeries> {
        let rounds = self.config.trend.resolve_limit(limit);
        let samples = self
            .store
            .fetch_recent_samples(rounds * TourAlgorithm::ALL.len())?;
        Ok(aggregate(&samples))
    }
}
