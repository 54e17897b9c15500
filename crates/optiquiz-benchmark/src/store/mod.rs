//! Persistence for timings, outcomes and tour sessions.

mod jsonl;
mod memory;

use std::sync::Arc;

use optiquiz_core::{DistanceMatrix, PerformanceSample, Result};
use serde::{Deserialize, Serialize};

pub use jsonl::JsonLinesStore;
pub use memory::MemoryStore;

/// Identifier assigned to a recorded tour session, starting at 1.
pub type SessionId = u64;

/// A correctly answered tour round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub session_id: SessionId,
    pub player: String,
    pub home_city: String,
    /// Cities the player visited between the two home stops.
    pub selected_cities: Vec<String>,
    /// Optimal closed route as city names.
    pub shortest_route: Vec<String>,
}

/// Append-only storage of [`PerformanceSample`]s.
pub trait PerformanceStore {
    fn record_sample(&self, sample: PerformanceSample) -> Result<()>;

    /// Returns up to `limit` samples, most recently recorded first.
    fn fetch_recent_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>>;
}

/// Storage of player outcomes, tour sessions and won games.
pub trait ResultStore {
    fn record_outcome(&self, player: &str, outcome: &str) -> Result<()>;

    /// Stores the round's matrix and returns a fresh session id.
    fn record_session(&self, home_city: &str, matrix: &DistanceMatrix) -> Result<SessionId>;

    fn record_game(&self, game: GameRecord) -> Result<()>;
}

impl<T: PerformanceStore + ?Sized> PerformanceStore for &T {
    fn record_sample(&self, sample: PerformanceSample) -> Result<()> {
        (**self).record_sample(sample)
    }

    fn fetch_recent_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>> {
        (**self).fetch_recent_samples(limit)
    }
}

impl<T: PerformanceStore + ?Sized> PerformanceStore for Arc<T> {
    fn record_sample(&self, sample: PerformanceSample) -> Result<()> {
        (**self).record_sample(sample)
    }

    fn fetch_recent_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>> {
        (**self).fetch_recent_samples(limit)
    }
}

impl<T: ResultStore + ?Sized> ResultStore for &T {
    fn record_outcome(&self, player: &str, outcome: &str) -> Result<()> {
        (**self).record_outcome(player, outcome)
    }

    fn record_session(&self, home_city: &str, matrix: &DistanceMatrix) -> Result<SessionId> {
        (**self).record_session(home_city, matrix)
    }

    fn record_game(&self, game: GameRecord) -> Result<()> {
        (**self).record_game(game)
    }
}

impl<T: ResultStore + ?Sized> ResultStore for Arc<T> {
    fn record_outcome(&self, player: &str, outcome: &str) -> Result<()> {
        (**self).record_outcome(player, outcome)
    }

    fn record_session(&self, home_city: &str, matrix: &DistanceMatrix) -> Result<SessionId> {
        (**self).record_session(home_city, matrix)
    }

    fn record_game(&self, game: GameRecord) -> Result<()> {
        (**self).record_game(game)
    }
}
