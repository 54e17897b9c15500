use std::sync::{Mutex, MutexGuard};

use optiquiz_core::{DistanceMatrix, PerformanceSample, QuizError, Result};

use super::{GameRecord, PerformanceStore, ResultStore, SessionId};

#[derive(Debug, Default)]
struct Tables {
    samples: Vec<PerformanceSample>,
    outcomes: Vec<(String, String)>,
    sessions: Vec<(String, DistanceMatrix)>,
    games: Vec<GameRecord>,
}

/// In-process store for tests and single-run tools.
///
/// Each write is one push under the lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| QuizError::Store("memory store lock poisoned".into()))
    }

    /// Recorded `(player, outcome)` pairs, oldest first.
    pub fn outcomes(&self) -> Result<Vec<(String, String)>> {
        Ok(self.lock()?.outcomes.clone())
    }

    /// Recorded games, oldest first.
    pub fn games(&self) -> Result<Vec<GameRecord>> {
        Ok(self.lock()?.games.clone())
    }

    pub fn session_count(&self) -> Result<usize> {
        Ok(self.lock()?.sessions.len())
    }
}

impl PerformanceStore for MemoryStore {
    fn record_sample(&self, sample: PerformanceSample) -> Result<()> {
        self.lock()?.samples.push(sample);
        Ok(())
    }

    fn fetch_recent_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>> {
        Ok(self.lock()?.samples.iter().rev().take(limit).cloned().collect())
    }
}

impl ResultStore for MemoryStore {
    fn record_outcome(&self, player: &str, outcome: &str) -> Result<()> {
        self.lock()?
            .outcomes
            .push((player.to_string(), outcome.to_string()));
        Ok(())
    }

    fn record_session(&self, home_city: &str, matrix: &DistanceMatrix) -> Result<SessionId> {
        let mut tables = self.lock()?;
        tables.sessions.push((home_city.to_string(), matrix.clone()));
        Ok(tables.sessions.len() as SessionId)
    }

    fn record_game(&self, game: GameRecord) -> Result<()> {
        self.lock()?.games.push(game);
        Ok(())
    }
}
