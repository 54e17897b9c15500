use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use optiquiz_core::{DistanceMatrix, PerformanceSample, QuizError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GameRecord, PerformanceStore, ResultStore, SessionId};

const SAMPLES_FILE: &str = "samples.jsonl";
const OUTCOMES_FILE: &str = "outcomes.jsonl";
const SESSIONS_FILE: &str = "sessions.jsonl";
const GAMES_FILE: &str = "games.jsonl";

#[derive(Debug, Serialize, Deserialize)]
struct OutcomeRow {
    player: String,
    outcome: String,
    recorded_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionRow {
    id: SessionId,
    home_city: String,
    distance_matrix: DistanceMatrix,
    created_at: DateTime<Utc>,
}

/// Directory of newline-delimited JSON files, one per table.
///
/// Files are opened for each call and closed before it returns. Each row is
/// written with a single `write_all` in append mode. Session ids are
/// assigned under a lock shared by all clones of the store.
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    dir: PathBuf,
    sessions: Arc<Mutex<()>>,
}

fn store_error(path: &Path, error: impl std::fmt::Display) -> QuizError {
    QuizError::Store(format!("{}: {error}", path.display()))
}

impl JsonLinesStore {
    /// Uses `dir` for the table files, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| store_error(&dir, e))?;
        Ok(Self {
            dir,
            sessions: Arc::new(Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, ()>> {
        self.sessions
            .lock()
            .map_err(|_| QuizError::Store("session id lock poisoned".into()))
    }

    fn append<T: Serialize>(&self, file: &str, row: &T) -> Result<()> {
        let path = self.dir.join(file);
        let mut line = serde_json::to_string(row).map_err(|e| store_error(&path, e))?;
        line.push('\n');
        let mut handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| store_error(&path, e))?;
        handle
            .write_all(line.as_bytes())
            .map_err(|e| store_error(&path, e))?;
        debug!(event = "row_appended", file, bytes = line.len());
        Ok(())
    }

    fn read_all<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.dir.join(file);
        let handle = match File::open(&path) {
            Ok(handle) => handle,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(store_error(&path, e)),
        };
        let mut rows = Vec::new();
        for line in BufReader::new(handle).lines() {
            let line = line.map_err(|e| store_error(&path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(serde_json::from_str(&line).map_err(|e| store_error(&path, e))?);
        }
        Ok(rows)
    }

    /// Recorded games, oldest first.
    pub fn games(&self) -> Result<Vec<GameRecord>> {
        self.read_all(GAMES_FILE)
    }

    /// Recorded `(player, outcome)` pairs, oldest first.
    pub fn outcomes(&self) -> Result<Vec<(String, String)>> {
        let rows: Vec<OutcomeRow> = self.read_all(OUTCOMES_FILE)?;
        Ok(rows.into_iter().map(|r| (r.player, r.outcome)).collect())
    }
}

impl PerformanceStore for JsonLinesStore {
    fn record_sample(&self, sample: PerformanceSample) -> Result<()> {
        self.append(SAMPLES_FILE, &sample)
    }

    fn fetch_recent_samples(&self, limit: usize) -> Result<Vec<PerformanceSample>> {
        let mut samples: Vec<PerformanceSample> = self.read_all(SAMPLES_FILE)?;
        samples.reverse();
        samples.truncate(limit);
        Ok(samples)
    }
}

impl ResultStore for JsonLinesStore {
    fn record_outcome(&self, player: &str, outcome: &str) -> Result<()> {
        self.append(
            OUTCOMES_FILE,
            &OutcomeRow {
                player: player.to_string(),
                outcome: outcome.to_string(),
                recorded_at: Utc::now(),
            },
        )
    }

    fn record_session(&self, home_city: &str, matrix: &DistanceMatrix) -> Result<SessionId> {
        let _guard = self.lock_sessions()?;
        let previous: Vec<SessionRow> = self.read_all(SESSIONS_FILE)?;
        let id = previous.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        self.append(
            SESSIONS_FILE,
            &SessionRow {
                id,
                home_city: home_city.to_string(),
                distance_matrix: matrix.clone(),
                created_at: Utc::now(),
            },
        )?;
        Ok(id)
    }

    fn record_game(&self, game: GameRecord) -> Result<()> {
        self.append(GAMES_FILE, &game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonLinesStore::open(dir.path()).unwrap();
            store
                .record_sample(PerformanceSample::new(100, "BFS", 5_000_000))
                .unwrap();
            store
                .record_sample(PerformanceSample::new(200, "BFS", 4_000_000))
                .unwrap();
        }

        let store = JsonLinesStore::open(dir.path()).unwrap();
        let recent = store.fetch_recent_samples(1).unwrap();
        assert_eq!(recent, vec![PerformanceSample::new(200, "BFS", 4_000_000)]);
        assert_eq!(store.fetch_recent_samples(10).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_files_read_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLinesStore::open(dir.path().join("nested")).unwrap();
        assert!(store.fetch_recent_samples(5).unwrap().is_empty());
        assert!(store.games().unwrap().is_empty());
    }

    #[test]
    fn test_sessions_and_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLinesStore::open(dir.path()).unwrap();
        let matrix = DistanceMatrix::new(vec![vec![0, 3], vec![3, 0]]).unwrap();

        assert_eq!(store.record_session("A", &matrix).unwrap(), 1);
        assert_eq!(store.record_session("C", &matrix).unwrap(), 2);

        store.record_outcome("Grace Hopper", "lose").unwrap();
        assert_eq!(
            store.outcomes().unwrap(),
            vec![("Grace Hopper".to_string(), "lose".to_string())]
        );
    }

    #[test]
    fn test_concurrent_sessions_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonLinesStore::open(dir.path()).unwrap();
        let matrix = DistanceMatrix::new(vec![vec![0, 1], vec![1, 0]]).unwrap();

        let mut ids: Vec<SessionId> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| {
                    let store = store.clone();
                    let matrix = &matrix;
                    scope.spawn(move || {
                        (0..10)
                            .map(|_| store.record_session("A", matrix).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            workers
                .into_iter()
                .flat_map(|worker| worker.join().unwrap())
                .collect()
        });

        ids.sort_unstable();
        assert_eq!(ids, (1..=80).collect::<Vec<SessionId>>());
    }

    #[test]
    fn test_corrupt_line_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SAMPLES_FILE), "not json\n").unwrap();
        let store = JsonLinesStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.fetch_recent_samples(1),
            Err(QuizError::Store(_))
        ));
    }
}
