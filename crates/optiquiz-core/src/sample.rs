//! Performance samples and the trend series derived from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of one quiz round: milliseconds since the Unix epoch.
pub type RunId = i64;

/// Returns a run id based on the current time that is strictly greater
/// than `previous`.
///
/// # Example
///
/// ```
/// use optiquiz_core::next_run_id;
///
/// let first = next_run_id(None);
/// let second = next_run_id(Some(first));
/// assert!(second > first);
/// ```
pub fn next_run_id(previous: Option<RunId>) -> RunId {
    let now = chrono::Utc::now().timestamp_millis();
    match previous {
        Some(prev) if now <= prev => prev + 1,
        _ => now,
    }
}

/// Timing of one algorithm in one run. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSample {
    pub run_id: RunId,
    pub algorithm: String,
    pub elapsed_nanos: u64,
}

impl PerformanceSample {
    pub fn new(run_id: RunId, algorithm: impl Into<String>, elapsed_nanos: u64) -> Self {
        Self {
            run_id,
            algorithm: algorithm.into(),
            elapsed_nanos,
        }
    }

    /// Elapsed time in milliseconds rounded to two decimals.
    ///
    /// # Example
    ///
    /// ```
    /// use optiquiz_core::PerformanceSample;
    ///
    /// let sample = PerformanceSample::new(1, "BFS", 1_234_567);
    /// assert_eq!(sample.elapsed_ms(), 1.23);
    /// ```
    pub fn elapsed_ms(&self) -> f64 {
        (self.elapsed_nanos as f64 / 1_000_000.0 * 100.0).round() / 100.0
    }
}

/// Chart-ready durations: one series per algorithm aligned on `rounds`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Round labels in chronological order ("Round 1", "Round 2", ...).
    pub rounds: Vec<String>,
    /// Millisecond durations per algorithm name.
    pub series: BTreeMap<String, Vec<f64>>,
    /// Round index of each entry in `series`, per algorithm.
    #[serde(skip)]
    pub positions: BTreeMap<String, Vec<usize>>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Appends `ms` to `algorithm`'s series as its value for `round`.
    pub fn push(&mut self, algorithm: &str, round: usize, ms: f64) {
        self.series.entry(algorithm.to_string()).or_default().push(ms);
        self.positions
            .entry(algorithm.to_string())
            .or_default()
            .push(round);
    }

    /// Returns `algorithm`'s duration in round `round`, or `None` when that
    /// round has no sample for it.
    ///
    /// A series without recorded positions (as read back from JSON) is
    /// taken to cover rounds in order.
    pub fn value_at(&self, algorithm: &str, round: usize) -> Option<f64> {
        let series = self.series.get(algorithm)?;
        match self.positions.get(algorithm) {
            Some(positions) => positions
                .iter()
                .position(|&p| p == round)
                .and_then(|i| series.get(i).copied()),
            None => series.get(round).copied(),
        }
    }

    /// Returns the algorithm names in the series.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms_rounding() {
        assert_eq!(PerformanceSample::new(1, "a", 5_000_000).elapsed_ms(), 5.0);
        assert_eq!(PerformanceSample::new(1, "a", 4_999).elapsed_ms(), 0.0);
        assert_eq!(PerformanceSample::new(1, "a", 7_125_000).elapsed_ms(), 7.13);
    }

    #[test]
    fn test_next_run_id_is_monotonic() {
        let far_future = chrono::Utc::now().timestamp_millis() + 60_000;
        assert_eq!(next_run_id(Some(far_future)), far_future + 1);
    }

    #[test]
    fn test_value_at_follows_positions() {
        let mut trend = TrendSeries::default();
        trend.rounds = vec!["Round 1".into(), "Round 2".into()];
        trend.push("BFS", 0, 1.0);
        trend.push("BFS", 1, 2.0);
        trend.push("Dijkstra", 1, 9.0);

        assert_eq!(trend.value_at("Dijkstra", 0), None);
        assert_eq!(trend.value_at("Dijkstra", 1), Some(9.0));
        assert_eq!(trend.value_at("BFS", 1), Some(2.0));
        assert_eq!(trend.value_at("DFS", 0), None);
    }

    #[test]
    fn test_value_at_without_positions_is_positional() {
        let mut trend = TrendSeries::default();
        trend.series.insert("BFS".into(), vec![3.0, 4.0]);
        assert_eq!(trend.value_at("BFS", 1), Some(4.0));
        assert_eq!(trend.value_at("BFS", 2), None);
    }

    #[test]
    fn test_empty_trend() {
        let trend = TrendSeries::default();
        assert!(trend.is_empty());
        assert_eq!(trend.algorithms().count(), 0);
    }
}
