//! Chart series from recorded samples.

use std::collections::BTreeMap;

use optiquiz_core::{PerformanceSample, RunId, TrendSeries};

/// Groups samples by run, oldest run first, and builds one millisecond
/// series per algorithm.
///
/// Input order does not matter. A run that lacks an algorithm leaves no
/// entry in that algorithm's series; `positions` records which round each
/// entry came from. When a run holds two samples for the
/// same algorithm the later one in `samples` wins.
///
/// # Example
///
/// ```
/// use optiquiz_benchmark::aggregate;
/// use optiquiz_core::PerformanceSample;
///
/// let samples = vec![
///     PerformanceSample::new(200, "BFS", 4_000_000),
///     PerformanceSample::new(100, "BFS", 5_000_000),
/// ];
/// let trend = aggregate(&samples);
/// assert_eq!(trend.rounds, vec!["Round 1", "Round 2"]);
/// assert_eq!(trend.series["BFS"], vec![5.0, 4.0]);
/// ```
pub fn aggregate(samples: &[PerformanceSample]) -> TrendSeries {
    let mut runs: BTreeMap<RunId, BTreeMap<&str, f64>> = BTreeMap::new();
    for sample in samples {
        runs.entry(sample.run_id)
            .or_default()
            .insert(sample.algorithm.as_str(), sample.elapsed_ms());
    }

    let mut trend = TrendSeries::default();
    for (index, timings) in runs.values().enumerate() {
        trend.rounds.push(format!("Round {}", index + 1));
        for (&algorithm, &ms) in timings {
            trend.push(algorithm, index, ms);
        }
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(run_id: RunId, algorithm: &str, ms: u64) -> PerformanceSample {
        PerformanceSample::new(run_id, algorithm, ms * 1_000_000)
    }

    #[test]
    fn test_two_runs_two_algorithms() {
        // most recent first, as stores return them
        let samples = vec![
            sample(200, "Dijkstra", 6),
            sample(200, "BFS", 4),
            sample(100, "Dijkstra", 7),
            sample(100, "BFS", 5),
        ];
        let trend = aggregate(&samples);

        assert_eq!(trend.rounds, vec!["Round 1", "Round 2"]);
        assert_eq!(trend.series["BFS"], vec![5.0, 4.0]);
        assert_eq!(trend.series["Dijkstra"], vec![7.0, 6.0]);
    }

    #[test]
    fn test_missing_algorithm_leaves_gap() {
        let samples = vec![
            sample(1, "BFS", 1),
            sample(2, "BFS", 2),
            sample(2, "Dijkstra", 3),
        ];
        let trend = aggregate(&samples);

        assert_eq!(trend.rounds.len(), 2);
        assert_eq!(trend.series["BFS"], vec![1.0, 2.0]);
        assert_eq!(trend.series["Dijkstra"], vec![3.0]);
        assert_eq!(trend.positions["BFS"], vec![0, 1]);
        assert_eq!(trend.positions["Dijkstra"], vec![1]);
        assert_eq!(trend.value_at("Dijkstra", 0), None);
        assert_eq!(trend.value_at("Dijkstra", 1), Some(3.0));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let samples = vec![sample(1, "BFS", 1), sample(1, "BFS", 9)];
        let trend = aggregate(&samples);
        assert_eq!(trend.series["BFS"], vec![9.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_millisecond_rounding() {
        let samples = vec![PerformanceSample::new(1, "random_search", 1_236_000)];
        assert_eq!(aggregate(&samples).series["random_search"], vec![1.24]);
    }
}
