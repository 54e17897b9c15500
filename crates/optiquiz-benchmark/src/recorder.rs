//! Wall-clock timing of solver calls.

use std::fmt::Display;
use std::time::Instant;

use optiquiz_core::{PerformanceSample, Result, RunId};
use tracing::{debug, warn};

use crate::store::PerformanceStore;

fn nanos_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Calls `f` once and returns its value with the elapsed nanoseconds.
pub fn measure<R>(label: &str, f: impl FnOnce() -> R) -> (R, u64) {
    let start = Instant::now();
    let value = f();
    let elapsed_nanos = nanos_since(start);
    debug!(event = "algorithm_timed", algorithm = label, elapsed_nanos);
    (value, elapsed_nanos)
}

/// Like [`measure`] for fallible calls.
///
/// The error is returned unchanged; the time spent before it is logged.
pub fn measure_result<R, E: Display>(
    label: &str,
    f: impl FnOnce() -> std::result::Result<R, E>,
) -> std::result::Result<(R, u64), E> {
    let start = Instant::now();
    let outcome = f();
    let elapsed_nanos = nanos_since(start);
    match outcome {
        Ok(value) => {
            debug!(event = "algorithm_timed", algorithm = label, elapsed_nanos);
            Ok((value, elapsed_nanos))
        }
        Err(error) => {
            warn!(
                event = "algorithm_failed",
                algorithm = label,
                elapsed_nanos,
                error = %error
            );
            Err(error)
        }
    }
}

/// Times calls for one run and writes each timing to a store.
///
/// # Example
///
/// ```
/// use optiquiz_benchmark::{MemoryStore, PerformanceRecorder, PerformanceStore};
///
/// let store = MemoryStore::new();
/// let recorder = PerformanceRecorder::new(&store, 7);
/// recorder.time("Dijkstra", || ()).unwrap();
///
/// let samples = store.fetch_recent_samples(5).unwrap();
/// assert_eq!(samples.len(), 1);
/// assert_eq!(samples[0].run_id, 7);
/// assert_eq!(samples[0].algorithm, "Dijkstra");
/// ```
pub struct PerformanceRecorder<'s, St: PerformanceStore + ?Sized> {
    store: &'s St,
    run_id: RunId,
}

impl<'s, St: PerformanceStore + ?Sized> PerformanceRecorder<'s, St> {
    pub fn new(store: &'s St, run_id: RunId) -> Self {
        Self { store, run_id }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Times `f` and records the sample under `label`.
    pub fn time<R>(&self, label: &str, f: impl FnOnce() -> R) -> Result<(R, u64)> {
        let (value, nanos) = measure(label, f);
        self.record(label, nanos)?;
        Ok((value, nanos))
    }

    /// Times a fallible `f`. Nothing is recorded when `f` fails.
    pub fn time_result<R>(&self, label: &str, f: impl FnOnce() -> Result<R>) -> Result<(R, u64)> {
        let (value, nanos) = measure_result(label, f)?;
        self.record(label, nanos)?;
        Ok((value, nanos))
    }

    fn record(&self, label: &str, nanos: u64) -> Result<()> {
        self.store
            .record_sample(PerformanceSample::new(self.run_id, label, nanos))
    }
}
