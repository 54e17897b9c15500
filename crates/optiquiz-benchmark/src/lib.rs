//! Benchmarking layer for OptiQuiz.
//!
//! Every quiz round times each solver it runs and keeps the timings so
//! players can compare algorithms across rounds.
//!
//! # Overview
//!
//! - [`measure`] / [`measure_result`] time a single call
//! - [`PerformanceRecorder`] times a call and writes the sample to a store
//! - [`PerformanceStore`] / [`ResultStore`] persist timings, outcomes and
//!   sessions ([`MemoryStore`], [`JsonLinesStore`])
//! - [`aggregate`] turns recent samples into a [`TrendSeries`](optiquiz_core::TrendSeries)
//! - [`CsvExporter`] / [`MarkdownReport`] render a trend
//!
//! # Example
//!
//! ```
//! use optiquiz_benchmark::{aggregate, MemoryStore, PerformanceRecorder, PerformanceStore};
//!
//! let store = MemoryStore::new();
//! let recorder = PerformanceRecorder::new(&store, 100);
//! let (value, _nanos) = recorder.time("BFS", || 2 + 2).unwrap();
//! assert_eq!(value, 4);
//!
//! let trend = aggregate(&store.fetch_recent_samples(10).unwrap());
//! assert_eq!(trend.rounds, vec!["Round 1"]);
//! ```

mod recorder;
mod report;
mod store;
mod trend;

pub use recorder::{measure, measure_result, PerformanceRecorder};
pub use report::{CsvExporter, MarkdownReport};
pub use store::{GameRecord, JsonLinesStore, MemoryStore, PerformanceStore, ResultStore, SessionId};
pub use trend::aggregate;
