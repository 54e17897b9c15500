//! Report generation for trend series.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use optiquiz_core::TrendSeries;

fn cell(trend: &TrendSeries, algorithm: &str, round: usize) -> String {
    trend
        .value_at(algorithm, round)
        .map(|ms| format!("{ms:.2}"))
        .unwrap_or_default()
}

/// CSV exporter for trend series.
///
/// One row per round, one column per algorithm, durations in milliseconds.
/// A round with no sample for an algorithm leaves that cell empty.
///
/// # Example
///
/// ```
/// use optiquiz_benchmark::{aggregate, CsvExporter};
/// use optiquiz_core::PerformanceSample;
///
/// let trend = aggregate(&[
///     PerformanceSample::new(1, "BFS", 5_000_000),
///     PerformanceSample::new(1, "Dijkstra", 7_000_000),
/// ]);
/// let csv = CsvExporter::to_string(&trend);
/// assert_eq!(csv, "round,BFS,Dijkstra\nRound 1,5.00,7.00\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a trend to a CSV string.
    pub fn to_string(trend: &TrendSeries) -> String {
        let mut output = String::new();
        // writing to a String cannot fail
        let _ = Self::render(trend, &mut output);
        output
    }

    fn render(trend: &TrendSeries, output: &mut String) -> fmt::Result {
        write!(output, "round")?;
        for algorithm in trend.algorithms() {
            write!(output, ",{algorithm}")?;
        }
        writeln!(output)?;

        for (index, round) in trend.rounds.iter().enumerate() {
            write!(output, "{round}")?;
            for algorithm in trend.algorithms() {
                write!(output, ",{}", cell(trend, algorithm, index))?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Exports a trend to a CSV file.
    pub fn to_file(trend: &TrendSeries, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(trend))
    }

    /// Writes a trend as CSV to a writer.
    pub fn write<W: Write>(trend: &TrendSeries, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(trend).as_bytes())
    }
}

/// Markdown report generator.
///
/// A summary table (samples, average, fastest and slowest per algorithm)
/// followed by the per-round durations.
///
/// # Example
///
/// ```
/// use optiquiz_benchmark::{aggregate, MarkdownReport};
/// use optiquiz_core::PerformanceSample;
///
/// let trend = aggregate(&[PerformanceSample::new(1, "BFS", 5_000_000)]);
/// let md = MarkdownReport::to_string("Board solvers", &trend);
/// assert!(md.contains("# Trend: Board solvers"));
/// assert!(md.contains("| BFS | 1 | 5.00 | 5.00 | 5.00 |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(title: &str, trend: &TrendSeries) -> String {
        let mut output = String::new();
        let _ = Self::render(title, trend, &mut output);
        output
    }

    fn render(title: &str, trend: &TrendSeries, output: &mut String) -> fmt::Result {
        writeln!(output, "# Trend: {title}")?;
        writeln!(output)?;
        writeln!(output, "- **Rounds**: {}", trend.rounds.len())?;
        writeln!(output, "- **Algorithms**: {}", trend.series.len())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        if trend.is_empty() {
            writeln!(output, "*No rounds recorded.*")?;
            return Ok(());
        }

        writeln!(output, "| Algorithm | Samples | Avg (ms) | Min (ms) | Max (ms) |")?;
        writeln!(output, "|-----------|---------|----------|----------|----------|")?;
        for (algorithm, series) in &trend.series {
            let avg = series.iter().sum::<f64>() / series.len().max(1) as f64;
            let min = series.iter().copied().fold(f64::INFINITY, f64::min);
            let max = series.iter().copied().fold(0.0, f64::max);
            writeln!(
                output,
                "| {algorithm} | {} | {avg:.2} | {min:.2} | {max:.2} |",
                series.len()
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Rounds")?;
        writeln!(output)?;
        write!(output, "| Round |")?;
        for algorithm in trend.algorithms() {
            write!(output, " {algorithm} |")?;
        }
        writeln!(output)?;
        write!(output, "|-------|")?;
        for _ in trend.algorithms() {
            write!(output, "------|")?;
        }
        writeln!(output)?;
        for (index, round) in trend.rounds.iter().enumerate() {
            write!(output, "| {round} |")?;
            for algorithm in trend.algorithms() {
                write!(output, " {} |", cell(trend, algorithm, index))?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(title: &str, trend: &TrendSeries, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(title, trend))
    }
}
