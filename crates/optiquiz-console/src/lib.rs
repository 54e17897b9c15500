//! Colorful console output for quiz rounds.
//!
//! Provides a custom `tracing` layer that formats OptiQuiz events with colors.
//! Output goes to stderr so the JSON a binary prints on stdout stays clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Round lifecycle (round start/end)
//! - **DEBUG**: Per-algorithm timings and board generation
//! - **WARN**: Failed algorithm runs

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "optiquiz=info";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output with [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output, using `fallback` when `RUST_LOG` is unset
/// or invalid.
pub fn init_with_filter(fallback: &str) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(QuizConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "OptiQuiz".bright_cyan().bold(),
        format!("v{VERSION} - solver quiz and benchmark").bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats quiz events with colors.
pub struct QuizConsoleLayer;

impl<S: Subscriber> Layer<S> for QuizConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("optiquiz") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    game: Option<String>,
    algorithm: Option<String>,
    error: Option<String>,
    run_id: Option<i64>,
    n: Option<u64>,
    cities: Option<u64>,
    elapsed_nanos: Option<u64>,
    teleports: Option<u64>,
    attempts: Option<u64>,
    answer: Option<u64>,
    correct: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "game" => self.game = Some(s),
            "algorithm" => self.algorithm = Some(s),
            "error" => self.error = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "cities" => self.cities = Some(value),
            "elapsed_nanos" => self.elapsed_nanos = Some(value),
            "teleports" => self.teleports = Some(value),
            "attempts" => self.attempts = Some(value),
            "answer" => self.answer = Some(value),
            "run_id" => self.run_id = i64::try_from(value).ok(),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "run_id" => self.run_id = Some(value),
            _ => self.record_u64(field, value.max(0) as u64),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "correct" {
            self.correct = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "game" => self.game = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "round_start" => format_round_start(v),
        "round_end" => format_round_end(v),
        "algorithm_timed" => format_algorithm_timed(v),
        "algorithm_failed" => format_algorithm_failed(v),
        "board_generated" => format_board_generated(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_round_start(v: &EventVisitor) -> String {
    let game = v.game.as_deref().unwrap_or("quiz");
    let mut output = format!(
        "{} {} {} round {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        game.white().bold(),
        v.run_id.unwrap_or(0).bright_black()
    );
    if let Some(n) = v.n {
        output.push_str(&format!(" │ N = {}", n.bright_yellow()));
    }
    if let Some(cities) = v.cities {
        output.push_str(&format!(" │ {} cities", cities.bright_yellow()));
    }
    output
}

fn format_round_end(v: &EventVisitor) -> String {
    let game = v.game.as_deref().unwrap_or("quiz");
    let mut output = format!(
        "{} {} {} round complete",
        format_elapsed(),
        "■".bright_cyan().bold(),
        game.white().bold()
    );
    if let Some(answer) = v.answer {
        output.push_str(&format!(
            " │ answer {}",
            answer.to_formatted_string(&Locale::en).bright_magenta().bold()
        ));
    }
    match v.correct {
        Some(true) => output.push_str(&format!(" │ {}", "CORRECT".bright_green().bold())),
        Some(false) => output.push_str(&format!(" │ {}", "WRONG".bright_red().bold())),
        None => {}
    }
    output
}

fn format_algorithm_timed(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    let nanos = v.elapsed_nanos.unwrap_or(0);
    format!(
        "{} {} {:<18} │ {:>14} ns │ {}",
        format_elapsed(),
        "⏱".bright_blue(),
        algorithm.white(),
        nanos.to_formatted_string(&Locale::en).bright_yellow(),
        format_nanos(nanos).bright_black()
    )
}

fn format_algorithm_failed(v: &EventVisitor) -> String {
    let algorithm = v.algorithm.as_deref().unwrap_or("unknown");
    format!(
        "{} {} {} failed after {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        algorithm.white().bold(),
        format_nanos(v.elapsed_nanos.unwrap_or(0)).yellow(),
        v.error.as_deref().unwrap_or("").bright_red()
    )
}

fn format_board_generated(v: &EventVisitor) -> String {
    format!(
        "{} {} board N = {} │ {} teleports │ {} draws",
        format_elapsed(),
        "▦".bright_blue(),
        v.n.unwrap_or(0),
        v.teleports.unwrap_or(0).bright_yellow(),
        v.attempts
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black()
    )
}

fn format_nanos(nanos: u64) -> String {
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2}µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2}ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", nanos as f64 / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nanos_units() {
        assert_eq!(format_nanos(999), "999ns");
        assert_eq!(format_nanos(1_500), "1.50µs");
        assert_eq!(format_nanos(2_340_000), "2.34ms");
        assert_eq!(format_nanos(3_000_000_000), "3.00s");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("row_appended".into()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).is_empty());
    }

    #[test]
    fn test_board_generated_line() {
        let visitor = EventVisitor {
            event: Some("board_generated".into()),
            n: Some(8),
            teleports: Some(12),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor).contains("teleports"));
    }

    #[test]
    fn test_round_end_mentions_answer() {
        let visitor = EventVisitor {
            event: Some("round_end".into()),
            game: Some("board".into()),
            answer: Some(4),
            correct: None,
            ..EventVisitor::default()
        };
        let line = format_event(&visitor);
        assert!(line.contains("board"));
        assert!(line.contains("round complete"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("optiquiz=debug");
        tracing::info!(event = "round_start", game = "board", run_id = 1i64, n = 8u64);
    }
}
