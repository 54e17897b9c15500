use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use optiquiz::benchmark::{CsvExporter, MarkdownReport};
use optiquiz::prelude::*;

mod cli;

use cli::{Cli, Command, Format, Game, TourCommand};

const DEFAULT_CONFIG: &str = "optiquiz.toml";

fn load_config(cli: &Cli) -> Result<QuizConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => read_config(Path::new(DEFAULT_CONFIG))?,
        None => QuizConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<QuizConfig> {
    let yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml" | "yaml")
    );
    let config = if yaml {
        QuizConfig::from_yaml_file(path)
    } else {
        QuizConfig::from_toml_file(path)
    };
    config.with_context(|| format!("failed to load {}", path.display()))
}

fn open_store(cli: &Cli, game: Game) -> Result<JsonLinesStore> {
    let dir = match game {
        Game::Board => cli.data_dir.join("board"),
        Game::Tour => cli.data_dir.join("tour"),
    };
    JsonLinesStore::open(&dir).with_context(|| format!("failed to open {}", dir.display()))
}

fn read_submission(path: &Path) -> Result<TourSubmission> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).context("submission is not valid JSON")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_trend(title: &str, trend: &TrendSeries, format: Format) -> Result<()> {
    match format {
        Format::Json => print_json(trend)?,
        Format::Csv => print!("{}", CsvExporter::to_string(trend)),
        Format::Markdown => print!("{}", MarkdownReport::to_string(title, trend)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        optiquiz::console::init_with_filter("optiquiz=debug");
    } else {
        optiquiz::console::init();
    }

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Board { n } => {
            let n = n.unwrap_or(config.board.default_n);
            let mut quiz = BoardQuiz::new(config, open_store(&cli, Game::Board)?);
            print_json(&quiz.start_round(n)?)?;
        }
        Command::Save { name, result } => {
            let quiz = BoardQuiz::new(config, open_store(&cli, Game::Board)?);
            quiz.save_result(name, result)?;
            print_json(&serde_json::json!({ "status": "saved" }))?;
        }
        Command::Tour(TourCommand::New) => {
            let mut quiz = TourQuiz::new(config, open_store(&cli, Game::Tour)?);
            print_json(&quiz.new_game()?)?;
        }
        Command::Tour(TourCommand::Check { submission }) => {
            let submission = read_submission(submission)?;
            let mut quiz = TourQuiz::new(config, open_store(&cli, Game::Tour)?);
            print_json(&quiz.check_answer(&submission)?)?;
        }
        Command::Complexity => print_json(&complexity_table())?,
        Command::Trend {
            game,
            limit,
            format,
        } => {
            let store = open_store(&cli, *game)?;
            let (title, trend) = match game {
                Game::Board => (
                    "Board solvers",
                    BoardQuiz::new(config, store).performance(*limit)?,
                ),
                Game::Tour => (
                    "Tour solvers",
                    TourQuiz::new(config, store).performance(*limit)?,
                ),
            };
            print_trend(title, &trend, *format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.yaml");
        fs::write(&path, "random_seed: 5\nboard:\n  default_n: 7\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.random_seed, Some(5));
        assert_eq!(config.board.default_n, 7);
    }

    #[test]
    fn test_seed_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        fs::write(&path, "random_seed = 1\n").unwrap();

        let cli = Cli::parse_from([
            "optiquiz",
            "--config",
            path.to_str().unwrap(),
            "--seed",
            "9",
            "complexity",
        ]);
        assert_eq!(load_config(&cli).unwrap().random_seed, Some(9));
    }

    #[test]
    fn test_submission_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answer.json");
        fs::write(
            &path,
            r#"{"playerName":"Ada","homeCity":"A","routeBetween":["B"],"distanceMatrix":[[0,1],[1,0]]}"#,
        )
        .unwrap();

        let submission = read_submission(&path).unwrap();
        assert_eq!(submission.player_name, "Ada");
        assert_eq!(submission.route_between, vec!["B"]);
    }
}
