//! Configuration system for OptiQuiz.
//!
//! Load quiz configuration from TOML or YAML files to control board sizes,
//! attempt bounds, distractor spread and tour generation without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use optiquiz_config::QuizConfig;
//!
//! let config = QuizConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [board]
//!     default_n = 8
//!
//!     [tour]
//!     cities = ["A", "B", "C", "D", "E"]
//!     random_search_iterations = 500
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.board.default_n, 8);
//! assert_eq!(config.tour.cities.len(), 5);
//! assert_eq!(config.distractors.count, 3);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use optiquiz_config::QuizConfig;
//!
//! let config = QuizConfig::load("optiquiz.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use optiquiz_core::{MAX_BOARD_SIDE, MIN_BOARD_SIDE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main quiz configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QuizConfig {
    /// Random seed for reproducible rounds.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Board game settings.
    #[serde(default)]
    pub board: BoardConfig,

    /// Rejection-sampling bounds for board generation.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Multiple-choice settings.
    #[serde(default)]
    pub distractors: DistractorConfig,

    /// Tour game settings.
    #[serde(default)]
    pub tour: TourConfig,

    /// Performance chart settings.
    #[serde(default)]
    pub trend: TrendConfig,
}

impl QuizConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`QuizConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Replaces the tour city names.
    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tour.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the number of random permutations sampled by random search.
    pub fn with_random_search_iterations(mut self, iterations: usize) -> Self {
        self.tour.random_search_iterations = iterations;
        self
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.min_n < MIN_BOARD_SIDE
            || board.max_n > MAX_BOARD_SIDE
            || board.min_n > board.max_n
        {
            return Err(ConfigError::Invalid(format!(
                "board size range {}..={} is empty or outside {}..={}",
                board.min_n, board.max_n, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            )));
        }
        if !(board.min_n..=board.max_n).contains(&board.default_n) {
            return Err(ConfigError::Invalid(format!(
                "default board size {} outside {}..={}",
                board.default_n, board.min_n, board.max_n
            )));
        }
        if self.generation.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "generation.max_attempts must be positive".into(),
            ));
        }
        if self.distractors.count == 0 {
            return Err(ConfigError::Invalid(
                "distractors.count must be positive".into(),
            ));
        }
        let tour = &self.tour;
        if tour.cities.len() < 2 {
            return Err(ConfigError::Invalid(
                "tour.cities needs at least two cities".into(),
            ));
        }
        let mut names: Vec<&str> = tour.cities.iter().map(String::as_str).collect();
        names.sort_unstable();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(ConfigError::Invalid("tour.cities contains duplicates".into()));
        }
        if tour.matrix_low > tour.matrix_high {
            return Err(ConfigError::Invalid(format!(
                "tour.matrix_low {} exceeds tour.matrix_high {}",
                tour.matrix_low, tour.matrix_high
            )));
        }
        if self.trend.default_limit == 0 || self.trend.default_limit > self.trend.max_limit {
            return Err(ConfigError::Invalid(format!(
                "trend.default_limit {} outside 1..={}",
                self.trend.default_limit, self.trend.max_limit
            )));
        }
        Ok(())
    }
}

/// Board game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BoardConfig {
    /// Board side used when a request does not name one.
    pub default_n: u32,

    /// Smallest accepted board side, at least 6.
    pub min_n: u32,

    /// Largest accepted board side, at most 12.
    pub max_n: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_n: 10,
            min_n: 6,
            max_n: 12,
        }
    }
}

/// Board generation bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GenerationConfig {
    /// Maximum teleport placement attempts for one board.
    pub max_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

/// Distractor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DistractorConfig {
    /// Number of choices shown, including the correct one.
    pub count: usize,

    /// Largest perturbation applied to the correct answer.
    pub spread: u32,

    /// Maximum perturbation draws before giving up.
    pub max_attempts: usize,
}

impl Default for DistractorConfig {
    fn default() -> Self {
        Self {
            count: 3,
            spread: 3,
            max_attempts: 1_000,
        }
    }
}

/// Tour game configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TourConfig {
    /// City names, one per matrix row.
    pub cities: Vec<String>,

    /// Smallest generated distance.
    pub matrix_low: u32,

    /// Largest generated distance.
    pub matrix_high: u32,

    /// Random permutations sampled when the route is too long to enumerate.
    pub random_search_iterations: usize,

    /// Largest accepted number of cities between the home visits.
    pub max_route_cities: usize,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            cities: ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
                .into_iter()
                .map(String::from)
                .collect(),
            matrix_low: 50,
            matrix_high: 100,
            random_search_iterations: 2_000,
            max_route_cities: 8,
        }
    }
}

/// Performance chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TrendConfig {
    /// Rounds shown when a request does not name a limit.
    pub default_limit: usize,

    /// Largest accepted round limit.
    pub max_limit: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            default_limit: 15,
            max_limit: 200,
        }
    }
}

impl TrendConfig {
    /// Clamps a requested limit, falling back to the default when it is out
    /// of range.
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        match requested {
            Some(limit) if (1..=self.max_limit).contains(&limit) => limit,
            _ => self.default_limit,
        }
    }
}

#[cfg(test)]
mod tests;
