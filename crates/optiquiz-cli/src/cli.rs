use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Guess-the-optimum quiz rounds", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, or YAML with a .yml/.yaml extension)
    #[arg(short, long, env = "OPTIQUIZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the recorded timings and results
    #[arg(short, long, env = "OPTIQUIZ_DATA_DIR", default_value = "optiquiz-data")]
    pub data_dir: PathBuf,

    /// Seed for reproducible rounds, overrides the configuration
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Show per-algorithm timings
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a snakes-and-ladders round
    Board {
        /// Board side; the configured default when omitted
        #[arg(short, long)]
        n: Option<u32>,
    },

    /// Record a board player's outcome
    Save {
        #[arg(long)]
        name: String,
        #[arg(long)]
        result: String,
    },

    /// Travelling-salesman rounds
    #[command(subcommand)]
    Tour(TourCommand),

    /// Running time of each tour strategy
    Complexity,

    /// Timing chart over recent rounds
    Trend {
        #[arg(value_enum)]
        game: Game,

        /// Number of rounds; the configured default when omitted
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Subcommand, Debug)]
pub enum TourCommand {
    /// Generate a new distance matrix and home city
    New,

    /// Grade a submission read from a JSON file (`-` for stdin)
    Check { submission: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Game {
    Board,
    Tour,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
    Markdown,
}
