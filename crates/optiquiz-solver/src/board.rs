//! Random board generation by rejection sampling.

use std::collections::{BTreeMap, BTreeSet};

use optiquiz_config::GenerationConfig;
use optiquiz_core::{Board, QuizError, Result, MAX_BOARD_SIDE, MIN_BOARD_SIDE};
use rand::seq::index;
use rand::Rng;
use tracing::debug;

/// Places `n - 2` ladders and then `n - 2` snakes on a fresh board.
///
/// Each attempt draws two distinct cells from `2..size` and keeps them only
/// if neither is already a teleport endpoint. The attempt budget covers the
/// whole board.
///
/// # Example
///
/// ```
/// use optiquiz_solver::BoardGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let board = BoardGenerator::default().generate(8, &mut rng).unwrap();
///
/// assert_eq!(board.size(), 64);
/// assert_eq!(board.ladders().len(), 6);
/// assert_eq!(board.snakes().len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    max_attempts: usize,
}

impl BoardGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(config.max_attempts)
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a board of side `n`.
    ///
    /// # Errors
    ///
    /// [`QuizError::Validation`] if `n` is outside the supported range, and
    /// [`QuizError::Generation`] if the attempt budget runs out.
    pub fn generate<R: Rng + ?Sized>(&self, n: u32, rng: &mut R) -> Result<Board> {
        if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&n) {
            return Err(QuizError::Validation(format!(
                "N must be between {MIN_BOARD_SIDE} and {MAX_BOARD_SIDE}, got {n}"
            )));
        }

        let size = n * n;
        let count = (n - 2) as usize;
        let mut placement = Placement {
            size,
            occupied: BTreeSet::from([1, size]),
            attempts: 0,
            max_attempts: self.max_attempts,
        };

        let ladders = placement.place(count, Direction::Climb, rng)?;
        let snakes = placement.place(count, Direction::Descend, rng)?;

        debug!(
            event = "board_generated",
            n,
            teleports = ladders.len() + snakes.len(),
            attempts = placement.attempts,
        );
        Board::with_teleports(n, ladders, snakes)
    }
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::from_config(&GenerationConfig::default())
    }
}

/// Generates a board with the default attempt budget.
pub fn generate_board<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Result<Board> {
    BoardGenerator::default().generate(n, rng)
}

#[derive(Clone, Copy)]
enum Direction {
    Climb,
    Descend,
}

struct Placement {
    size: u32,
    occupied: BTreeSet<u32>,
    attempts: usize,
    max_attempts: usize,
}

impl Placement {
    fn place<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        direction: Direction,
        rng: &mut R,
    ) -> Result<BTreeMap<u32, u32>> {
        let inner_cells = (self.size - 2) as usize;
        let mut placed = BTreeMap::new();

        while placed.len() < count {
            if self.attempts >= self.max_attempts {
                return Err(QuizError::Generation {
                    attempts: self.attempts,
                });
            }
            self.attempts += 1;

            let picks = index::sample(rng, inner_cells, 2);
            let a = picks.index(0) as u32 + 2;
            let b = picks.index(1) as u32 + 2;
            let (low, high) = (a.min(b), a.max(b));
            if self.occupied.contains(&low) || self.occupied.contains(&high) {
                continue;
            }

            self.occupied.insert(low);
            self.occupied.insert(high);
            match direction {
                Direction::Climb => placed.insert(low, high),
                Direction::Descend => placed.insert(high, low),
            };
        }
        Ok(placed)
    }
}
