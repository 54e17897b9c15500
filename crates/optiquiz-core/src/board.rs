//! Snakes-and-ladders board model.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{QuizError, Result};

/// Smallest supported board side.
pub const MIN_BOARD_SIDE: u32 = 6;

/// Largest supported board side.
pub const MAX_BOARD_SIDE: u32 = 12;

/// A square board of `n * n` cells numbered from 1.
///
/// Teleports are split into ladders (forward jumps) and snakes (backward
/// jumps). No cell is both a source and a destination, and the first and
/// last cells are never teleport endpoints.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use optiquiz_core::Board;
///
/// let board = Board::with_teleports(
///     6,
///     BTreeMap::from([(3, 22)]),
///     BTreeMap::from([(30, 7)]),
/// ).unwrap();
///
/// assert_eq!(board.size(), 36);
/// assert_eq!(board.destination(3), 22);
/// assert_eq!(board.destination(30), 7);
/// assert_eq!(board.destination(4), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    n: u32,
    #[serde(rename = "board_size")]
    size: u32,
    snakes: BTreeMap<u32, u32>,
    ladders: BTreeMap<u32, u32>,
}

impl Board {
    /// Creates a board of side `n` without teleports.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `u32`.
    pub fn new(n: u32) -> Self {
        let size = n
            .checked_mul(n)
            .unwrap_or_else(|| panic!("board side {n} overflows the cell count"));
        Self {
            n,
            size,
            snakes: BTreeMap::new(),
            ladders: BTreeMap::new(),
        }
    }

    /// Creates a board of side `n` with the given teleports.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidBoard`] if a ladder does not climb, a
    /// snake does not descend, an endpoint lies outside `2..size`, or two
    /// teleports share a cell, or if `n * n` overflows `u32`.
    pub fn with_teleports(
        n: u32,
        ladders: BTreeMap<u32, u32>,
        snakes: BTreeMap<u32, u32>,
    ) -> Result<Self> {
        let size = n.checked_mul(n).ok_or_else(|| {
            QuizError::InvalidBoard(format!("board side {n} overflows the cell count"))
        })?;
        let board = Self {
            n,
            size,
            snakes,
            ladders,
        };
        board.check_teleports()?;
        Ok(board)
    }

    fn check_teleports(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        let inner = 2..self.size;

        for (&from, &to) in &self.ladders {
            if to <= from {
                return Err(QuizError::InvalidBoard(format!(
                    "ladder {from} -> {to} does not climb"
                )));
            }
        }
        for (&from, &to) in &self.snakes {
            if to >= from {
                return Err(QuizError::InvalidBoard(format!(
                    "snake {from} -> {to} does not descend"
                )));
            }
        }

        for (&from, &to) in self.ladders.iter().chain(self.snakes.iter()) {
            for cell in [from, to] {
                if !inner.contains(&cell) {
                    return Err(QuizError::InvalidBoard(format!(
                        "teleport endpoint {cell} outside 2..{}",
                        self.size
                    )));
                }
                if !seen.insert(cell) {
                    return Err(QuizError::InvalidBoard(format!(
                        "cell {cell} used by more than one teleport endpoint"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the board side.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the number of cells, which is also the goal cell.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the ladders keyed by source cell.
    pub fn ladders(&self) -> &BTreeMap<u32, u32> {
        &self.ladders
    }

    /// Returns the snakes keyed by source cell.
    pub fn snakes(&self) -> &BTreeMap<u32, u32> {
        &self.snakes
    }

    /// Resolves `cell` through any teleport starting there.
    pub fn destination(&self, cell: u32) -> u32 {
        self.ladders
            .get(&cell)
            .or_else(|| self.snakes.get(&cell))
            .copied()
            .unwrap_or(cell)
    }

    /// Returns true if `cell` is the source or destination of a teleport.
    pub fn is_teleport_endpoint(&self, cell: u32) -> bool {
        self.ladders
            .iter()
            .chain(self.snakes.iter())
            .any(|(&from, &to)| from == cell || to == cell)
    }
}
