//! Minimum dice throws from the first to the last cell of a board.
//!
//! Every throw moves 1 to [`DICE_FACES`] cells forward and the landing cell
//! is resolved through its teleport, so the board is a unit-weight graph
//! over resolved cells. Breadth-first search and Dijkstra therefore always
//! agree; both are kept so the quiz can chart their timings side by side.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use optiquiz_core::{Board, QuizError, Result};
use serde::Serialize;

/// Faces on the die.
pub const DICE_FACES: u32 = 6;

fn check_board(board: &Board) -> Result<()> {
    if board.size() < 2 {
        return Err(QuizError::InvalidBoard(format!(
            "board needs at least 2 cells, has {}",
            board.size()
        )));
    }
    Ok(())
}

/// Cells reachable with one throw from `cell`, already resolved through
/// teleports.
fn moves(board: &Board, cell: u32) -> impl Iterator<Item = u32> + '_ {
    let goal = board.size();
    (1..=DICE_FACES)
        .map(move |roll| cell + roll)
        .take_while(move |&next| next <= goal)
        .map(move |next| board.destination(next))
}

/// Breadth-first search over resolved cells.
///
/// Returns 0 if the goal cannot be reached.
///
/// # Example
///
/// ```
/// use optiquiz_core::Board;
/// use optiquiz_solver::solve_bfs;
///
/// // 35 cells to cover six at a time
/// assert_eq!(solve_bfs(&Board::new(6)).unwrap(), 6);
/// ```
pub fn solve_bfs(board: &Board) -> Result<u32> {
    check_board(board)?;
    let goal = board.size();

    let mut visited = vec![false; goal as usize + 1];
    let mut queue = VecDeque::from([(1u32, 0u32)]);
    visited[1] = true;

    while let Some((cell, throws)) = queue.pop_front() {
        if cell == goal {
            return Ok(throws);
        }
        for next in moves(board, cell) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                queue.push_back((next, throws + 1));
            }
        }
    }
    Ok(0)
}

/// Dijkstra with a binary heap; every throw weighs 1.
///
/// Returns 0 if the goal cannot be reached.
pub fn solve_dijkstra(board: &Board) -> Result<u32> {
    check_board(board)?;
    let goal = board.size();

    let mut dist = vec![u32::MAX; goal as usize + 1];
    let mut heap = BinaryHeap::from([Reverse((0u32, 1u32))]);
    dist[1] = 0;

    while let Some(Reverse((d, cell))) = heap.pop() {
        if cell == goal {
            return Ok(d);
        }
        if d > dist[cell as usize] {
            continue;
        }
        for next in moves(board, cell) {
            let candidate = d + 1;
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                heap.push(Reverse((candidate, next)));
            }
        }
    }
    Ok(0)
}

/// The board algorithms run for every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoardAlgorithm {
    Bfs,
    Dijkstra,
}

impl BoardAlgorithm {
    /// Every board algorithm, in the order the quiz runs them.
    pub const ALL: [BoardAlgorithm; 2] = [BoardAlgorithm::Bfs, BoardAlgorithm::Dijkstra];

    /// Name used for performance samples and chart series.
    pub fn name(self) -> &'static str {
        match self {
            BoardAlgorithm::Bfs => "BFS",
            BoardAlgorithm::Dijkstra => "Dijkstra",
        }
    }

    pub fn solve(self, board: &Board) -> Result<u32> {
        match self {
            BoardAlgorithm::Bfs => solve_bfs(board),
            BoardAlgorithm::Dijkstra => solve_dijkstra(board),
        }
    }
}

impl fmt::Display for BoardAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
