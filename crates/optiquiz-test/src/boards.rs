//! Boards with known minimum throw counts.

use std::collections::BTreeMap;

use optiquiz_core::Board;

/// A 6x6 board without teleports: 35 cells to cover, six throws.
pub fn plain_board() -> Board {
    Board::new(6)
}

/// A 6x6 board whose ladder from 2 lands next to the goal: two throws.
pub fn ladder_shortcut() -> Board {
    Board::with_teleports(
        6,
        BTreeMap::from([(2, 35), (8, 20)]),
        BTreeMap::from([(30, 4)]),
    )
    .expect("fixture board is valid")
}

/// A 6x6 board where every cell from 31 to 35 is a snake, so the goal is
/// only reachable by rolling exactly from 30 or below onto 36.
///
/// Best play: 1 -> 7 -> 13 -> 19 -> 25 -> 30 -> 36, six throws.
pub fn snake_detour() -> Board {
    Board::with_teleports(
        6,
        BTreeMap::new(),
        BTreeMap::from([(31, 2), (32, 3), (33, 4), (34, 5), (35, 6)]),
    )
    .expect("fixture board is valid")
}
