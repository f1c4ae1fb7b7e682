//! King movement offsets for the direct strategy.

use crate::game_state::chess_types::{Coordinate, Offset};

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// True when two squares touch, including diagonally.
#[inline]
pub fn is_adjacent(from: Coordinate, to: Coordinate) -> bool {
    KING_OFFSETS.contains(&(to.file - from.file, to.rank - from.rank))
}
