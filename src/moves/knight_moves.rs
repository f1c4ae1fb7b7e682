//! Knight movement offsets for the direct strategy.

use crate::game_state::chess_types::Offset;

/// The eight L-shaped hops, clockwise from two-up-one-right.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
