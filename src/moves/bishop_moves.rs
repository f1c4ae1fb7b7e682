//! Bishop direction vectors for the line strategy.

use crate::game_state::chess_types::Offset;

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
