//! Rook direction vectors for the line strategy.

use crate::game_state::chess_types::Offset;

pub const ROOK_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
