//! Queen direction vectors: the bishop diagonals plus the rook lines.

use crate::game_state::chess_types::Offset;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [Offset; 8] = generate_queen_directions();

const fn generate_queen_directions() -> [Offset; 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut index = 0usize;

    while index < 4 {
        table[index] = BISHOP_DIRECTIONS[index];
        table[index + 4] = ROOK_DIRECTIONS[index];
        index += 1;
    }

    table
}
