//! FEN encoding.
//!
//! Castling rights and the en passant square are not tracked by the board,
//! so both fields are always written as `-`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate};

pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.active_color() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} - - {} {}",
        generate_placement_field(board),
        side_to_move,
        board.half_move_clock(),
        board.full_move_number()
    )
}

/// Rank data only, highest rank first.
pub fn generate_placement_field(board: &Board) -> String {
    let size = board.size() as i8;
    let mut rows = Vec::with_capacity(size as usize);

    for rank in (0..size).rev() {
        let mut row = String::new();
        let mut empty_count = 0u32;

        for file in 0..size {
            match board.try_get_piece(Coordinate::new(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(piece.fen_symbol());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            row.push_str(&empty_count.to_string());
        }
        rows.push(row);
    }

    rows.join("/")
}

impl Board {
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }
}
