//! Single-hop movement used by knights and kings.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Offset;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveType};
use crate::moves::move_strategy::{CandidateMoves, MoveStrategy};

/// Each offset is tried once from the piece's square.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectMovementStrategy;

impl MoveStrategy for DirectMovementStrategy {
    fn candidate_moves(&self, board: &Board, piece: &Piece, movement: &[Offset]) -> CandidateMoves {
        let mut out = CandidateMoves::default();

        for &offset in movement {
            let target = piece.coordinate() + offset;
            if !board.is_square_on_board(target) {
                continue;
            }

            match board.occupant(target) {
                None => {
                    out.moves.insert(Move::quiet(target));
                }
                Some((_, occupant)) if occupant.color() == piece.color() => {}
                Some((king, occupant)) if occupant.is_king() => {
                    out.checked_king = Some(king);
                    out.moves.insert(Move::new(target, true, MoveType::Check));
                }
                Some(_) => {
                    out.moves.insert(Move::new(target, false, MoveType::Capture));
                }
            }
        }

        out
    }
}
