//! Sliding movement used by bishops, rooks and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Offset;
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveType};
use crate::moves::move_strategy::{CandidateMoves, MoveStrategy};

/// Walks each direction until the edge or the first occupied square. When the
/// walk ends on the opposing king, every square collected in that direction
/// is flagged as delivering check, since each one blocks it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineMoveStrategy;

impl MoveStrategy for LineMoveStrategy {
    fn candidate_moves(&self, board: &Board, piece: &Piece, movement: &[Offset]) -> CandidateMoves {
        let mut out = CandidateMoves::default();

        for &direction in movement {
            let mut ray: Vec<Move> = Vec::new();
            let mut target = piece.coordinate() + direction;

            while board.is_square_on_board(target) {
                match board.occupant(target) {
                    None => {
                        ray.push(Move::quiet(target));
                        target = target + direction;
                        continue;
                    }
                    Some((_, occupant)) if occupant.color() == piece.color() => {}
                    Some((king, occupant)) if occupant.is_king() => {
                        out.checked_king = Some(king);
                        ray = ray.into_iter().map(Move::with_check).collect();
                        ray.push(Move::new(target, true, MoveType::Check));
                    }
                    Some(_) => {
                        ray.push(Move::new(target, false, MoveType::Capture));
                    }
                }
                break;
            }

            out.moves.extend(ray);
        }

        out
    }
}
