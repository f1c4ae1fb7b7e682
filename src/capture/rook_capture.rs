use tracing::debug;

use crate::capture::capture_strategy::{CaptureOutcome, CaptureStrategy};
use crate::capture::legal_move_apply::Placement;
use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coordinate, PieceId, PieceKind};

/// Ordinary capture, plus castling when the destination is the rook's own
/// king: the king jumps two files toward the rook without ending the turn,
/// and the rook stops on the square the king crossed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RookCaptureStrategy;

impl CaptureStrategy for RookCaptureStrategy {
    fn try_capture(
        &self,
        board: &mut Board,
        mover: PieceId,
        destination: Coordinate,
    ) -> RulesResult<CaptureOutcome> {
        let (color, rook_at) = {
            let rook = board.piece(mover)?;
            (rook.color(), rook.coordinate())
        };
        let occupant = board
            .occupant(destination)
            .map(|(id, piece)| (id, piece.color(), piece.kind()));

        match occupant {
            Some((target, target_color, _)) if target_color != color => {
                board.capture_piece(target)?;
                Ok(CaptureOutcome {
                    captured: Some(target),
                    ..CaptureOutcome::moving_to(destination)
                })
            }
            Some((king, _, PieceKind::King)) => {
                let toward_rook = (rook_at.file - destination.file).signum();
                let king_final = destination + (2 * toward_rook, 0);
                let rook_rest = king_final + (-toward_rook, 0);

                debug!(rook = %mover, king = %king, king_to = %king_final, rook_to = %rook_rest, "castling");
                board.set_position_on_board(king, king_final, Placement::BypassTurnOrder)?;

                Ok(CaptureOutcome {
                    castled_king: Some(king),
                    ..CaptureOutcome::moving_to(rook_rest)
                })
            }
            _ => Ok(CaptureOutcome::moving_to(destination)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_events::BoardEvent;
    use crate::game_state::chess_types::Color;

    #[test]
    fn kingside_castle_relocates_both_pieces_in_one_turn() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").expect("valid FEN");
        let rook = board.piece_id_at(Coordinate::new(7, 0)).expect("rook on h1");
        let king = board.piece_id_at(Coordinate::new(4, 0)).expect("king on e1");

        let outcome = board
            .commit_move(rook, Coordinate::new(4, 0))
            .expect("castle");
        assert_eq!(outcome.castled_king, Some(king));
        assert_eq!(board.piece(rook).expect("rook").coordinate(), Coordinate::new(5, 0));
        assert_eq!(board.piece(king).expect("king").coordinate(), Coordinate::new(6, 0));
        assert_eq!(board.active_color(), Color::Black);
        assert_eq!(board.half_move_clock(), 1);

        let turns = board
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, BoardEvent::TurnEnded { .. }))
            .count();
        assert_eq!(turns, 1);
        assert_eq!(board.last_moved(), Some(rook));
    }

    #[test]
    fn queenside_castle_moves_king_to_c_file() {
        let mut board = Board::from_fen("r3k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("valid FEN");
        let rook = board.piece_id_at(Coordinate::new(0, 7)).expect("rook on a8");
        let king = board.piece_id_at(Coordinate::new(4, 7)).expect("king on e8");

        board
            .commit_move(rook, Coordinate::new(4, 7))
            .expect("castle");
        assert_eq!(board.piece(rook).expect("rook").coordinate(), Coordinate::new(3, 7));
        assert_eq!(board.piece(king).expect("king").coordinate(), Coordinate::new(2, 7));
        assert_eq!(board.full_move_number(), 2);
    }

    #[test]
    fn rook_takes_opposing_pieces() {
        let mut board = Board::from_fen("4k2n/8/8/8/8/8/8/4K2R w - - 0 1").expect("valid FEN");
        let rook = board.piece_id_at(Coordinate::new(7, 0)).expect("rook on h1");
        let knight = board.piece_id_at(Coordinate::new(7, 7)).expect("knight on h8");
        let outcome = board
            .commit_move(rook, Coordinate::new(7, 7))
            .expect("rook captures");
        assert_eq!(outcome.captured, Some(knight));
        assert_eq!(outcome.castled_king, None);
        assert_eq!(outcome.to, Coordinate::new(7, 7));
    }
}
