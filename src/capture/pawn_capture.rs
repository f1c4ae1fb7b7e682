use crate::capture::capture_strategy::{CaptureOutcome, CaptureStrategy};
use crate::capture::standard_capture::capture_opponent_at;
use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coordinate, PieceId};
use crate::moves::pawn_moves::en_passant_victim;

/// Pawn commits in priority order: reaching the promotion rank (taking any
/// opposing occupant first), en passant, then an ordinary diagonal capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnCaptureStrategy;

impl CaptureStrategy for PawnCaptureStrategy {
    fn try_capture(
        &self,
        board: &mut Board,
        mover: PieceId,
        destination: Coordinate,
    ) -> RulesResult<CaptureOutcome> {
        let pawn = board.piece(mover)?.clone();

        if destination.rank == board.promotion_rank(pawn.color()) {
            let captured = capture_opponent_at(board, pawn.color(), destination)?;
            return Ok(CaptureOutcome {
                captured,
                promotion: true,
                ..CaptureOutcome::moving_to(destination)
            });
        }

        if !board.is_occupied(destination) {
            if let Some(victim) = en_passant_victim(board, &pawn, destination) {
                board.capture_piece(victim)?;
                return Ok(CaptureOutcome {
                    captured: Some(victim),
                    ..CaptureOutcome::moving_to(destination)
                });
            }
        }

        let captured = capture_opponent_at(board, pawn.color(), destination)?;
        Ok(CaptureOutcome {
            captured,
            ..CaptureOutcome::moving_to(destination)
        })
    }
}
