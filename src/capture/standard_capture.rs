use crate::capture::capture_strategy::{CaptureOutcome, CaptureStrategy};
use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, PieceId};

/// Takes an opposing piece standing on the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCaptureStrategy;

impl CaptureStrategy for StandardCaptureStrategy {
    fn try_capture(
        &self,
        board: &mut Board,
        mover: PieceId,
        destination: Coordinate,
    ) -> RulesResult<CaptureOutcome> {
        let color = board.piece(mover)?.color();
        let captured = capture_opponent_at(board, color, destination)?;
        Ok(CaptureOutcome {
            captured,
            ..CaptureOutcome::moving_to(destination)
        })
    }
}

/// Capture the piece on `at` if it belongs to `color`'s opponent.
pub(crate) fn capture_opponent_at(
    board: &mut Board,
    color: Color,
    at: Coordinate,
) -> RulesResult<Option<PieceId>> {
    let target = board
        .occupant(at)
        .filter(|(_, piece)| piece.color() != color)
        .map(|(id, _)| id);
    if let Some(id) = target {
        board.capture_piece(id)?;
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_events::BoardEvent;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn opposing_piece_on_destination_is_removed() {
        let mut board = Board::from_fen("4k3/8/8/8/8/2p5/8/B3K3 w - - 0 1").expect("valid FEN");
        let bishop = board.piece_id_at(Coordinate::new(0, 0)).expect("bishop on a1");
        let pawn = board.piece_id_at(Coordinate::new(2, 2)).expect("pawn on c3");

        let outcome = StandardCaptureStrategy
            .try_capture(&mut board, bishop, Coordinate::new(2, 2))
            .expect("capture applies");
        assert_eq!(outcome.captured, Some(pawn));
        assert!(!board.piece(pawn).expect("pawn").in_play());
        assert_eq!(
            board.drain_events(),
            vec![BoardEvent::PieceCaptured {
                piece: pawn,
                kind: PieceKind::Pawn,
                color: Color::Black,
                at: Coordinate::new(2, 2),
            }]
        );
    }

    #[test]
    fn allies_and_empty_squares_are_left_alone() {
        let mut board = Board::from_fen("4k3/8/8/8/8/2P5/8/B3K3 w - - 0 1").expect("valid FEN");
        let bishop = board.piece_id_at(Coordinate::new(0, 0)).expect("bishop on a1");
        let outcome = StandardCaptureStrategy
            .try_capture(&mut board, bishop, Coordinate::new(2, 2))
            .expect("nothing to capture");
        assert_eq!(outcome.captured, None);
        assert!(board.is_occupied(Coordinate::new(2, 2)));

        let outcome = StandardCaptureStrategy
            .try_capture(&mut board, bishop, Coordinate::new(1, 1))
            .expect("nothing to capture");
        assert_eq!(outcome, CaptureOutcome::moving_to(Coordinate::new(1, 1)));
    }
}
