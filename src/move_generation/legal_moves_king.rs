use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceId;
use crate::move_generation::legal_move_shared::raw_candidate_moves;
use crate::moves::move_descriptions::MoveSet;

/// King moves are filtered by self-check avoidance alone: a target survives
/// only if the king standing there would not be attacked.
pub fn generate_king_moves(board: &mut Board, king: PieceId) -> RulesResult<MoveSet> {
    let candidates = {
        let mover = board.piece_in_play(king)?;
        raw_candidate_moves(board, mover)
    };
    board.record_check_delivery(king, candidates.checked_king)?;

    let mut legal = MoveSet::new();
    for mv in candidates.moves.into_iter().filter(|mv| mv.is_playable()) {
        if !board.move_attacked(king, mv.coordinate())? {
            legal.insert(mv);
        }
    }
    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Coordinate};

    fn king_targets(fen: &str, color: Color) -> Vec<Coordinate> {
        let mut board = Board::from_fen(fen).expect("valid FEN");
        let king = board.get_king(color).expect("king present");
        let before = board.piece(king).expect("king").coordinate();
        let moves = generate_king_moves(&mut board, king).expect("king in play");
        assert_eq!(board.piece(king).expect("king").coordinate(), before);
        moves.iter().map(|m| m.coordinate()).collect()
    }

    #[test]
    fn open_king_has_all_eight_neighbours() {
        let moves = king_targets("4k3/8/8/8/8/8/4K3/8 w - - 0 1", Color::White);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn king_avoids_squares_covered_by_pawns() {
        // Black pawn d4 covers c3 and e3; the white pawn on e4 blocks.
        let moves = king_targets("4k3/8/8/8/3pP3/3K4/8/8 w - - 0 1", Color::White);
        assert_eq!(
            moves,
            vec![
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
                Coordinate::new(4, 1),
                Coordinate::new(2, 3),
                Coordinate::new(3, 3),
            ]
        );
    }

    #[test]
    fn king_cannot_put_itself_into_check() {
        let moves = king_targets("2q1k3/8/8/8/8/7r/3K4/8 w - - 0 1", Color::White);
        assert_eq!(
            moves,
            vec![Coordinate::new(3, 0), Coordinate::new(4, 0), Coordinate::new(4, 1)]
        );
    }

    #[test]
    fn king_cannot_retreat_along_the_checking_line() {
        let moves = king_targets("4r2k/8/8/8/8/8/4K3/8 w - - 0 1", Color::White);
        assert_eq!(
            moves,
            vec![
                Coordinate::new(3, 0),
                Coordinate::new(5, 0),
                Coordinate::new(3, 1),
                Coordinate::new(5, 1),
                Coordinate::new(3, 2),
                Coordinate::new(5, 2),
            ]
        );
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let moves = king_targets("3rk3/8/8/8/8/8/3q4/4K3 w - - 0 1", Color::White);
        assert_eq!(moves, vec![Coordinate::new(5, 0)]);
    }

    #[test]
    fn kings_keep_their_distance() {
        let moves = king_targets("8/8/8/8/8/4k3/8/4K3 w - - 0 1", Color::White);
        assert_eq!(moves, vec![Coordinate::new(3, 0), Coordinate::new(5, 0)]);
    }
}
