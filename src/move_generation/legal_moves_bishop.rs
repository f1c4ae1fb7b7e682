use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceId;
use crate::move_generation::legal_move_shared::generate_with_strategy;
use crate::moves::move_descriptions::MoveSet;

pub fn generate_bishop_moves(board: &mut Board, bishop: PieceId) -> RulesResult<MoveSet> {
    generate_with_strategy(board, bishop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
    use crate::game_state::piece::Piece;
    use crate::moves::move_descriptions::MoveType;

    fn board_with_kings() -> Board {
        let mut board = Board::new(8).expect("valid size");
        board
            .add_piece(Piece::new(PieceKind::King, Color::White, Coordinate::new(4, 0)))
            .expect("empty square");
        board
            .add_piece(Piece::new(PieceKind::King, Color::Black, Coordinate::new(4, 7)))
            .expect("empty square");
        board
    }

    #[test]
    fn bishop_on_d4_has_thirteen_diagonal_squares() {
        let mut board = board_with_kings();
        let bishop = board
            .add_piece(Piece::new(PieceKind::Bishop, Color::White, Coordinate::new(3, 3)))
            .expect("empty square");

        let moves = generate_bishop_moves(&mut board, bishop).expect("bishop in play");
        assert_eq!(moves.len(), 13);
        assert!(moves.iter().all(|m| {
            let file = (m.coordinate().file - 3).abs();
            let rank = (m.coordinate().rank - 3).abs();
            file == rank && m.move_type() == MoveType::Move
        }));
    }

    #[test]
    fn bishop_stops_on_captures() {
        let mut board = board_with_kings();
        let bishop = board
            .add_piece(Piece::new(PieceKind::Bishop, Color::White, Coordinate::new(0, 0)))
            .expect("empty square");
        board
            .add_piece(Piece::new(PieceKind::Pawn, Color::Black, Coordinate::new(2, 2)))
            .expect("empty square");

        let moves = generate_bishop_moves(&mut board, bishop).expect("bishop in play");
        let listed: Vec<(Coordinate, MoveType)> = moves
            .iter()
            .map(|m| (m.coordinate(), m.move_type()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (Coordinate::new(1, 1), MoveType::Move),
                (Coordinate::new(2, 2), MoveType::Capture),
            ]
        );
    }
}
