//! Legal move entry points on `Board`.
//!
//! Dispatches a piece to its per-kind generator, lists a side's moves, and
//! answers the checkmate query.

use tracing::debug;

use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::board_events::BoardEvent;
use crate::game_state::chess_types::{Color, PieceId, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::{Move, MoveSet};

impl Board {
    /// Legal moves of `piece`, including `Check` entries for an attacked
    /// opposing king.
    pub fn get_legal_moves(&mut self, piece: PieceId) -> RulesResult<MoveSet> {
        match self.piece_in_play(piece)?.kind() {
            PieceKind::Pawn => generate_pawn_moves(self, piece),
            PieceKind::Knight => generate_knight_moves(self, piece),
            PieceKind::Bishop => generate_bishop_moves(self, piece),
            PieceKind::Rook => generate_rook_moves(self, piece),
            PieceKind::Queen => generate_queen_moves(self, piece),
            PieceKind::King => generate_king_moves(self, piece),
        }
    }

    /// Legal moves a player can actually commit.
    pub fn get_playable_moves(&mut self, piece: PieceId) -> RulesResult<MoveSet> {
        Ok(self
            .get_legal_moves(piece)?
            .into_iter()
            .filter(Move::is_playable)
            .collect())
    }

    /// Every piece of `color` that can move, with its playable moves, in
    /// piece id order.
    pub fn legal_moves_for(&mut self, color: Color) -> RulesResult<Vec<(PieceId, MoveSet)>> {
        let mut out = Vec::new();
        for piece in self.get_pieces(color) {
            let moves = self.get_playable_moves(piece)?;
            if !moves.is_empty() {
                out.push((piece, moves));
            }
        }
        Ok(out)
    }

    pub fn has_legal_moves(&mut self, color: Color) -> RulesResult<bool> {
        for piece in self.get_pieces(color) {
            if !self.get_playable_moves(piece)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `color` is mated when its king and every ally have no playable move.
    ///
    /// Evaluated on each call. The first positive answer for a position
    /// queues `KingCheckmated`.
    pub fn is_checkmate(&mut self, color: Color) -> RulesResult<bool> {
        let king = self.get_king(color)?;
        let mated = self.get_playable_moves(king)?.is_empty() && !self.has_legal_moves(color)?;

        if mated && !self.checkmate_announced[color.index()] {
            self.checkmate_announced[color.index()] = true;
            debug!(king = %king, color = ?color, "checkmate");
            self.events.push(BoardEvent::KingCheckmated { king, color });
        }
        Ok(mated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Coordinate;

    #[test]
    fn starting_position_offers_twenty_moves() {
        let mut board = Board::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        let total: usize = board
            .legal_moves_for(Color::White)
            .expect("white pieces")
            .iter()
            .map(|(_, moves)| moves.len())
            .sum();
        assert_eq!(total, 20);
        assert!(!board.is_checkmate(Color::White).expect("white king"));
    }

    #[test]
    fn back_rank_mate_is_detected_once() {
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("valid FEN");
        assert!(board.is_checkmate(Color::Black).expect("black king"));
        assert!(board.is_checkmate(Color::Black).expect("black king"));

        let announcements = board
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, BoardEvent::KingCheckmated { color: Color::Black, .. }))
            .count();
        assert_eq!(announcements, 1);
    }

    #[test]
    fn a_single_blocking_resource_lifts_the_mate() {
        // Same mate pattern, but a black rook on d1 can interpose on d8.
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/3r2K1 b - - 0 1").expect("valid FEN");
        assert!(!board.is_checkmate(Color::Black).expect("black king"));

        let rook = board.piece_id_at(Coordinate::new(3, 0)).expect("rook on d1");
        let moves = board.get_playable_moves(rook).expect("rook in play");
        let targets: Vec<Coordinate> = moves.iter().map(|m| m.coordinate()).collect();
        assert_eq!(targets, vec![Coordinate::new(3, 7)]);
    }

    #[test]
    fn check_entries_are_not_playable() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").expect("valid FEN");
        let rook = board.piece_id_at(Coordinate::new(4, 0)).expect("rook on e1");
        let legal = board.get_legal_moves(rook).expect("rook in play");
        let playable = board.get_playable_moves(rook).expect("rook in play");
        assert_eq!(legal.len(), playable.len() + 1);
        assert!(board.piece(rook).expect("rook").delivers_check());
    }
}
