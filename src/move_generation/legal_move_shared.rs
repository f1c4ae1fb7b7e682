use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Offset, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::direct_moves::DirectMovementStrategy;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::line_moves::LineMoveStrategy;
use crate::moves::move_descriptions::MoveSet;
use crate::moves::move_strategy::{CandidateMoves, MoveStrategy};
use crate::moves::pawn_moves::{pawn_movement, PawnMoveStrategy};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Strategy and movement pattern a piece of `kind` expands.
pub fn movement_for(kind: PieceKind, color: Color) -> (&'static dyn MoveStrategy, &'static [Offset]) {
    match kind {
        PieceKind::Pawn => (&PawnMoveStrategy, pawn_movement(color)),
        PieceKind::Knight => (&DirectMovementStrategy, &KNIGHT_OFFSETS),
        PieceKind::Bishop => (&LineMoveStrategy, &BISHOP_DIRECTIONS),
        PieceKind::Rook => (&LineMoveStrategy, &ROOK_DIRECTIONS),
        PieceKind::Queen => (&LineMoveStrategy, &QUEEN_DIRECTIONS),
        PieceKind::King => (&DirectMovementStrategy, &KING_OFFSETS),
    }
}

/// Geometric candidates only: no castling, no check filtering, no flags
/// written back to the board.
#[inline]
pub fn raw_candidate_moves(board: &Board, piece: &Piece) -> CandidateMoves {
    let (strategy, movement) = movement_for(piece.kind(), piece.color());
    strategy.candidate_moves(board, piece, movement)
}

/// Expand the piece's strategy, record whether it reaches the opposing king
/// and pass the candidates through the check-legality filter.
pub fn generate_with_strategy(board: &mut Board, piece: PieceId) -> RulesResult<MoveSet> {
    let candidates = {
        let mover = board.piece_in_play(piece)?;
        raw_candidate_moves(board, mover)
    };
    board.record_check_delivery(piece, candidates.checked_king)?;
    board.evaluate_move_legality(candidates.moves, piece)
}

impl Board {
    pub(crate) fn record_check_delivery(
        &mut self,
        piece: PieceId,
        checked_king: Option<PieceId>,
    ) -> RulesResult<()> {
        self.piece_mut(piece)?.delivers_check = checked_king.is_some();
        if let Some(king) = checked_king {
            self.piece_mut(king)?.is_in_check = true;
        }
        Ok(())
    }
}
