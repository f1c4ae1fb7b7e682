use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceId;
use crate::move_generation::legal_move_shared::raw_candidate_moves;
use crate::moves::move_descriptions::{Move, MoveSet, MoveType};

pub fn generate_rook_moves(board: &mut Board, rook: PieceId) -> RulesResult<MoveSet> {
    let mut candidates = {
        let mover = board.piece_in_play(rook)?;
        raw_candidate_moves(board, mover)
    };
    if let Some(castle) = castle_candidate(board, rook)? {
        candidates.moves.insert(castle);
    }

    board.record_check_delivery(rook, candidates.checked_king)?;
    board.evaluate_move_legality(candidates.moves, rook)
}

/// Castle signal for an unmoved rook: a `Castle` move onto its own king's
/// square, offered while the king is unmoved, shares the rook's rank, and
/// every castling square (and anything else between them) is empty.
pub fn castle_candidate(board: &Board, rook: PieceId) -> RulesResult<Option<Move>> {
    let rook_piece = board.piece_in_play(rook)?;
    if rook_piece.has_moved() {
        return Ok(None);
    }
    let Some(king) = board.find_king(rook_piece.color()) else {
        return Ok(None);
    };
    let king_piece = board.piece(king)?;
    let (rook_at, king_at) = (rook_piece.coordinate(), king_piece.coordinate());
    if king_piece.has_moved() || king_at.rank != rook_at.rank {
        return Ok(None);
    }

    let is_kingside = rook_at.file > king_at.file;
    let castling_squares = board.get_castling_squares(king, is_kingside)?;
    if castling_squares.len() != if is_kingside { 2 } else { 3 } {
        return Ok(None);
    }

    let toward_rook = (rook_at.file - king_at.file).signum();
    let mut between = king_at + (toward_rook, 0);
    while between != rook_at {
        if board.is_occupied(between) {
            return Ok(None);
        }
        between = between + (toward_rook, 0);
    }
    if castling_squares.iter().any(|&square| board.is_occupied(square)) {
        return Ok(None);
    }

    Ok(Some(Move::new(king_at, false, MoveType::Castle)))
}
