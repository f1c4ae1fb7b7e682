use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceId;
use crate::move_generation::legal_move_shared::generate_with_strategy;
use crate::moves::move_descriptions::MoveSet;

pub fn generate_pawn_moves(board: &mut Board, pawn: PieceId) -> RulesResult<MoveSet> {
    generate_with_strategy(board, pawn)
}
