//! Movement pattern expansion.
//!
//! A `MoveStrategy` turns a piece's offsets or direction vectors into the
//! geometric candidate moves allowed by board occupancy. Strategies only read
//! the board; recording check flags is the caller's job, driven by
//! `CandidateMoves::checked_king`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Offset, PieceId};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::MoveSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateMoves {
    pub moves: MoveSet,
    /// Opposing king found on one of the piece's targets.
    pub checked_king: Option<PieceId>,
}

impl CandidateMoves {
    pub fn delivers_check(&self) -> bool {
        self.checked_king.is_some()
    }
}

pub trait MoveStrategy: Sync {
    fn candidate_moves(&self, board: &Board, piece: &Piece, movement: &[Offset]) -> CandidateMoves;
}
