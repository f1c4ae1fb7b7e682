//! Per-kind side effects applied when a move is committed.
//!
//! A capture strategy runs once per commit, before the mover is placed and
//! the clocks advance. It removes whatever the move takes, relocates a
//! castling king, or flags a promotion, and reports where the mover itself
//! ends up.

use crate::capture::pawn_capture::PawnCaptureStrategy;
use crate::capture::rook_capture::RookCaptureStrategy;
use crate::capture::standard_capture::StandardCaptureStrategy;
use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coordinate, PieceId, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub captured: Option<PieceId>,
    /// Square the mover finishes on. Differs from the requested square only
    /// for castling, where the rook stops beside the king.
    pub destination: Coordinate,
    pub promotion: bool,
    pub castled_king: Option<PieceId>,
}

impl CaptureOutcome {
    pub fn moving_to(destination: Coordinate) -> Self {
        Self {
            captured: None,
            destination,
            promotion: false,
            castled_king: None,
        }
    }
}

pub trait CaptureStrategy: Sync {
    fn try_capture(
        &self,
        board: &mut Board,
        mover: PieceId,
        destination: Coordinate,
    ) -> RulesResult<CaptureOutcome>;
}

pub fn capture_strategy_for(kind: PieceKind) -> &'static dyn CaptureStrategy {
    match kind {
        PieceKind::Pawn => &PawnCaptureStrategy,
        PieceKind::Rook => &RookCaptureStrategy,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen | PieceKind::King => {
            &StandardCaptureStrategy
        }
    }
}
