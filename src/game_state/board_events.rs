//! Notifications a board raises for its host.
//!
//! The board never calls back into the host while it is mutating. Events
//! are queued during an operation and handed out afterwards, either drained
//! as a `Vec` or pushed through a `BoardListener`.

use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    PositionChanged {
        piece: PieceId,
        from: Coordinate,
        to: Coordinate,
    },
    PieceCaptured {
        piece: PieceId,
        kind: PieceKind,
        color: Color,
        at: Coordinate,
    },
    /// The pawn reached its promotion rank and was lifted off the board. The
    /// host answers with `Board::promote`.
    PawnPromotionAvailable {
        pawn: PieceId,
        color: Color,
        at: Coordinate,
    },
    PiecePromoted {
        pawn: PieceId,
        piece: PieceId,
        kind: PieceKind,
    },
    /// `color` just finished its move.
    TurnEnded { piece: PieceId, color: Color },
    KingCheckmated { king: PieceId, color: Color },
    BoardReset,
}

pub trait BoardListener {
    fn on_board_event(&mut self, event: &BoardEvent);
}

impl<F> BoardListener for F
where
    F: FnMut(&BoardEvent),
{
    fn on_board_event(&mut self, event: &BoardEvent) {
        self(event)
    }
}
