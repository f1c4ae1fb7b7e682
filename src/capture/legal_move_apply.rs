//! Commit pipeline.
//!
//! `set_position_on_board` runs the mover's capture strategy, places the
//! mover, advances the clocks and turn, and refreshes both kings' check
//! state. Destinations are trusted: the pipeline does not re-run legality,
//! callers commit only moves taken from `get_legal_moves`.

use tracing::debug;

use crate::capture::capture_strategy::capture_strategy_for;
use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::Board;
use crate::game_state::board_events::BoardEvent;
use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};
use crate::game_state::piece::{Piece, PieceOrigin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Pure placement while setting a board up: no captures, clocks or turn.
    InitialSetup,
    Normal,
    /// Relocation that is part of another piece's move (the castling king).
    /// Captures apply, the turn and check state are left to the outer move.
    BypassTurnOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitOutcome {
    pub piece: PieceId,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<PieceId>,
    pub promotion_pending: bool,
    pub castled_king: Option<PieceId>,
}

impl Board {
    /// Commit a normal move of `piece` to `target`.
    pub fn commit_move(&mut self, piece: PieceId, target: Coordinate) -> RulesResult<CommitOutcome> {
        self.set_position_on_board(piece, target, Placement::Normal)
    }

    pub fn set_position_on_board(
        &mut self,
        piece: PieceId,
        target: Coordinate,
        placement: Placement,
    ) -> RulesResult<CommitOutcome> {
        if !self.is_square_on_board(target) {
            return Err(RulesError::SquareOffBoard(target));
        }
        let (from, kind) = {
            let mover = self.piece_in_play(piece)?;
            (mover.coordinate(), mover.kind())
        };

        if placement == Placement::InitialSetup {
            if self.piece_id_at(target).is_some_and(|other| other != piece) {
                return Err(RulesError::SquareOccupied(target));
            }
            self.shift(piece, target)?;
            self.piece_mut(piece)?.previous_coordinate = from;
            self.events.push(BoardEvent::PositionChanged {
                piece,
                from,
                to: target,
            });
            return Ok(CommitOutcome {
                piece,
                from,
                to: target,
                captured: None,
                promotion_pending: false,
                castled_king: None,
            });
        }

        let capture = capture_strategy_for(kind).try_capture(self, piece, target)?;
        let to = capture.destination;
        if self.piece_id_at(to).is_some_and(|other| other != piece) {
            return Err(RulesError::SquareOccupied(to));
        }

        let bypass = placement == Placement::BypassTurnOrder;
        self.complete_move(piece, to, capture.captured.is_some(), bypass)?;

        if capture.promotion {
            let color = self.piece(piece)?.color();
            self.lift(piece)?;
            self.pending_promotion = Some(piece);
            debug!(pawn = %piece, at = %to, "promotion available");
            self.events.push(BoardEvent::PawnPromotionAvailable {
                pawn: piece,
                color,
                at: to,
            });
        }

        if !bypass {
            self.refresh_check_state();
            self.checkmate_announced = [false; 2];
        }

        Ok(CommitOutcome {
            piece,
            from,
            to,
            captured: capture.captured,
            promotion_pending: capture.promotion,
            castled_king: capture.castled_king,
        })
    }

    /// Place the mover and, unless `bypass_turn_order`, hand the turn over.
    pub(crate) fn complete_move(
        &mut self,
        piece: PieceId,
        to: Coordinate,
        captured: bool,
        bypass_turn_order: bool,
    ) -> RulesResult<()> {
        let (from, color, kind) = {
            let mover = self.piece(piece)?;
            (mover.coordinate(), mover.color(), mover.kind())
        };

        self.shift(piece, to)?;
        let mover = self.piece_mut(piece)?;
        mover.previous_coordinate = from;
        mover.has_moved = true;
        self.events.push(BoardEvent::PositionChanged { piece, from, to });

        if bypass_turn_order {
            return Ok(());
        }

        self.set_last_moved(piece);
        if color == Color::Black {
            self.increment_full_move_clock();
        }
        if captured || kind == PieceKind::Pawn {
            self.reset_half_move_clock();
        } else {
            self.increment_half_move_clock();
        }
        self.active_color = color.opposite();
        self.events.push(BoardEvent::TurnEnded { piece, color });
        Ok(())
    }

    /// Replace the pawn waiting on its promotion rank with a new `kind`.
    pub fn promote(&mut self, kind: PieceKind) -> RulesResult<PieceId> {
        let pawn = self.pending_promotion.ok_or(RulesError::NoPendingPromotion)?;
        if !PROMOTION_KINDS.contains(&kind) {
            return Err(RulesError::InvalidPromotionKind(kind));
        }

        let (color, at) = {
            let pawn = self.piece(pawn)?;
            (pawn.color(), pawn.coordinate())
        };
        let mut promoted = Piece::new(kind, color, at).with_has_moved(true);
        promoted.origin = PieceOrigin::Promotion;
        let id = self.add_piece(promoted)?;

        self.pending_promotion = None;
        if self.last_moved == Some(pawn) {
            self.last_moved = Some(id);
        }

        debug!(pawn = %pawn, piece = %id, kind = ?kind, "pawn promoted");
        self.events.push(BoardEvent::PiecePromoted {
            pawn,
            piece: id,
            kind,
        });
        self.refresh_check_state();
        self.checkmate_announced = [false; 2];
        Ok(id)
    }
}
