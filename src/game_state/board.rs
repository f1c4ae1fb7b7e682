//! Shared mutable board state.
//!
//! `Board` owns the square topology, an arena of pieces addressed by
//! `PieceId`, a coordinate index over the pieces in play, the turn clocks and
//! the queue of events raised for the host. Move generation, legality and the
//! commit pipeline extend `Board` from their own modules.
//!
//! Invariants:
//! - `squares` is fixed at construction.
//! - `occupancy` holds exactly the pieces with `in_play == true`, one per
//!   coordinate, each keyed by its current coordinate.
//! - Only `simulate` may lift pieces temporarily, and it restores every piece
//!   it was told about before returning.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::errors::{RulesError, RulesResult};
use crate::game_state::board_events::{BoardEvent, BoardListener};
use crate::game_state::chess_rules::{LegalityPolicy, RulesConfig, MAX_BOARD_SIZE};
use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};
use crate::game_state::piece::{Piece, PieceOrigin};

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) size: i8,
    squares: Vec<Coordinate>,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) occupancy: HashMap<Coordinate, PieceId>,
    pub(crate) last_moved: Option<PieceId>,
    pub(crate) half_move_clock: u32,
    pub(crate) full_move_number: u32,
    pub(crate) active_color: Color,
    pub(crate) starting_color: Color,
    pub(crate) pending_promotion: Option<PieceId>,
    pub(crate) checkmate_announced: [bool; 2],
    simulating: bool,
    pub(crate) config: RulesConfig,
    pub(crate) events: Vec<BoardEvent>,
}

impl Board {
    /// Empty `size` x `size` board with the default rules.
    pub fn new(size: i32) -> RulesResult<Self> {
        Self::with_config(RulesConfig {
            board_size: size,
            ..RulesConfig::default()
        })
    }

    pub fn with_config(config: RulesConfig) -> RulesResult<Self> {
        if config.board_size <= 0 || config.board_size > MAX_BOARD_SIZE {
            return Err(RulesError::InvalidBoardSize(config.board_size));
        }
        let size = config.board_size as i8;

        let mut squares = Vec::with_capacity((size as usize) * (size as usize));
        for rank in 0..size {
            for file in 0..size {
                squares.push(Coordinate::new(file, rank));
            }
        }

        Ok(Self {
            size,
            squares,
            pieces: Vec::new(),
            occupancy: HashMap::new(),
            last_moved: None,
            half_move_clock: 0,
            full_move_number: 1,
            active_color: Color::White,
            starting_color: Color::White,
            pending_promotion: None,
            checkmate_announced: [false; 2],
            simulating: false,
            config,
            events: Vec::new(),
        })
    }

    pub fn size(&self) -> i32 {
        i32::from(self.size)
    }

    pub fn squares(&self) -> &[Coordinate] {
        &self.squares
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn legality(&self) -> LegalityPolicy {
        self.config.legality
    }

    pub fn set_legality(&mut self, legality: LegalityPolicy) {
        self.config.legality = legality;
    }

    pub fn is_square_on_board(&self, coordinate: Coordinate) -> bool {
        (0..self.size).contains(&coordinate.file) && (0..self.size).contains(&coordinate.rank)
    }

    /// Rank a pawn of `color` promotes on.
    pub fn promotion_rank(&self, color: Color) -> i8 {
        match color {
            Color::White => self.size - 1,
            Color::Black => 0,
        }
    }

    /// Rank a pawn of `color` starts on, from which it may double-step.
    pub fn pawn_home_rank(&self, color: Color) -> i8 {
        match color {
            Color::White => 1,
            Color::Black => self.size - 2,
        }
    }

    // ----- registry -----

    pub fn piece(&self, id: PieceId) -> RulesResult<&Piece> {
        self.pieces.get(id.0).ok_or(RulesError::UnknownPiece(id))
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> RulesResult<&mut Piece> {
        self.pieces.get_mut(id.0).ok_or(RulesError::UnknownPiece(id))
    }

    /// Like `piece`, but fails unless the piece is currently on the board.
    pub fn piece_in_play(&self, id: PieceId) -> RulesResult<&Piece> {
        let piece = self.piece(id)?;
        if !piece.in_play {
            return Err(RulesError::PieceNotInPlay(id));
        }
        Ok(piece)
    }

    pub fn piece_id_at(&self, coordinate: Coordinate) -> Option<PieceId> {
        self.occupancy.get(&coordinate).copied()
    }

    pub fn try_get_piece(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.piece_id_at(coordinate)
            .and_then(|id| self.pieces.get(id.0))
    }

    pub(crate) fn occupant(&self, coordinate: Coordinate) -> Option<(PieceId, &Piece)> {
        let id = self.piece_id_at(coordinate)?;
        self.pieces.get(id.0).map(|piece| (id, piece))
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.occupancy.contains_key(&coordinate)
    }

    /// Pieces in play, in id order.
    pub fn pieces_in_play(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| piece.in_play)
            .map(|(index, piece)| (PieceId(index), piece))
    }

    pub fn piece_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Register `piece` at its own coordinate and return its id.
    pub fn add_piece(&mut self, mut piece: Piece) -> RulesResult<PieceId> {
        let at = piece.coordinate;
        if !self.is_square_on_board(at) {
            return Err(RulesError::SquareOffBoard(at));
        }
        if self.is_occupied(at) {
            return Err(RulesError::SquareOccupied(at));
        }

        piece.in_play = true;
        piece.previous_coordinate = at;
        piece.delivers_check = false;
        piece.is_in_check = false;

        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.occupancy.insert(at, id);
        Ok(id)
    }

    /// Take a piece out of play. Removing a piece that is not on the board is
    /// a caller error and is reported, never ignored.
    pub fn remove_piece(&mut self, id: PieceId) -> RulesResult<()> {
        let at = self.piece_in_play(id)?.coordinate;
        self.occupancy.remove(&at);
        self.piece_mut(id)?.in_play = false;
        if self.pending_promotion == Some(id) {
            self.pending_promotion = None;
        }
        Ok(())
    }

    pub fn get_pieces(&self, color: Color) -> Vec<PieceId> {
        self.pieces_in_play()
            .filter(|(_, piece)| piece.color == color)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn get_opponent_pieces(&self, color: Color) -> Vec<PieceId> {
        self.get_pieces(color.opposite())
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<PieceId> {
        self.pieces_in_play()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(id, _)| id)
    }

    pub fn get_king(&self, color: Color) -> RulesResult<PieceId> {
        self.find_king(color).ok_or(RulesError::MissingKing(color))
    }

    pub fn get_king_of(&self, piece: PieceId) -> RulesResult<PieceId> {
        let color = self.piece(piece)?.color;
        self.get_king(color)
    }

    pub fn get_opponent_king_of(&self, piece: PieceId) -> RulesResult<PieceId> {
        let color = self.piece(piece)?.color;
        self.get_king(color.opposite())
    }

    /// Squares between the king and the rook's side that must be empty to
    /// castle: two files on the kingside, three on the queenside.
    pub fn get_castling_squares(
        &self,
        king: PieceId,
        is_kingside: bool,
    ) -> RulesResult<BTreeSet<Coordinate>> {
        let origin = self.piece(king)?.coordinate;
        let files: &[i8] = if is_kingside { &[1, 2] } else { &[-1, -2, -3] };
        Ok(files
            .iter()
            .map(|&file| origin + (file, 0))
            .filter(|&square| self.is_square_on_board(square))
            .collect())
    }

    /// Sum of the material cost of `color`'s pieces in play.
    pub fn material(&self, color: Color) -> u32 {
        self.pieces_in_play()
            .filter(|(_, piece)| piece.color == color)
            .map(|(_, piece)| piece.material_cost())
            .sum()
    }

    // ----- turn bookkeeping -----

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
    }

    pub fn last_moved(&self) -> Option<PieceId> {
        self.last_moved
    }

    pub fn set_last_moved(&mut self, piece: PieceId) {
        self.last_moved = Some(piece);
    }

    pub fn half_move_clock(&self) -> u32 {
        self.half_move_clock
    }

    pub fn full_move_number(&self) -> u32 {
        self.full_move_number
    }

    pub fn increment_half_move_clock(&mut self) {
        self.half_move_clock += 1;
    }

    pub fn reset_half_move_clock(&mut self) {
        self.half_move_clock = 0;
    }

    pub fn increment_full_move_clock(&mut self) {
        self.full_move_number += 1;
    }

    /// Pawn waiting for `promote`, if any.
    pub fn pending_promotion(&self) -> Option<PieceId> {
        self.pending_promotion
    }

    // ----- events -----

    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand every queued event to `listener`, oldest first.
    pub fn dispatch_events<L>(&mut self, listener: &mut L)
    where
        L: BoardListener + ?Sized,
    {
        for event in self.drain_events() {
            listener.on_board_event(&event);
        }
    }

    /// Put every set-up piece back on its starting square, discard pieces
    /// created by promotion and clear the clocks.
    ///
    /// When two set-up pieces share a starting square the lower id gets it
    /// and the other stays out of play.
    pub fn reset(&mut self) {
        self.occupancy.clear();
        for (index, piece) in self.pieces.iter_mut().enumerate() {
            piece.delivers_check = false;
            piece.is_in_check = false;
            if piece.origin == PieceOrigin::Promotion {
                piece.in_play = false;
                continue;
            }
            if let Some(holder) = self.occupancy.get(&piece.starting_coordinate) {
                debug!(
                    piece = %PieceId(index),
                    holder = %holder,
                    at = %piece.starting_coordinate,
                    "starting square taken, piece left out of play"
                );
                piece.in_play = false;
                continue;
            }
            piece.coordinate = piece.starting_coordinate;
            piece.previous_coordinate = piece.starting_coordinate;
            piece.has_moved = piece.starting_has_moved;
            piece.in_play = true;
            self.occupancy.insert(piece.starting_coordinate, PieceId(index));
        }

        self.last_moved = None;
        self.half_move_clock = 0;
        self.full_move_number = 1;
        self.active_color = self.starting_color;
        self.pending_promotion = None;
        self.checkmate_announced = [false; 2];
        self.refresh_check_state();

        debug!(pieces = self.occupancy.len(), "board reset");
        self.events.push(BoardEvent::BoardReset);
    }

    // ----- primitives shared by simulation and commit -----

    /// Take a piece off its square without recording a capture.
    pub(crate) fn lift(&mut self, id: PieceId) -> RulesResult<()> {
        let at = self.piece_in_play(id)?.coordinate;
        if self.occupancy.get(&at) == Some(&id) {
            self.occupancy.remove(&at);
        }
        self.piece_mut(id)?.in_play = false;
        Ok(())
    }

    /// Move an in-play piece to `to` in the index. Does not touch
    /// `previous_coordinate`, `has_moved` or the clocks.
    pub(crate) fn shift(&mut self, id: PieceId, to: Coordinate) -> RulesResult<()> {
        let from = self.piece_in_play(id)?.coordinate;
        if self.occupancy.get(&from) == Some(&id) {
            self.occupancy.remove(&from);
        }
        self.piece_mut(id)?.coordinate = to;
        self.occupancy.insert(to, id);
        Ok(())
    }

    /// Remove an opponent's piece as the result of a move.
    pub(crate) fn capture_piece(&mut self, id: PieceId) -> RulesResult<()> {
        self.remove_piece(id)?;
        let piece = self.piece(id)?;
        let event = BoardEvent::PieceCaptured {
            piece: id,
            kind: piece.kind,
            color: piece.color,
            at: piece.coordinate,
        };
        debug!(piece = %id, kind = ?piece.kind, color = ?piece.color, at = %piece.coordinate, "piece captured");
        self.events.push(event);
        Ok(())
    }

    /// Run a what-if mutation and restore every piece in `touched` afterwards,
    /// including when `probe` fails. Nested simulations are rejected.
    pub(crate) fn simulate<T, F>(&mut self, touched: &[PieceId], probe: F) -> RulesResult<T>
    where
        F: FnOnce(&mut Board) -> RulesResult<T>,
    {
        if self.simulating {
            return Err(RulesError::SimulationInProgress);
        }

        let saved: Vec<(PieceId, Piece)> = touched
            .iter()
            .map(|&id| self.piece(id).map(|piece| (id, piece.clone())))
            .collect::<RulesResult<_>>()?;

        self.simulating = true;
        let result = probe(self);
        self.simulating = false;

        for (id, _) in &saved {
            let at = self.pieces[id.0].coordinate;
            if self.occupancy.get(&at) == Some(id) {
                self.occupancy.remove(&at);
            }
        }
        for (id, piece) in saved {
            if piece.in_play {
                self.occupancy.insert(piece.coordinate, id);
            }
            self.pieces[id.0] = piece;
        }

        result
    }
}
