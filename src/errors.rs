//! Errors used throughout the rules engine.
//!
//! `RulesError` is the single error type returned by board construction,
//! registry maintenance, FEN decoding, notation parsing and the commit
//! pipeline.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidFenPiece`, `InvalidAlgebraic`, ...) describe bad
//!   input and are suitable for rejecting host input.
//! - Registry variants (`PieceNotInPlay`, `MissingKing`, ...) mean the caller
//!   broke an invariant upstream. They are surfaced instead of silently
//!   ignored, but normal play never produces them.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};

pub type RulesResult<T> = Result<T, RulesError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A board was requested with a size that is not a positive integer, or
    /// one too large for algebraic coordinates.
    InvalidBoardSize(i32),

    /// A coordinate outside `[0, size)` in at least one axis.
    SquareOffBoard(Coordinate),

    /// Placing a piece would put two pieces on the same coordinate.
    SquareOccupied(Coordinate),

    /// The piece exists but is not currently in play (captured, promoted, or
    /// lifted by a simulation).
    PieceNotInPlay(PieceId),

    /// The id was never issued by this board.
    UnknownPiece(PieceId),

    /// No King of this color is in play.
    MissingKing(Color),

    /// Unrecognised piece letter in FEN rank data.
    InvalidFenPiece(char),

    /// FEN rank data describes squares that do not fit the board.
    InvalidFenLayout(String),

    /// Square or move text that could not be parsed.
    InvalidAlgebraic(String),

    /// `promote` called while no pawn is waiting for a promotion choice.
    NoPendingPromotion,

    /// A pawn may only become a queen, rook, bishop or knight.
    InvalidPromotionKind(PieceKind),

    /// A speculative simulation was started while another one was running.
    SimulationInProgress,

    /// Unknown option name or unparsable option value.
    InvalidOption(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::InvalidBoardSize(size) => {
                write!(f, "board size must be a positive integer no larger than 26, got {size}")
            }
            RulesError::SquareOffBoard(coordinate) => {
                write!(f, "square {coordinate} is not on the board")
            }
            RulesError::SquareOccupied(coordinate) => {
                write!(f, "square {coordinate} is already occupied")
            }
            RulesError::PieceNotInPlay(id) => write!(f, "piece {id} is not in play"),
            RulesError::UnknownPiece(id) => write!(f, "piece {id} does not exist on this board"),
            RulesError::MissingKing(color) => write!(f, "no {color:?} king is in play"),
            RulesError::InvalidFenPiece(ch) => write!(f, "invalid piece symbol '{ch}' in FEN"),
            RulesError::InvalidFenLayout(msg) => write!(f, "invalid FEN layout: {msg}"),
            RulesError::InvalidAlgebraic(text) => write!(f, "invalid algebraic notation: {text}"),
            RulesError::NoPendingPromotion => write!(f, "no pawn is awaiting promotion"),
            RulesError::InvalidPromotionKind(kind) => {
                write!(f, "a pawn cannot be promoted to {kind:?}")
            }
            RulesError::SimulationInProgress => {
                write!(f, "a move simulation is already in progress")
            }
            RulesError::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl Error for RulesError {}
