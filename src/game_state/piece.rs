//! Piece records stored in a board's arena.
//!
//! A `Piece` is plain data: kind, color, coordinates and the flags the rules
//! maintain. Behavior per kind (movement pattern, capture rule) is selected
//! by the move generation and capture modules from `Piece::kind`.

use crate::game_state::chess_types::{Color, Coordinate, PieceKind};

/// Where a piece came from. Reset brings `Setup` pieces back and discards
/// pieces created by promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceOrigin {
    Setup,
    Promotion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) coordinate: Coordinate,
    pub(crate) previous_coordinate: Coordinate,
    pub(crate) starting_coordinate: Coordinate,
    pub(crate) has_moved: bool,
    pub(crate) starting_has_moved: bool,
    pub(crate) delivers_check: bool,
    pub(crate) is_in_check: bool,
    pub(crate) in_play: bool,
    pub(crate) origin: PieceOrigin,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, coordinate: Coordinate) -> Self {
        Self {
            kind,
            color,
            coordinate,
            previous_coordinate: coordinate,
            starting_coordinate: coordinate,
            has_moved: false,
            starting_has_moved: false,
            delivers_check: false,
            is_in_check: false,
            in_play: false,
            origin: PieceOrigin::Setup,
        }
    }

    /// Mark the piece as already moved before it is placed. The flag is also
    /// what `Board::reset` restores.
    pub fn with_has_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self.starting_has_moved = has_moved;
        self
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn previous_coordinate(&self) -> Coordinate {
        self.previous_coordinate
    }

    pub fn starting_coordinate(&self) -> Coordinate {
        self.starting_coordinate
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Set when the piece's last move generation found the opposing king in
    /// one of its lines or offsets.
    pub fn delivers_check(&self) -> bool {
        self.delivers_check
    }

    /// Only ever true for kings.
    pub fn is_in_check(&self) -> bool {
        self.is_in_check
    }

    pub fn in_play(&self) -> bool {
        self.in_play
    }

    pub fn origin(&self) -> PieceOrigin {
        self.origin
    }

    pub fn material_cost(&self) -> u32 {
        self.kind.material_cost()
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_symbol(&self) -> char {
        let symbol = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    pub fn from_fen_symbol(symbol: char) -> Option<(Color, PieceKind)> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}
