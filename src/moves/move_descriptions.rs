//! Move value type.
//!
//! A `Move` is a destination square plus what kind of move reaches it. Moves
//! compare, hash and order by coordinate alone, so a `MoveSet` never holds
//! two moves to the same square.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Move,
    Capture,
    Castle,
    EnPassant,
    /// The destination holds the opposing king.
    Check,
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    coordinate: Coordinate,
    delivers_check: bool,
    move_type: MoveType,
}

/// Sorted by coordinate (rank, then file) so iteration is deterministic.
pub type MoveSet = BTreeSet<Move>;

impl Move {
    pub const fn new(coordinate: Coordinate, delivers_check: bool, move_type: MoveType) -> Self {
        Self {
            coordinate,
            delivers_check,
            move_type,
        }
    }

    pub const fn quiet(coordinate: Coordinate) -> Self {
        Self::new(coordinate, false, MoveType::Move)
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn delivers_check(&self) -> bool {
        self.delivers_check
    }

    pub const fn move_type(&self) -> MoveType {
        self.move_type
    }

    /// Same move, flagged as part of a line that reaches the opposing king.
    pub const fn with_check(self) -> Self {
        Self {
            delivers_check: true,
            ..self
        }
    }

    /// `Check` entries describe an attack on the king, not a move a player
    /// can make.
    pub fn is_playable(&self) -> bool {
        self.move_type != MoveType::Check
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.coordinate.rank, self.coordinate.file)
            .cmp(&(other.coordinate.rank, other.coordinate.file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_to_the_same_square_are_the_same_move() {
        let square = Coordinate::new(4, 4);
        let mut set = MoveSet::new();
        assert!(set.insert(Move::quiet(square)));
        assert!(!set.insert(Move::new(square, true, MoveType::Capture)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Move::new(square, false, MoveType::EnPassant)));
    }

    #[test]
    fn with_check_keeps_coordinate_and_type() {
        let original = Move::new(Coordinate::new(2, 3), false, MoveType::Capture);
        let flagged = original.with_check();
        assert!(!original.delivers_check());
        assert!(flagged.delivers_check());
        assert_eq!(flagged.move_type(), MoveType::Capture);
        assert_eq!(flagged.coordinate(), Coordinate::new(2, 3));
    }
}
