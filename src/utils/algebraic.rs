//! Coordinate conversions for algebraic square names.
//!
//! Files are letters from `a`, ranks are 1-based numbers, so `e4` is
//! `Coordinate { file: 4, rank: 3 }`. Ranks may run past 9 on large boards.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::Coordinate;

/// Convert algebraic notation (for example: "e4") to a coordinate.
pub fn algebraic_to_coordinate(square: &str) -> RulesResult<Coordinate> {
    let invalid = || RulesError::InvalidAlgebraic(square.to_owned());

    let mut chars = square.chars();
    let file = chars.next().filter(char::is_ascii_lowercase).ok_or_else(invalid)?;
    let rank_text = chars.as_str();
    if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank = rank_text.parse::<i8>().map_err(|_| invalid())?;
    if rank < 1 {
        return Err(invalid());
    }

    Ok(Coordinate::new((file as u8 - b'a') as i8, rank - 1))
}

/// Convert a coordinate to algebraic notation (for example: "e4").
pub fn coordinate_to_algebraic(coordinate: Coordinate) -> RulesResult<String> {
    if !(0..26).contains(&coordinate.file) || coordinate.rank < 0 {
        return Err(RulesError::SquareOffBoard(coordinate));
    }
    let file = char::from(b'a' + coordinate.file as u8);
    Ok(format!("{file}{}", i32::from(coordinate.rank) + 1))
}
