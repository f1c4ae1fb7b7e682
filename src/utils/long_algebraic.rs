//! Engine move text such as `e2e4` or `e7e8q`.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::{Coordinate, PieceKind};
use crate::utils::algebraic::{algebraic_to_coordinate, coordinate_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineMove {
    pub from: Coordinate,
    pub to: Coordinate,
    pub promotion: Option<PieceKind>,
}

pub fn long_algebraic_to_engine_move(text: &str) -> RulesResult<EngineMove> {
    let invalid = || RulesError::InvalidAlgebraic(text.to_owned());
    let text = text.trim();

    // Squares are a letter followed by digits, so the split points are the
    // second letter and an optional trailing promotion letter.
    let second_file = text
        .char_indices()
        .skip(1)
        .find(|(_, ch)| ch.is_ascii_alphabetic())
        .map(|(index, _)| index)
        .ok_or_else(invalid)?;
    let (from_text, rest) = text.split_at(second_file);

    let (to_text, promotion) = match rest.char_indices().skip(1).find(|(_, ch)| ch.is_ascii_alphabetic()) {
        Some((index, _)) => {
            let (to_text, suffix) = rest.split_at(index);
            let kind = promotion_from_char(suffix).ok_or_else(invalid)?;
            (to_text, Some(kind))
        }
        None => (rest, None),
    };

    Ok(EngineMove {
        from: algebraic_to_coordinate(from_text).map_err(|_| invalid())?,
        to: algebraic_to_coordinate(to_text).map_err(|_| invalid())?,
        promotion,
    })
}

pub fn engine_move_to_long_algebraic(engine_move: &EngineMove) -> RulesResult<String> {
    let mut out = coordinate_to_algebraic(engine_move.from)?;
    out.push_str(&coordinate_to_algebraic(engine_move.to)?);
    if let Some(kind) = engine_move.promotion {
        out.push(promotion_to_char(kind).ok_or(RulesError::InvalidPromotionKind(kind))?);
    }
    Ok(out)
}

fn promotion_from_char(suffix: &str) -> Option<PieceKind> {
    match suffix {
        "q" => Some(PieceKind::Queen),
        "r" => Some(PieceKind::Rook),
        "b" => Some(PieceKind::Bishop),
        "n" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Queen => Some('q'),
        PieceKind::Rook => Some('r'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Knight => Some('n'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let plain = long_algebraic_to_engine_move("e2e4").expect("valid move");
        assert_eq!(plain.from, Coordinate::new(4, 1));
        assert_eq!(plain.to, Coordinate::new(4, 3));
        assert_eq!(plain.promotion, None);

        let promotion = long_algebraic_to_engine_move("b7a8n").expect("valid move");
        assert_eq!(promotion.to, Coordinate::new(0, 7));
        assert_eq!(promotion.promotion, Some(PieceKind::Knight));
        assert_eq!(
            engine_move_to_long_algebraic(&promotion).expect("formats"),
            "b7a8n"
        );
    }

    #[test]
    fn parses_multi_digit_ranks() {
        let mv = long_algebraic_to_engine_move("a10b12").expect("valid move");
        assert_eq!(mv.from, Coordinate::new(0, 9));
        assert_eq!(mv.to, Coordinate::new(1, 11));
    }

    #[test]
    fn rejects_garbage() {
        for text in ["", "e2", "e2e", "e2e4k", "e2e4qq", "(none)"] {
            assert!(long_algebraic_to_engine_move(text).is_err(), "{text}");
        }
    }
}
