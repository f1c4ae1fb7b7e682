//! Canonical chess-rule constants and runtime rule configuration.
//!
//! Holds the standard starting position, the board size limits, the kinds a
//! pawn may promote to, and `RulesConfig`, the set of switches a host may
//! tune before building a board.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const STANDARD_BOARD_SIZE: i32 = 8;

/// Largest board whose files can still be written as single letters.
pub const MAX_BOARD_SIZE: i32 = 26;

/// Kinds a pawn may be replaced with on its promotion rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// How aggressively non-king moves are filtered against exposing the own king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegalityPolicy {
    /// Filter only while the king is already in check: the move must capture
    /// the single checking piece or block its line.
    #[default]
    CheckResponseOnly,
    /// Additionally simulate every move and drop those that leave the own
    /// king attacked, which rejects moves of pinned pieces.
    RejectRevealedChecks,
}

impl LegalityPolicy {
    pub fn from_option_value(value: &str) -> RulesResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "check-response" => Ok(LegalityPolicy::CheckResponseOnly),
            "reveals-check" => Ok(LegalityPolicy::RejectRevealedChecks),
            other => Err(RulesError::InvalidOption(format!(
                "Legality must be 'check-response' or 'reveals-check', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub board_size: i32,
    pub legality: LegalityPolicy,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            legality: LegalityPolicy::default(),
        }
    }
}

impl RulesConfig {
    /// Set an option by its protocol name (`BoardSize`, `Legality`).
    ///
    /// Names are matched case-insensitively. The board size is validated the
    /// same way board construction validates it.
    pub fn set_option(&mut self, name: &str, value: &str) -> RulesResult<()> {
        match name.trim().to_ascii_lowercase().as_str() {
            "boardsize" => {
                let size = value.trim().parse::<i32>().map_err(|_| {
                    RulesError::InvalidOption(format!("BoardSize must be an integer, got '{value}'"))
                })?;
                if size <= 0 || size > MAX_BOARD_SIZE {
                    return Err(RulesError::InvalidBoardSize(size));
                }
                self.board_size = size;
                Ok(())
            }
            "legality" => {
                self.legality = LegalityPolicy::from_option_value(value)?;
                Ok(())
            }
            _ => Err(RulesError::InvalidOption(format!("unknown option '{name}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_standard_board_with_check_response_filter() {
        let config = RulesConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.legality, LegalityPolicy::CheckResponseOnly);
    }

    #[test]
    fn options_are_set_by_name() {
        let mut config = RulesConfig::default();
        config.set_option("BoardSize", "10").expect("valid size");
        config.set_option("legality", "reveals-check").expect("valid policy");
        assert_eq!(config.board_size, 10);
        assert_eq!(config.legality, LegalityPolicy::RejectRevealedChecks);
    }

    #[test]
    fn bad_option_values_are_rejected() {
        let mut config = RulesConfig::default();
        assert_eq!(
            config.set_option("BoardSize", "0"),
            Err(RulesError::InvalidBoardSize(0))
        );
        assert!(config.set_option("BoardSize", "eight").is_err());
        assert!(config.set_option("Legality", "strict").is_err());
        assert!(config.set_option("Hash", "16").is_err());
        assert_eq!(config, RulesConfig::default());
    }
}
