//! FEN decoding.
//!
//! `parse_fen` turns FEN text into a `Fen` value. Only the piece placement
//! is mandatory; every other field falls back to its default when absent or
//! unreadable. `Board::from_fen` builds a board from the decoded value.

use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{RulesConfig, MAX_BOARD_SIZE};
use crate::game_state::chess_types::{Color, Coordinate, PieceKind};
use crate::game_state::piece::Piece;
use crate::utils::algebraic::algebraic_to_coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenPlacement {
    pub kind: PieceKind,
    pub color: Color,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Number of ranks in the placement field, which is also the board size.
    pub ranks: usize,
    pub placements: Vec<FenPlacement>,
    pub active_color: Color,
    pub castling_availability: String,
    pub en_passant_target: Option<Coordinate>,
    pub half_move_clock: u32,
    pub full_move_number: u32,
}

pub fn parse_fen(fen: &str) -> RulesResult<Fen> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| RulesError::InvalidFenLayout("missing piece placement".to_owned()))?;
    let (ranks, placements) = parse_placement(board_part)?;

    let active_color = match parts.next() {
        Some("b") => Color::Black,
        _ => Color::White,
    };
    let castling_availability = parts.next().unwrap_or("-").to_owned();
    let en_passant_target = parts
        .next()
        .and_then(|field| algebraic_to_coordinate(field).ok());
    let half_move_clock = parts
        .next()
        .and_then(|field| field.parse::<u32>().ok())
        .unwrap_or(0);
    let full_move_number = parts
        .next()
        .and_then(|field| field.parse::<u32>().ok())
        .unwrap_or(1);

    Ok(Fen {
        ranks,
        placements,
        active_color,
        castling_availability,
        en_passant_target,
        half_move_clock,
        full_move_number,
    })
}

fn parse_placement(board_part: &str) -> RulesResult<(usize, Vec<FenPlacement>)> {
    let rows: Vec<&str> = board_part.split('/').collect();
    let ranks = rows.len();
    if ranks > MAX_BOARD_SIZE as usize {
        return Err(RulesError::InvalidBoardSize(ranks as i32));
    }
    let mut placements = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        let rank = (ranks - 1 - row_index) as i8;
        let mut file = 0usize;
        let mut empty_run = 0usize;

        for ch in row.chars() {
            if let Some(digit) = ch.to_digit(10) {
                empty_run = empty_run * 10 + digit as usize;
                if file + empty_run > ranks {
                    return Err(RulesError::InvalidFenLayout(format!(
                        "rank {} is wider than {ranks} files",
                        rank + 1
                    )));
                }
                continue;
            }
            file += empty_run;
            empty_run = 0;

            let (color, kind) = Piece::from_fen_symbol(ch).ok_or(RulesError::InvalidFenPiece(ch))?;
            if file >= ranks {
                return Err(RulesError::InvalidFenLayout(format!(
                    "rank {} is wider than {ranks} files",
                    rank + 1
                )));
            }
            placements.push(FenPlacement {
                kind,
                color,
                coordinate: Coordinate::new(file as i8, rank),
            });
            file += 1;
        }
        file += empty_run;

        if file != ranks {
            return Err(RulesError::InvalidFenLayout(format!(
                "rank {} spans {file} files, expected {ranks}",
                rank + 1
            )));
        }
    }

    Ok((ranks, placements))
}

impl Board {
    /// Board sized by the FEN's rank count, with default rules.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let decoded = parse_fen(fen)?;
        let config = RulesConfig {
            board_size: decoded.ranks as i32,
            ..RulesConfig::default()
        };
        Self::from_decoded_fen(&decoded, config)
    }

    /// Like `from_fen`, but the FEN must match `config.board_size`.
    pub fn from_fen_with_config(fen: &str, config: RulesConfig) -> RulesResult<Self> {
        let decoded = parse_fen(fen)?;
        if decoded.ranks as i32 != config.board_size {
            return Err(RulesError::InvalidFenLayout(format!(
                "{} ranks for a board of size {}",
                decoded.ranks, config.board_size
            )));
        }
        Self::from_decoded_fen(&decoded, config)
    }

    /// Pawns found off their home rank are marked as moved so they cannot
    /// double-step.
    pub fn from_decoded_fen(fen: &Fen, config: RulesConfig) -> RulesResult<Self> {
        let mut board = Board::with_config(config)?;
        for placement in &fen.placements {
            let off_home_rank = placement.kind == PieceKind::Pawn
                && placement.coordinate.rank != board.pawn_home_rank(placement.color);
            let piece = Piece::new(placement.kind, placement.color, placement.coordinate)
                .with_has_moved(off_home_rank);
            board.add_piece(piece)?;
        }

        board.active_color = fen.active_color;
        board.starting_color = fen.active_color;
        board.half_move_clock = fen.half_move_clock;
        board.full_move_number = fen.full_move_number;
        board.refresh_check_state();
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_position_decodes_all_fields() {
        let fen = parse_fen(STARTING_POSITION_FEN).expect("valid FEN");
        assert_eq!(fen.ranks, 8);
        assert_eq!(fen.placements.len(), 32);
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.castling_availability, "KQkq");
        assert_eq!(fen.en_passant_target, None);
        assert_eq!((fen.half_move_clock, fen.full_move_number), (0, 1));

        let first = fen.placements[0];
        assert_eq!(
            first,
            FenPlacement {
                kind: PieceKind::Rook,
                color: Color::Black,
                coordinate: Coordinate::new(0, 7),
            }
        );
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let fen = parse_fen("8/8/8/8/8/8/8/4K3").expect("placement only");
        assert_eq!(fen.active_color, Color::White);
        assert_eq!(fen.castling_availability, "-");
        assert_eq!((fen.half_move_clock, fen.full_move_number), (0, 1));

        let fen = parse_fen("8/8/8/8/8/8/8/4K3 b - e3 x y").expect("lenient fields");
        assert_eq!(fen.active_color, Color::Black);
        assert_eq!(fen.en_passant_target, Some(Coordinate::new(4, 2)));
        assert_eq!((fen.half_move_clock, fen.full_move_number), (0, 1));
    }

    #[test]
    fn unknown_piece_letters_fail() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4X3 w - - 0 1"),
            Err(RulesError::InvalidFenPiece('X'))
        );
    }

    #[test]
    fn ranks_must_fill_the_board() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K2 w - - 0 1"),
            Err(RulesError::InvalidFenLayout(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K4 w - - 0 1"),
            Err(RulesError::InvalidFenLayout(_))
        ));
        assert!(parse_fen("").is_err());
    }

    #[test]
    fn oversized_empty_runs_are_layout_errors() {
        assert!(matches!(
            parse_fen("99999999999999999999999/8/8/8/8/8/8/8 w - - 0 1"),
            Err(RulesError::InvalidFenLayout(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K18446744073709551615 w - - 0 1"),
            Err(RulesError::InvalidFenLayout(_))
        ));
    }

    #[test]
    fn multi_digit_runs_describe_large_boards() {
        let rows = vec!["10"; 9];
        let fen_text = format!("{}/4K5", rows.join("/"));
        let board = Board::from_fen(&fen_text).expect("ten by ten board");
        assert_eq!(board.size(), 10);
        assert!(board.piece_id_at(Coordinate::new(4, 0)).is_some());
    }

    #[test]
    fn board_from_fen_applies_turn_and_clocks() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 12 40").expect("valid FEN");
        assert_eq!(board.active_color(), Color::Black);
        assert_eq!(board.half_move_clock(), 12);
        assert_eq!(board.full_move_number(), 40);
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn config_size_must_match_the_fen() {
        let config = RulesConfig {
            board_size: 10,
            ..RulesConfig::default()
        };
        assert!(matches!(
            Board::from_fen_with_config(STARTING_POSITION_FEN, config),
            Err(RulesError::InvalidFenLayout(_))
        ));
    }
}
