//! Text protocol spoken with an external engine process.
//!
//! The board only formats the `position` and `go` commands and reads the
//! `bestmove` reply. Starting and stopping the process belongs to the host.

use crate::capture::legal_move_apply::CommitOutcome;
use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceId, PieceKind};
use crate::moves::move_descriptions::{Move, MoveType};
use crate::utils::long_algebraic::{
    engine_move_to_long_algebraic, long_algebraic_to_engine_move, EngineMove,
};

pub const DEFAULT_ENGINE_DEPTH: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub depth: u8,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_ENGINE_DEPTH,
        }
    }
}

impl EngineOptions {
    pub fn set_option(&mut self, name: &str, value: &str) -> RulesResult<()> {
        if !name.eq_ignore_ascii_case("depth") {
            return Err(RulesError::InvalidOption(format!("unknown option {name}")));
        }
        self.depth = value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|depth| *depth > 0)
            .ok_or_else(|| RulesError::InvalidOption(format!("Depth {value}")))?;
        Ok(())
    }
}

pub fn position_command(board: &Board) -> String {
    format!("position fen {}", board.to_fen())
}

pub fn go_command(options: &EngineOptions) -> String {
    format!("go depth {}", options.depth)
}

/// Read a `bestmove` line. `Ok(None)` means the engine has no move.
///
/// A trailing `ponder <move>` is ignored.
pub fn parse_best_move_line(line: &str) -> RulesResult<Option<EngineMove>> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("bestmove") {
        return Err(RulesError::InvalidAlgebraic(line.trim().to_owned()));
    }

    match tokens.next() {
        None => Err(RulesError::InvalidAlgebraic(line.trim().to_owned())),
        Some("(none)") | Some("0000") => Ok(None),
        Some(text) => long_algebraic_to_engine_move(text).map(Some),
    }
}

impl Board {
    /// Map an engine move onto the board's own move representation.
    ///
    /// A king stepping two files is the engine's spelling of castling, which
    /// the board expresses as the rook moving onto its king.
    pub fn resolve_engine_move(&mut self, engine_move: &EngineMove) -> RulesResult<(PieceId, Move)> {
        let illegal = || {
            RulesError::InvalidAlgebraic(
                engine_move_to_long_algebraic(engine_move).unwrap_or_else(|_| {
                    format!("{} -> {}", engine_move.from, engine_move.to)
                }),
            )
        };

        let piece = self.piece_id_at(engine_move.from).ok_or_else(illegal)?;
        let (kind, color) = {
            let mover = self.piece(piece)?;
            (mover.kind(), mover.color())
        };
        if color != self.active_color() {
            return Err(illegal());
        }

        let file_step = engine_move.to.file - engine_move.from.file;
        if kind == PieceKind::King && engine_move.to.rank == engine_move.from.rank && file_step.abs() == 2 {
            for rook in self.get_pieces(color) {
                let rook_piece = self.piece(rook)?;
                if rook_piece.kind() != PieceKind::Rook
                    || rook_piece.coordinate().rank != engine_move.from.rank
                    || (rook_piece.coordinate().file - engine_move.from.file).signum() != file_step.signum()
                {
                    continue;
                }
                let moves = self.get_playable_moves(rook)?;
                if let Some(castle) = moves
                    .get(&Move::quiet(engine_move.from))
                    .filter(|mv| mv.move_type() == MoveType::Castle)
                {
                    return Ok((rook, *castle));
                }
            }
            return Err(illegal());
        }

        let moves = self.get_playable_moves(piece)?;
        moves
            .get(&Move::quiet(engine_move.to))
            .copied()
            .map(|mv| (piece, mv))
            .ok_or_else(illegal)
    }

    /// Parse, resolve and commit an engine move, completing a promotion with
    /// the requested piece (a Queen when none is given).
    pub fn play_engine_move(&mut self, text: &str) -> RulesResult<CommitOutcome> {
        let engine_move = long_algebraic_to_engine_move(text)?;
        let (piece, mv) = self.resolve_engine_move(&engine_move)?;
        let outcome = self.commit_move(piece, mv.coordinate())?;
        if outcome.promotion_pending {
            self.promote(engine_move.promotion.unwrap_or(PieceKind::Queen))?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, Coordinate};

    #[test]
    fn commands_carry_position_and_depth() {
        let board = Board::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        assert_eq!(
            position_command(&board),
            "position fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
        );

        let mut options = EngineOptions::default();
        assert_eq!(go_command(&options), "go depth 10");
        options.set_option("Depth", "4").expect("valid depth");
        assert_eq!(go_command(&options), "go depth 4");
        assert!(options.set_option("Depth", "0").is_err());
        assert!(options.set_option("Hash", "16").is_err());
    }

    #[test]
    fn best_move_lines_parse_into_coordinates() {
        let parsed = parse_best_move_line("bestmove e2e4 ponder e7e5")
            .expect("valid line")
            .expect("a move");
        assert_eq!(parsed.from, Coordinate::new(4, 1));
        assert_eq!(parsed.to, Coordinate::new(4, 3));
        assert_eq!(parsed.promotion, None);

        assert_eq!(parse_best_move_line("bestmove (none)"), Ok(None));
        assert_eq!(parse_best_move_line("bestmove 0000"), Ok(None));
        assert!(parse_best_move_line("info depth 3").is_err());
        assert!(parse_best_move_line("bestmove").is_err());
    }

    #[test]
    fn engine_castling_maps_to_the_rook_move() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("valid FEN");
        let king = board.get_king(Color::White).expect("white king");
        let rook = board.piece_id_at(Coordinate::new(7, 0)).expect("rook on h1");

        let outcome = board.play_engine_move("e1g1").expect("castle");
        assert_eq!(outcome.piece, rook);
        assert_eq!(outcome.castled_king, Some(king));
        assert_eq!(board.piece(king).expect("king").coordinate(), Coordinate::new(6, 0));
        assert_eq!(board.piece(rook).expect("rook").coordinate(), Coordinate::new(5, 0));
        assert_eq!(board.active_color(), Color::Black);
    }

    #[test]
    fn engine_promotion_choice_is_applied() {
        let mut board = Board::from_fen("k7/3P4/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        board.play_engine_move("d7d8n").expect("promotion");
        let knight = board
            .try_get_piece(Coordinate::new(3, 7))
            .expect("promoted piece");
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(board.pending_promotion(), None);
    }

    #[test]
    fn moves_the_board_does_not_allow_are_rejected() {
        let mut board = Board::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        assert!(matches!(
            board.play_engine_move("e2e5"),
            Err(RulesError::InvalidAlgebraic(_))
        ));
        assert!(matches!(
            board.play_engine_move("e3e4"),
            Err(RulesError::InvalidAlgebraic(_))
        ));
        assert!(matches!(
            board.play_engine_move("e1g1"),
            Err(RulesError::InvalidAlgebraic(_))
        ));
        assert_eq!(board.active_color(), Color::White);
    }

    #[test]
    fn engine_moves_must_belong_to_the_side_to_move() {
        let mut board = Board::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        let black_pawn = board.piece_id_at(Coordinate::new(4, 6)).expect("pawn on e7");
        assert!(matches!(
            board.play_engine_move("e7e5"),
            Err(RulesError::InvalidAlgebraic(_))
        ));
        assert_eq!(board.piece(black_pawn).expect("pawn").coordinate(), Coordinate::new(4, 6));
        assert_eq!(board.active_color(), Color::White);

        board.play_engine_move("e2e4").expect("white moves first");
        board.play_engine_move("e7e5").expect("black replies");
        assert_eq!(board.active_color(), Color::White);
    }
}
