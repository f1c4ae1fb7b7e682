//! Attack queries and check-based legality filtering.
//!
//! Attack detection only ever expands raw geometric candidates, so none of
//! the functions here call back into legal move generation. The king's
//! self-check test and the optional revealed-check filter run as board
//! simulations on top of these queries.

use std::collections::BTreeSet;

use tracing::trace;

use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::LegalityPolicy;
use crate::game_state::chess_types::{Color, Coordinate, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::raw_candidate_moves;
use crate::moves::king_moves::is_adjacent;
use crate::moves::move_descriptions::{Move, MoveSet, MoveType};
use crate::moves::pawn_moves::{en_passant_victim, pawn_attacks};

/// True when `attacker` could move onto `square` if an enemy stood there.
pub fn attacks_square(board: &Board, attacker: &Piece, square: Coordinate) -> bool {
    match attacker.kind() {
        PieceKind::King => is_adjacent(attacker.coordinate(), square),
        PieceKind::Pawn => pawn_attacks(attacker.color(), attacker.coordinate(), square),
        _ => raw_candidate_moves(board, attacker)
            .moves
            .contains(&Move::quiet(square)),
    }
}

/// True when any piece of `defender`'s opponent, the opposing king
/// included, attacks `square`.
pub fn is_square_attacked_by_opponent(board: &Board, defender: Color, square: Coordinate) -> bool {
    board
        .pieces_in_play()
        .filter(|(_, piece)| piece.color() != defender)
        .any(|(_, piece)| attacks_square(board, piece, square))
}

/// Non-king pieces of the other color attacking `square`.
pub fn attackers_of(board: &Board, defender: Color, square: Coordinate) -> BTreeSet<PieceId> {
    board
        .pieces_in_play()
        .filter(|(_, piece)| piece.color() != defender && !piece.is_king())
        .filter(|(_, piece)| attacks_square(board, piece, square))
        .map(|(id, _)| id)
        .collect()
}

/// Pieces currently giving check to `color`'s king. Empty without a king.
pub fn checking_pieces(board: &Board, color: Color) -> BTreeSet<PieceId> {
    match board.find_king(color).and_then(|king| board.piece(king).ok()) {
        Some(king) => attackers_of(board, color, king.coordinate()),
        None => BTreeSet::new(),
    }
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    !checking_pieces(board, color).is_empty()
}

impl Board {
    /// Opponent non-king pieces whose candidates land on `king`'s square.
    pub fn get_attacking_pieces(&self, king: PieceId) -> RulesResult<BTreeSet<PieceId>> {
        let king = self.piece_in_play(king)?;
        Ok(attackers_of(self, king.color(), king.coordinate()))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Recompute every piece's `delivers_check` and both kings' `is_in_check`
    /// from the current position.
    pub fn refresh_check_state(&mut self) {
        let against_white = checking_pieces(self, Color::White);
        let against_black = checking_pieces(self, Color::Black);

        for (index, piece) in self.pieces.iter_mut().enumerate() {
            let id = PieceId(index);
            piece.delivers_check =
                piece.in_play && (against_white.contains(&id) || against_black.contains(&id));
            piece.is_in_check = piece.in_play
                && piece.kind == PieceKind::King
                && match piece.color {
                    Color::White => !against_white.is_empty(),
                    Color::Black => !against_black.is_empty(),
                };
        }

        trace!(
            white_checkers = against_white.len(),
            black_checkers = against_black.len(),
            "check state refreshed"
        );
    }

    /// Filter `candidates` of `piece` against its own king's safety.
    ///
    /// While the king is in check only moves that capture the single checking
    /// piece or block its line survive; a double check leaves nothing.
    /// Castling is never a response to check. With
    /// `LegalityPolicy::RejectRevealedChecks` every surviving move is also
    /// simulated and dropped if it leaves the king attacked.
    pub fn evaluate_move_legality(
        &mut self,
        candidates: MoveSet,
        piece: PieceId,
    ) -> RulesResult<MoveSet> {
        let color = self.piece_in_play(piece)?.color();
        let Some(king) = self.find_king(color) else {
            return Ok(candidates);
        };

        let checkers = checking_pieces(self, color);
        self.piece_mut(king)?.is_in_check = !checkers.is_empty();

        let responses = if checkers.is_empty() {
            candidates
        } else if checkers.len() > 1 {
            return Ok(MoveSet::new());
        } else {
            match checkers.first() {
                Some(&checker) => self.check_responses(candidates, piece, king, checker)?,
                None => candidates,
            }
        };

        if self.config.legality == LegalityPolicy::RejectRevealedChecks {
            let mut safe = MoveSet::new();
            for mv in responses {
                if !self.reveals_check(piece, mv)? {
                    safe.insert(mv);
                }
            }
            return Ok(safe);
        }

        Ok(responses)
    }

    fn check_responses(
        &self,
        candidates: MoveSet,
        mover: PieceId,
        king: PieceId,
        checker: PieceId,
    ) -> RulesResult<MoveSet> {
        let king_square = self.piece(king)?.coordinate();
        let checker_piece = self.piece_in_play(checker)?;
        let checker_square = checker_piece.coordinate();

        let blocking: BTreeSet<Coordinate> = raw_candidate_moves(self, checker_piece)
            .moves
            .iter()
            .filter(|mv| mv.delivers_check() && mv.coordinate() != king_square)
            .map(|mv| mv.coordinate())
            .collect();

        let mover = self.piece_in_play(mover)?;
        Ok(candidates
            .into_iter()
            .filter(|mv| match mv.move_type() {
                MoveType::Castle | MoveType::Check => false,
                MoveType::EnPassant => {
                    en_passant_victim(self, mover, mv.coordinate()) == Some(checker)
                        || blocking.contains(&mv.coordinate())
                }
                MoveType::Move | MoveType::Capture => {
                    mv.coordinate() == checker_square || blocking.contains(&mv.coordinate())
                }
            })
            .collect())
    }

    /// Simulate `mv` for `piece` and report whether its own king would be
    /// attacked afterwards. `Check` entries are not moves and never reveal.
    pub fn reveals_check(&mut self, piece: PieceId, mv: Move) -> RulesResult<bool> {
        let (color, from, victim) = {
            let mover = self.piece_in_play(piece)?;
            let victim = match mv.move_type() {
                MoveType::EnPassant => en_passant_victim(self, mover, mv.coordinate()),
                _ => self.piece_id_at(mv.coordinate()).filter(|&id| id != piece),
            };
            (mover.color(), mover.coordinate(), victim)
        };
        let Some(king) = self.find_king(color) else {
            return Ok(false);
        };

        match mv.move_type() {
            MoveType::Check => Ok(false),
            MoveType::Castle => {
                let king_origin = mv.coordinate();
                let toward_rook = (from.file - king_origin.file).signum();
                let king_crossing = king_origin + (toward_rook, 0);
                let king_final = king_origin + (2 * toward_rook, 0);
                trace!(rook = %piece, king = %king, "simulating castle");
                self.simulate(&[piece, king], |board| {
                    board.shift(king, king_crossing)?;
                    if is_square_attacked_by_opponent(board, color, king_crossing) {
                        return Ok(true);
                    }
                    // The rook comes to rest on the square the king crossed.
                    board.shift(king, king_final)?;
                    let rook_rest = king_crossing;
                    board.shift(piece, rook_rest)?;
                    Ok(is_square_attacked_by_opponent(board, color, king_final))
                })
            }
            MoveType::Move | MoveType::Capture | MoveType::EnPassant => {
                let mut touched = vec![piece];
                touched.extend(victim);
                trace!(piece = %piece, to = %mv.coordinate(), "simulating move");
                self.simulate(&touched, |board| {
                    if let Some(victim) = victim {
                        board.lift(victim)?;
                    }
                    board.shift(piece, mv.coordinate())?;
                    let king_square = board.piece(king)?.coordinate();
                    Ok(is_square_attacked_by_opponent(board, color, king_square))
                })
            }
        }
    }

    /// Whether `king` would stand attacked on `target`. The target's occupant
    /// is lifted and the king placed there for the test, then both are put
    /// back.
    pub(crate) fn move_attacked(&mut self, king: PieceId, target: Coordinate) -> RulesResult<bool> {
        let color = self.piece_in_play(king)?.color();
        let occupant = self.piece_id_at(target).filter(|&id| id != king);

        let mut touched = vec![king];
        touched.extend(occupant);
        self.simulate(&touched, |board| {
            if let Some(occupant) = occupant {
                board.lift(occupant)?;
            }
            board.shift(king, target)?;
            Ok(is_square_attacked_by_opponent(board, color, target))
        })
    }
}
