//! Pawn movement: forward pushes, diagonal captures and en passant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coordinate, Offset, PieceId, PieceKind};
use crate::game_state::piece::Piece;
use crate::moves::move_descriptions::{Move, MoveType};
use crate::moves::move_strategy::{CandidateMoves, MoveStrategy};

const WHITE_PAWN_MOVEMENT: [Offset; 1] = [(0, 1)];
const BLACK_PAWN_MOVEMENT: [Offset; 1] = [(0, -1)];

/// Single forward step for a pawn of `color`.
pub fn pawn_movement(color: Color) -> &'static [Offset] {
    match color {
        Color::White => &WHITE_PAWN_MOVEMENT,
        Color::Black => &BLACK_PAWN_MOVEMENT,
    }
}

/// True when a pawn of `color` on `from` attacks `target`, whatever stands
/// there.
#[inline]
pub fn pawn_attacks(color: Color, from: Coordinate, target: Coordinate) -> bool {
    target.rank == from.rank + color.forward() && (target.file - from.file).abs() == 1
}

/// Opposing pawn that `pawn` would take en passant by moving to `target`.
///
/// The last piece to move must be an opposing pawn that just double-stepped
/// onto the mover's rank one file away, and `target` must be the square
/// behind it in the mover's direction of travel.
pub fn en_passant_victim(board: &Board, pawn: &Piece, target: Coordinate) -> Option<PieceId> {
    let last_id = board.last_moved()?;
    let last = board.piece(last_id).ok()?;
    if !last.in_play() || last.kind() != PieceKind::Pawn || last.color() == pawn.color() {
        return None;
    }

    let landed = last.coordinate();
    if (last.previous_coordinate().rank - landed.rank).abs() != 2
        || landed.rank != pawn.coordinate().rank
        || (landed.file - pawn.coordinate().file).abs() != 1
    {
        return None;
    }

    let behind = Coordinate::new(landed.file, pawn.coordinate().rank + pawn.color().forward());
    (behind == target).then_some(last_id)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PawnMoveStrategy;

impl MoveStrategy for PawnMoveStrategy {
    fn candidate_moves(&self, board: &Board, piece: &Piece, movement: &[Offset]) -> CandidateMoves {
        let mut out = CandidateMoves::default();

        for &step in movement {
            let single = piece.coordinate() + step;
            if board.is_square_on_board(single) && !board.is_occupied(single) {
                out.moves.insert(Move::quiet(single));

                let double = single + step;
                if !piece.has_moved() && board.is_square_on_board(double) && !board.is_occupied(double) {
                    out.moves.insert(Move::quiet(double));
                }
            }

            for side in [-1, 1] {
                let target = single + (side, 0);
                if !board.is_square_on_board(target) {
                    continue;
                }

                match board.occupant(target) {
                    Some((_, occupant)) if occupant.color() == piece.color() => {}
                    Some((king, occupant)) if occupant.is_king() => {
                        out.checked_king = Some(king);
                        out.moves.insert(Move::new(target, true, MoveType::Check));
                    }
                    Some(_) => {
                        out.moves.insert(Move::new(target, false, MoveType::Capture));
                    }
                    None => {
                        if en_passant_victim(board, piece, target).is_some() {
                            out.moves.insert(Move::new(target, false, MoveType::EnPassant));
                        }
                    }
                }
            }
        }

        out
    }
}
