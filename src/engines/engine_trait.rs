//! Opponent abstraction.
//!
//! An engine looks at the board and names one move for the side to move.
//! Engines may query legal moves but leave the position unchanged.

use crate::errors::RulesResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceId;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub piece: PieceId,
    pub mv: Move,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, _name: &str, _value: &str) -> RulesResult<()> {
        Ok(())
    }

    /// `Ok(None)` when the side to move has nothing to play.
    fn choose_move(&mut self, board: &mut Board) -> RulesResult<Option<ChosenMove>>;
}
