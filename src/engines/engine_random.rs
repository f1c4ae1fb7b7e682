//! Uniform random opponent.
//!
//! Picks any playable move of the side to move with equal probability. Used
//! as a fallback bot when no external engine is available.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{ChosenMove, Engine};
use crate::errors::{RulesError, RulesResult};
use crate::game_state::board::Board;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> RulesResult<()> {
        if !name.eq_ignore_ascii_case("seed") {
            return Ok(());
        }
        let seed = value
            .trim()
            .parse::<u64>()
            .map_err(|_| RulesError::InvalidOption(format!("Seed {value}")))?;
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }

    fn choose_move(&mut self, board: &mut Board) -> RulesResult<Option<ChosenMove>> {
        let color = board.active_color();
        let candidates: Vec<ChosenMove> = board
            .legal_moves_for(color)?
            .into_iter()
            .flat_map(|(piece, moves)| moves.into_iter().map(move |mv| ChosenMove { piece, mv }))
            .collect();

        Ok(candidates.as_slice().choose(&mut self.rng).copied())
    }
}
