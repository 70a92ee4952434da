//! Player that picks uniformly among legal moves.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark, Move};
use rand::{SeedableRng, rngs::SmallRng, seq::IndexedRandom};
use tracing::debug;

/// Random player.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: SmallRng,
}

impl RandomPlayer {
    /// Creates a random player, seeded for reproducible play when `seed` is set.
    pub fn new(name: impl Into<String>, mark: Mark, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }

    /// Picks a uniformly random valid move, or `None` on a full board.
    pub fn pick(&mut self, board: &Board) -> Option<Move> {
        board.valid_moves().choose(&mut self.rng).copied()
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &mut Board) -> Result<Move, PlayerError> {
        let mv = self.pick(board).ok_or(PlayerError::NoMoveFound)?;
        debug!(player = %self.name, %mv, "Random move");
        Ok(mv)
    }
}
