//! Player trait and implementations.
//!
//! A player is lent the board for the duration of one move selection and
//! must hand it back in the shape it received it.

mod human;
mod optimal;
mod random;
mod strategic;

pub use human::{HumanPlayer, LineSource};
pub use optimal::{Evaluation, OptimalPlayer, SearchStats};
pub use random::RandomPlayer;
pub use strategic::StrategicPlayer;

use crate::games::tictactoe::{Board, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for players that can make moves.
pub trait Player {
    /// The mark this player places.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Chooses a currently valid move.
    ///
    /// Implementations may probe the board with temporary moves but leave
    /// it unchanged once they return.
    fn select_move(&mut self, board: &mut Board) -> Result<Move, PlayerError>;
}

/// The available player variants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Win if possible, else block, else random.
    Strategic,
    /// Exhaustive minimax with alpha-beta pruning.
    Optimal,
}

impl PlayerKind {
    /// True for variants that choose moves without a person at the console.
    pub fn is_automated(self) -> bool {
        !matches!(self, PlayerKind::Human)
    }
}

/// Error that ends a player's move selection.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayerError {
    /// No legal move exists; move selection was requested on a finished board.
    #[display("No valid move found.")]
    NoMoveFound,

    /// The input stream ended before a move was entered.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Prompting or reading failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Builds a boxed player of `kind` for `mark`.
///
/// Human players talk to stdin/stdout. `seed` makes random choices
/// reproducible and is ignored by deterministic variants.
#[instrument]
pub fn build_player(
    kind: PlayerKind,
    mark: Mark,
    name: Option<String>,
    seed: Option<u64>,
) -> Box<dyn Player> {
    let name = name.unwrap_or_else(|| format!("{kind} {mark}"));
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::stdio(name, mark)),
        PlayerKind::Random => Box::new(RandomPlayer::new(name, mark, seed)),
        PlayerKind::Strategic => Box::new(StrategicPlayer::new(name, mark, seed)),
        PlayerKind::Optimal => Box::new(OptimalPlayer::new(name, mark)),
    }
}
