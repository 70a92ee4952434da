//! Tic-tac-toe board, moves and rules.

pub mod action;
pub mod game;
pub mod rules;
pub mod types;

pub use action::{Move, MoveError, ParseError};
pub use game::{Game, GameStatus};
pub use types::{Board, Mark, Square, TemporaryMove};
