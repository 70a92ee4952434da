//! Tic-tac-toe engine with automated opponents.
//!
//! The board is owned by the game loop and lent mutably to whichever player
//! is choosing a move. Automated players probe it with temporary moves that
//! undo themselves when their guard goes out of scope.
//!
//! # Architecture
//!
//! - **Games**: board state, moves and rules
//! - **Players**: human, random, strategic (win or block) and optimal (minimax)
//! - **Orchestrator**: turn loop alternating two players
//! - **Simulation**: tallies over series of automated games
//!
//! # Example
//!
//! ```
//! use tictactoe_arena::{Board, Mark, Move, OptimalPlayer, Player};
//!
//! let mut board = Board::new();
//! board.place_mark(0, 0, Mark::X)?;
//!
//! let mut opponent = OptimalPlayer::new("minimax", Mark::O);
//! assert_eq!(opponent.select_move(&mut board)?, Move::new(1, 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod orchestrator;
mod players;
mod simulation;
mod ui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Mark, Move, MoveError, ParseError, Square, TemporaryMove,
    rules,
};

// Crate-level exports - Players
pub use players::{
    Evaluation, HumanPlayer, LineSource, OptimalPlayer, Player, PlayerError, PlayerKind,
    RandomPlayer, SearchStats, StrategicPlayer, build_player,
};

// Crate-level exports - Orchestration and rendering
pub use orchestrator::{GameError, Orchestrator};
pub use ui::{ConsoleRenderer, Renderer, SilentRenderer};

// Crate-level exports - Configuration and simulation
pub use config::{ConfigError, MatchConfig, PlayerConfig};
pub use simulation::{MatchTally, SimulationError, simulate};
