//! Turn sequencing for a single tic-tac-toe game.

use super::action::{Move, MoveError};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single game: the board, whose turn it is, and what has been played.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, lent to the active player for one move selection.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `mv` for the side to move.
    ///
    /// The winner is checked before fullness, since the last move can both
    /// fill the board and complete a line.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        self.board.place_mark(mv.row(), mv.col(), mark)?;
        self.history.push(mv);

        if self.board.check_winner(mark) {
            self.status = GameStatus::Won(mark);
        } else if self.board.is_draw() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mark.opponent();
        }

        debug!(%mv, status = ?self.status, "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
