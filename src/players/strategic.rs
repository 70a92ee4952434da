//! Single-ply greedy player.
//!
//! Scans cells in row-major order for an immediate win, then for a cell
//! the opponent would win on, and otherwise falls back to a random move.
//! It has no deeper lookahead and loses to forks.

use super::{Player, PlayerError, RandomPlayer};
use crate::games::tictactoe::{Board, Mark, Move};
use tracing::debug;

/// Win-or-block player.
#[derive(Debug, Clone)]
pub struct StrategicPlayer {
    fallback: RandomPlayer,
}

impl StrategicPlayer {
    /// Creates a strategic player; `seed` drives the random fallback.
    pub fn new(name: impl Into<String>, mark: Mark, seed: Option<u64>) -> Self {
        Self {
            fallback: RandomPlayer::new(name, mark, seed),
        }
    }
}

/// First cell, in row-major order, where `mark` completes a line.
pub fn winning_move(board: &mut Board, mark: Mark) -> Option<Move> {
    for mv in Move::ALL {
        if board.is_valid_move(mv.row(), mv.col())
            && board.make_temporary_move(mv, mark).check_winner(mark)
        {
            return Some(mv);
        }
    }
    None
}

impl Player for StrategicPlayer {
    fn mark(&self) -> Mark {
        self.fallback.mark()
    }

    fn name(&self) -> &str {
        self.fallback.name()
    }

    fn select_move(&mut self, board: &mut Board) -> Result<Move, PlayerError> {
        let mark = self.mark();

        if let Some(mv) = winning_move(board, mark) {
            debug!(player = %self.name(), %mv, "Taking win");
            return Ok(mv);
        }
        if let Some(mv) = winning_move(board, mark.opponent()) {
            debug!(player = %self.name(), %mv, "Blocking");
            return Ok(mv);
        }
        self.fallback.select_move(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_win() {
        let mut board = Board::from_rows(["O  ", "XX ", "O  "]);
        let mut player = StrategicPlayer::new("s", Mark::X, Some(3));
        assert_eq!(player.select_move(&mut board).unwrap(), Move::new(1, 2));
    }

    #[test]
    fn test_blocks() {
        let mut board = Board::from_rows(["XX ", " O ", "   "]);
        let mut player = StrategicPlayer::new("s", Mark::O, Some(3));
        assert_eq!(player.select_move(&mut board).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_win_before_block_even_when_block_comes_first() {
        // O could block at (0,2) but wins at (2,1).
        let mut board = Board::from_rows(["XX ", "X  ", "O O"]);
        let mut player = StrategicPlayer::new("s", Mark::O, Some(3));
        assert_eq!(player.select_move(&mut board).unwrap(), Move::new(2, 1));
    }

    #[test]
    fn test_probes_leave_board_unchanged() {
        let mut board = Board::from_rows(["X  ", " O ", "   "]);
        let before = board.clone();
        let mut player = StrategicPlayer::new("s", Mark::X, Some(9));
        let mv = player.select_move(&mut board).unwrap();
        assert!(board.is_valid_move(mv.row(), mv.col()));
        assert_eq!(board, before);
    }

    #[test]
    fn test_winning_move_none_when_absent() {
        let mut board = Board::from_rows(["X  ", "   ", "   "]);
        assert_eq!(winning_move(&mut board, Mark::X), None);
    }
}
