//! First-class move types for tic-tac-toe.
//!
//! A move is a `(row, col)` pair. Moves carry no mark: the same cell is
//! probed with either mark during search.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A cell on the board, addressed as `(row, col)` with both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 1),
        Move::new(1, 2),
        Move::new(2, 0),
        Move::new(2, 1),
        Move::new(2, 2),
    ];

    /// Creates a move. Coordinates are not checked; see [`Move::try_new`].
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move if both coordinates are on the board.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major board index (0-8).
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a move from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses human input of the form `"row col"`.
///
/// Only the shape is checked here. Coordinates outside the board parse
/// successfully and are rejected later by [`super::Board::is_valid_move`].
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [row, col] = parts.as_slice() else {
            return Err(ParseError::new(s));
        };
        let row = row.parse::<usize>().map_err(|_| ParseError::new(s))?;
        let col = col.parse::<usize>().map_err(|_| ParseError::new(s))?;
        Ok(Move::new(row, col))
    }
}

/// Error raised when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell is occupied or outside the board.
    #[display("Invalid move: ({row}, {col}) is taken or out of bounds.")]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,
}

/// Malformed textual move input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid input. Please enter two numbers separated by space.")]
pub struct ParseError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), index);
            assert_eq!(Move::from_index(index), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Move::try_new(2, 2), Some(Move::new(2, 2)));
        assert_eq!(Move::try_new(3, 0), None);
    }

    #[test]
    fn test_parse_two_numbers() {
        assert_eq!("1 2".parse::<Move>(), Ok(Move::new(1, 2)));
        assert_eq!("  0   0 \n".parse::<Move>(), Ok(Move::new(0, 0)));
    }

    #[test]
    fn test_parse_out_of_range_is_not_a_parse_error() {
        assert_eq!("5 7".parse::<Move>(), Ok(Move::new(5, 7)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1 2 3".parse::<Move>().is_err());
        assert!("a b".parse::<Move>().is_err());
        assert!("-1 0".parse::<Move>().is_err());
    }

    #[test]
    fn test_invalid_move_message() {
        let err = MoveError::InvalidMove { row: 0, col: 1 };
        assert_eq!(
            err.to_string(),
            "Invalid move: (0, 1) is taken or out of bounds."
        );
    }
}
