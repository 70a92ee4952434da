//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::rules;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use tracing::instrument;

/// A player's symbol, used both as cell content and as player identity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Symbol shown when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is mutated in place: permanently through [`Board::place_mark`],
/// and transiently by search through [`Board::make_temporary_move`], whose
/// guard restores the cell when it goes out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from rows of symbols (`'X'`, `'O'`, anything else is empty).
    ///
    /// Convenient for setting up positions in tests and replays.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().take(Self::SIZE).enumerate() {
                board.squares[row * Self::SIZE + col] = match symbol {
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    _ => Square::Empty,
                };
            }
        }
        board
    }

    /// Gets the square at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(self.squares[row * Self::SIZE + col])
        } else {
            None
        }
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// True iff `(row, col)` is on the board and empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Square::Empty)
    }

    /// Places `mark` permanently.
    ///
    /// Fails with [`MoveError::InvalidMove`] when the cell is occupied or out
    /// of bounds; the board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.is_valid_move(row, col) {
            return Err(MoveError::InvalidMove { row, col });
        }
        self.squares[row * Self::SIZE + col] = Square::Occupied(mark);
        Ok(())
    }

    /// Places `mark` at `mv` until the returned guard is dropped.
    ///
    /// Occupancy is not checked: callers probe only moves that passed
    /// [`Board::is_valid_move`]. Off-board coordinates would alias another
    /// cell, so debug builds assert them. Nested probes go through the guard,
    /// so undo order always mirrors placement order.
    pub fn make_temporary_move(&mut self, mv: Move, mark: Mark) -> TemporaryMove<'_> {
        debug_assert!(
            mv.row() < Self::SIZE && mv.col() < Self::SIZE,
            "temporary move {mv} is off the board"
        );
        self.squares[mv.index()] = Square::Occupied(mark);
        TemporaryMove { board: self, mv }
    }

    fn undo_move(&mut self, mv: Move) {
        self.squares[mv.index()] = Square::Empty;
    }

    /// True iff one of the eight lines is fully occupied by `mark`.
    pub fn check_winner(&self, mark: Mark) -> bool {
        rules::has_line(self, mark)
    }

    /// Returns the mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True iff no empty squares remain.
    ///
    /// A full board may also hold a winning line, so check winners first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of occupied squares (equals the number of moves made).
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// All valid moves in row-major order.
    pub fn valid_moves(&self) -> Vec<Move> {
        Move::ALL
            .iter()
            .copied()
            .filter(|mv| self.is_valid_move(mv.row(), mv.col()))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let horizontal = "+---".repeat(Self::SIZE) + "+";
        writeln!(f, "{horizontal}")?;
        for row in self.squares.chunks(Self::SIZE) {
            let cells: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, "| {} |", cells.join(" | "))?;
            writeln!(f, "{horizontal}")?;
        }
        Ok(())
    }
}

/// A mark placed by [`Board::make_temporary_move`], removed again on drop.
///
/// Derefs to the probed board so win checks and deeper probes can be run
/// against the hypothetical position.
#[derive(Debug)]
pub struct TemporaryMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl TemporaryMove<'_> {
    /// The probed move.
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Mutable access for nested probes.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut *self.board
    }

    /// Clears the probed cell now rather than at end of scope.
    pub fn undo(self) {}
}

impl Deref for TemporaryMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for TemporaryMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parses_case_insensitive() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("z".parse::<Mark>().is_err());
    }

    #[test]
    fn test_is_valid_move_bounds() {
        let board = Board::new();
        assert!(board.is_valid_move(0, 0));
        assert!(board.is_valid_move(2, 2));
        assert!(!board.is_valid_move(3, 0));
        assert!(!board.is_valid_move(0, 3));
    }

    #[test]
    fn test_place_mark_occupies() {
        let mut board = Board::new();
        board.place_mark(1, 1, Mark::X).unwrap();
        assert_eq!(board.get(1, 1), Some(Square::Occupied(Mark::X)));
        assert!(!board.is_valid_move(1, 1));
    }

    #[test]
    fn test_temporary_move_restores_on_drop() {
        let mut board = Board::from_rows(["X  ", " O ", "   "]);
        let before = board.clone();
        {
            let probe = board.make_temporary_move(Move::new(2, 2), Mark::X);
            assert_eq!(probe.get(2, 2), Some(Square::Occupied(Mark::X)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_probes_unwind() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let mut outer = board.make_temporary_move(Move::new(0, 0), Mark::X);
            let inner = outer.board_mut().make_temporary_move(Move::new(1, 1), Mark::O);
            assert_eq!(inner.occupied_count(), 2);
            inner.undo();
            assert_eq!(outer.occupied_count(), 1);
        }
        assert_eq!(board, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "off the board")]
    fn test_temporary_move_rejects_off_board_column() {
        let mut board = Board::new();
        // (1, 3) shares a row-major index with (2, 0).
        let _probe = board.make_temporary_move(Move::new(1, 3), Mark::X);
    }

    #[test]
    fn test_display_layout() {
        let board = Board::from_rows(["XO ", "   ", "  X"]);
        let expected = "\
+---+---+---+
| X | O |   |
+---+---+---+
|   |   |   |
+---+---+---+
|   |   | X |
+---+---+---+
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_valid_moves_row_major() {
        let board = Board::from_rows(["XOX", "O O", "XOX"]);
        assert_eq!(board.valid_moves(), vec![Move::new(1, 1)]);
    }
}
