//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board can still hold a winning line, so callers check winners
/// before treating fullness as a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows(["XOX", "OXO", "OX "]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(check_winner(&board).is_some());
    }
}
