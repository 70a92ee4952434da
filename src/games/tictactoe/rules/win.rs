//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Move, Square};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
    [Move::new(1, 0), Move::new(1, 1), Move::new(1, 2)],
    [Move::new(2, 0), Move::new(2, 1), Move::new(2, 2)],
    // Columns
    [Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)],
    [Move::new(0, 1), Move::new(1, 1), Move::new(2, 1)],
    [Move::new(0, 2), Move::new(1, 2), Move::new(2, 2)],
    // Diagonals
    [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
    [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
];

/// True iff some line is fully occupied by `mark`.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let squares = board.squares();
    LINES.iter().any(|line| {
        line.iter()
            .all(|mv| squares[mv.index()] == Square::Occupied(mark))
    })
}

/// Returns the owner of the first completed line, scanning in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        let sq = squares[a.index()];
        if let Square::Occupied(mark) = sq
            && sq == squares[b.index()]
            && sq == squares[c.index()]
        {
            return Some(mark);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows(["XXX", "OO ", "   "]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows(["XO ", "XO ", " O "]);
        assert!(has_line(&board, Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows(["XXO", " O ", "OX "]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows(["XX ", "O O", "   "]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows(["XOX", "   ", "   "]);
        assert!(!has_line(&board, Mark::X));
        assert!(!has_line(&board, Mark::O));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for mv in line {
                board.place_mark(mv.row(), mv.col(), Mark::O).unwrap();
            }
            assert!(has_line(&board, Mark::O), "line {line:?} not detected");
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }
}
