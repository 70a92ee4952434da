//! Win-or-block behaviour of the strategic player.

use tictactoe_arena::{
    Board, GameStatus, Mark, Move, OptimalPlayer, Orchestrator, Player, SilentRenderer,
    StrategicPlayer,
};

#[test]
fn test_takes_immediate_win_on_every_line() {
    for (rows, expected) in [
        (["OO ", "XX ", "   "], Move::new(0, 2)),
        (["O X", "O X", "   "], Move::new(2, 0)),
        (["O X", " O ", "X  "], Move::new(2, 2)),
        (["X O", " O ", " XX"], Move::new(2, 0)),
    ] {
        let mut board = Board::from_rows(rows);
        let mut player = StrategicPlayer::new("greedy", Mark::O, Some(1));
        assert_eq!(player.select_move(&mut board).unwrap(), expected, "{rows:?}");
    }
}

#[test]
fn test_blocks_when_it_cannot_win() {
    for (rows, expected) in [
        (["X  ", "X O", "   "], Move::new(2, 0)),
        (["O  ", " XX", "   "], Move::new(1, 0)),
        (["   ", "OX ", "  X"], Move::new(0, 0)),
    ] {
        let mut board = Board::from_rows(rows);
        let mut player = StrategicPlayer::new("greedy", Mark::O, Some(1));
        let mv = player.select_move(&mut board).unwrap();
        assert!(board.is_valid_move(mv.row(), mv.col()));
        assert_eq!(mv, expected, "{rows:?}");
    }
}

#[test]
fn test_random_fallback_is_legal_and_reproducible() {
    let board = Board::from_rows(["X  ", "   ", "   "]);
    let mut a = StrategicPlayer::new("a", Mark::O, Some(99));
    let mut b = StrategicPlayer::new("b", Mark::O, Some(99));
    for _ in 0..10 {
        let mv = a.select_move(&mut board.clone()).unwrap();
        assert!(board.is_valid_move(mv.row(), mv.col()));
        assert_eq!(mv, b.select_move(&mut board.clone()).unwrap());
    }
}

#[test]
fn test_never_beats_optimal() {
    for seed in 0..25 {
        let x = Box::new(StrategicPlayer::new("greedy", Mark::X, Some(seed)));
        let o = Box::new(OptimalPlayer::new("minimax", Mark::O));
        let mut orchestrator = Orchestrator::new(x, o).unwrap();
        let status = orchestrator.run(&mut SilentRenderer).unwrap();
        assert_ne!(status, GameStatus::Won(Mark::X));
    }
}
