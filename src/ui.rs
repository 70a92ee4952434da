//! Console rendering of games.
//!
//! Rendering is a pure read of the game: renderers never feed anything
//! back into the orchestrator.

use crate::games::tictactoe::{Board, GameStatus, Mark, Move, MoveError};
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Receives game progress from the [`Orchestrator`](crate::Orchestrator).
pub trait Renderer {
    /// Called once before the first move.
    fn welcome(&mut self) {}

    /// Shows the current board.
    fn board(&mut self, board: &Board);

    /// A player placed `mark` at `mv`.
    fn move_made(&mut self, _name: &str, _mark: Mark, _mv: Move) {}

    /// A move was rejected; the same player moves again.
    fn invalid_move(&mut self, error: &MoveError);

    /// The game has ended.
    fn game_over(&mut self, status: &GameStatus);
}

/// Text renderer for terminals and other writers.
#[derive(Debug)]
pub struct ConsoleRenderer<W> {
    out: W,
}

impl ConsoleRenderer<Stdout> {
    /// Renders to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renders to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(text).and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn welcome(&mut self) {
        self.emit(format_args!("Welcome to Tic-Tac-Toe!\n"));
    }

    fn board(&mut self, board: &Board) {
        self.emit(format_args!("{board}"));
    }

    fn move_made(&mut self, name: &str, mark: Mark, mv: Move) {
        self.emit(format_args!("{name} ({mark}) plays {mv}\n"));
    }

    fn invalid_move(&mut self, error: &MoveError) {
        self.emit(format_args!("{error}\n"));
    }

    fn game_over(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(mark) => self.emit(format_args!("Player {mark} wins!\n")),
            GameStatus::Draw => self.emit(format_args!("The game is a draw!\n")),
            GameStatus::InProgress => {}
        }
        self.emit(format_args!("Game Over. Thanks for playing!\n"));
    }
}

/// Renderer that discards everything, for simulated matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn board(&mut self, _board: &Board) {}

    fn invalid_move(&mut self, _error: &MoveError) {}

    fn game_over(&mut self, _status: &GameStatus) {}
}
