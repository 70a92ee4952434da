//! Human player that reads moves from a text stream.

use super::{Player, PlayerError};
use crate::games::tictactoe::{Board, Mark, Move, ParseError};
use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};
use tracing::{debug, instrument, warn};

/// Message shown when a parsed move is rejected by the board.
const INVALID_MOVE: &str = "Invalid move. The spot is taken or out of bounds. Try again.";

/// Source of typed input lines for a [`HumanPlayer`].
///
/// Returns the number of bytes read, zero at end of input.
pub trait LineSource {
    /// Appends the next line, including its terminator, to `buf`.
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Locks per line, so several players can share the console.
impl LineSource for Stdin {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn next_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.read_line(buf)
    }
}

/// Human player prompting on `output` and reading lines from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl HumanPlayer<Stdin, Stdout> {
    /// Creates a human player on the process console.
    pub fn stdio(name: impl Into<String>, mark: Mark) -> Self {
        Self::new(name, mark, io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary streams.
    pub fn new(name: impl Into<String>, mark: Mark, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
            output,
        }
    }

    /// Consumes the player, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Prompts until a valid move is entered.
    ///
    /// Malformed or undecodable lines and moves rejected by
    /// [`Board::is_valid_move`] are reported and re-prompted; only end of
    /// input or an I/O failure ends the call with an error.
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn select_move(&mut self, board: &mut Board) -> Result<Move, PlayerError> {
        loop {
            write!(
                self.output,
                "Player {}, enter row and column (0-2) separated by space: ",
                self.mark
            )?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.next_line(&mut line) {
                Ok(0) => {
                    warn!("Input closed while waiting for a move");
                    return Err(PlayerError::InputClosed);
                }
                Ok(_) => {}
                // The offending line has been consumed; ask again.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!(error = %e, "Undecodable input");
                    let e = ParseError { input: String::new() };
                    writeln!(self.output, "{e}")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            match line.parse::<Move>() {
                Ok(mv) if board.is_valid_move(mv.row(), mv.col()) => {
                    debug!(%mv, "Human move accepted");
                    return Ok(mv);
                }
                Ok(mv) => {
                    debug!(%mv, "Human move rejected");
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
                Err(e) => {
                    debug!(input = %e.input, "Unparseable input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}
