//! Game orchestration between players.

use crate::games::tictactoe::{Game, GameStatus, Mark, MoveError};
use crate::players::{Player, PlayerError};
use crate::ui::Renderer;
use tracing::{debug, info, instrument, warn};

/// Error that aborts a game.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A player could not produce a move.
    #[display("Player error: {_0}")]
    #[from]
    Player(PlayerError),

    /// A move was refused for a reason other than an occupied cell.
    #[display("Move error: {_0}")]
    #[from]
    Move(MoveError),

    /// A player was seated on the wrong side.
    #[display("Player for {expected} plays {found}")]
    MarkMismatch {
        /// Mark of the seat.
        expected: Mark,
        /// Mark the player places.
        found: Mark,
    },
}

/// Runs a game between two players, X moving first.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Seats `player_x` and `player_o`; each must place the matching mark.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Result<Self, GameError> {
        for (expected, player) in [(Mark::X, &player_x), (Mark::O, &player_o)] {
            if player.mark() != expected {
                return Err(GameError::MarkMismatch {
                    expected,
                    found: player.mark(),
                });
            }
        }
        Ok(Self {
            game: Game::new(),
            player_x,
            player_o,
        })
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Starts over with an empty board.
    pub fn restart(&mut self) {
        self.game = Game::new();
    }

    /// Plays until the game is decided.
    ///
    /// Rejected moves are reported through `renderer` and the same player is
    /// asked again. Player failures end the game with an error.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<GameStatus, GameError> {
        info!("Starting game");
        renderer.welcome();

        while !self.game.status().is_over() {
            renderer.board(self.game.board());

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let mv = player.select_move(self.game.board_mut())?;

            match self.game.play(mv) {
                Ok(_) => renderer.move_made(player.name(), mark, mv),
                Err(e @ MoveError::InvalidMove { .. }) => {
                    warn!(player = %player.name(), %mv, "Move rejected");
                    renderer.invalid_move(&e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let status = self.game.status();
        info!(?status, moves = self.game.history().len(), "Game over");
        renderer.board(self.game.board());
        renderer.game_over(&status);
        Ok(status)
    }
}
