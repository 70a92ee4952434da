//! Series of automated games.

use crate::config::MatchConfig;
use crate::games::tictactoe::{GameStatus, Mark};
use crate::orchestrator::{GameError, Orchestrator};
use crate::ui::SilentRenderer;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a simulated series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct MatchTally {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl MatchTally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }

    /// Games won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for MatchTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Error from a simulated series.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SimulationError {
    /// Simulations need no console input.
    #[display("Player {_0} is human; simulations need automated players")]
    HumanPlayer(#[error(not(source))] Mark),

    /// A game could not be completed.
    #[display("Game failed: {_0}")]
    #[from]
    Game(GameError),
}

/// Plays `games` games with fresh boards and tallies the outcomes.
///
/// Seeds advance by the game index, so each game differs and the series
/// repeats exactly when run again with the same configuration.
#[instrument(skip(config), fields(x = %config.x().kind(), o = %config.o().kind()))]
pub fn simulate(config: &MatchConfig, games: u32) -> Result<MatchTally, SimulationError> {
    for mark in [Mark::X, Mark::O] {
        if !config.seat(mark).kind().is_automated() {
            return Err(SimulationError::HumanPlayer(mark));
        }
    }

    let mut tally = MatchTally::default();
    for index in 0..games {
        let offset = u64::from(index);
        let player_x = config.x().build(Mark::X, offset);
        let player_o = config.o().build(Mark::O, offset);
        let mut orchestrator = Orchestrator::new(player_x, player_o)?;
        let status = orchestrator.run(&mut SilentRenderer)?;
        debug!(game = index, ?status, "Simulated game finished");
        tally.record(status);
    }

    info!(%tally, "Simulation finished");
    Ok(tally)
}
