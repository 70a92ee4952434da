//! Tic-tac-toe arena - console game and simulator.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Seats};
use tictactoe_arena::{ConsoleRenderer, GameStatus, Mark, MatchConfig, Orchestrator, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { seats } => run_game(seats),
        Command::Simulate { seats, games, json } => run_simulation(seats, games, json),
    }
}

/// Resolves the file configuration and command-line overrides.
#[instrument]
fn load_config(seats: Seats) -> Result<MatchConfig> {
    let config = match &seats.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => MatchConfig::default(),
    };
    Ok(config.with_overrides(seats.x, seats.o, seats.seed))
}

/// Plays one game on the console.
#[instrument]
fn run_game(seats: Seats) -> Result<()> {
    let config = load_config(seats)?;
    let player_x = config.x().build(Mark::X, 0);
    let player_o = config.o().build(Mark::O, 0);

    let mut orchestrator = Orchestrator::new(player_x, player_o)?;
    let mut renderer = ConsoleRenderer::stdout();
    let status: GameStatus = orchestrator.run(&mut renderer)?;

    info!(?status, "Game finished");
    Ok(())
}

/// Plays a series of automated games and prints the tally.
#[instrument]
fn run_simulation(seats: Seats, games: u32, json: bool) -> Result<()> {
    let config = load_config(seats)?;
    let tally = simulate(&config, games)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{tally}");
    }
    Ok(())
}
