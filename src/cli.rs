//! Command-line interface for tictactoe_arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_arena::PlayerKind;

/// Tic-tac-toe against human and automated opponents
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Tic-tac-toe with random, strategic and minimax opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Seat selection shared by all commands
#[derive(clap::Args, Debug)]
pub struct Seats {
    /// Path to a TOML match configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Player for X (moves first)
    #[arg(long, value_enum)]
    pub x: Option<PlayerKind>,

    /// Player for O
    #[arg(long, value_enum)]
    pub o: Option<PlayerKind>,

    /// Seed for random choices, shared by both seats
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game on the console
    Play {
        /// Seat selection
        #[command(flatten)]
        seats: Seats,
    },

    /// Play a series of automated games and report the tally
    Simulate {
        /// Seat selection
        #[command(flatten)]
        seats: Seats,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
