//! Tests for simulated series.

use tictactoe_arena::{Mark, MatchConfig, PlayerConfig, PlayerKind, SimulationError, simulate};

fn config(x: PlayerKind, o: PlayerKind) -> MatchConfig {
    MatchConfig::new(
        PlayerConfig::new(x).with_seed(11),
        PlayerConfig::new(o).with_seed(12),
    )
}

#[test]
fn test_optimal_pair_always_draws() {
    let tally = simulate(&config(PlayerKind::Optimal, PlayerKind::Optimal), 3).unwrap();
    assert_eq!(*tally.games(), 3);
    assert_eq!(*tally.draws(), 3);
}

#[test]
fn test_optimal_never_loses_series() {
    let tally = simulate(&config(PlayerKind::Random, PlayerKind::Optimal), 40).unwrap();
    assert_eq!(tally.wins(Mark::X), 0);
    assert_eq!(*tally.games(), 40);
    assert!(tally.wins(Mark::O) > 0);

    let tally = simulate(&config(PlayerKind::Optimal, PlayerKind::Strategic), 40).unwrap();
    assert_eq!(tally.wins(Mark::O), 0);
}

#[test]
fn test_counts_add_up() {
    let tally = simulate(&config(PlayerKind::Random, PlayerKind::Random), 50).unwrap();
    assert_eq!(tally.x_wins() + tally.o_wins() + tally.draws(), 50);
}

#[test]
fn test_tally_serializes_to_json() {
    let tally = simulate(&config(PlayerKind::Optimal, PlayerKind::Optimal), 1).unwrap();
    let json = serde_json::to_value(tally).unwrap();
    assert_eq!(json["games"], 1);
    assert_eq!(json["draws"], 1);
    assert_eq!(json["x_wins"], 0);
}

#[test]
fn test_human_seat_rejected() {
    let result = simulate(&config(PlayerKind::Optimal, PlayerKind::Human), 1);
    assert!(matches!(result, Err(SimulationError::HumanPlayer(Mark::O))));
}

#[test]
fn test_zero_games() {
    let tally = simulate(&config(PlayerKind::Random, PlayerKind::Random), 0).unwrap();
    assert_eq!(*tally.games(), 0);
}
