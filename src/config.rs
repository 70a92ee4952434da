//! Match configuration loaded from TOML.
//!
//! ```toml
//! [x]
//! kind = "human"
//! name = "Alice"
//!
//! [o]
//! kind = "strategic"
//! seed = 42
//! ```

use crate::games::tictactoe::Mark;
use crate::players::{Player, PlayerKind, build_player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player variant.
    kind: PlayerKind,

    /// Display name; derived from kind and mark when absent.
    #[serde(default)]
    name: Option<String>,

    /// Seed for random choices; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl PlayerConfig {
    /// Creates a seat configuration for `kind` with default name and no seed.
    pub fn new(kind: PlayerKind) -> Self {
        Self {
            kind,
            name: None,
            seed: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the player variant.
    pub fn with_kind(mut self, kind: PlayerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builds the configured player for `mark`, offsetting the seed by `offset`.
    ///
    /// Simulations pass the game index so every game of a series differs
    /// while the series as a whole stays reproducible.
    pub fn build(&self, mark: Mark, offset: u64) -> Box<dyn Player> {
        let seed = self.seed.map(|seed| seat_seed(seed, mark, offset));
        build_player(self.kind, mark, self.name.clone(), seed)
    }
}

/// Seed handed to the player in `mark`'s seat for game `offset`.
///
/// X draws from even seeds and O from odd ones, so no game offset can make
/// one seat replay the other's random sequence.
fn seat_seed(seed: u64, mark: Mark, offset: u64) -> u64 {
    let lane = match mark {
        Mark::X => 0,
        Mark::O => 1,
    };
    seed.wrapping_add(offset).wrapping_mul(2).wrapping_add(lane)
}

#[instrument]
fn default_x() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Human)
}

#[instrument]
fn default_o() -> PlayerConfig {
    PlayerConfig::new(PlayerKind::Optimal)
}

/// Seats for both marks.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Player moving first.
    #[serde(default = "default_x")]
    x: PlayerConfig,

    /// Player moving second.
    #[serde(default = "default_o")]
    o: PlayerConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration from two seats.
    pub fn new(x: PlayerConfig, o: PlayerConfig) -> Self {
        Self { x, o }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(x = %config.x.kind, o = %config.o.kind, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides.
    ///
    /// A shared `seed` is set on both seats; [`PlayerConfig::build`] keeps
    /// their random sequences apart.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        x: Option<PlayerKind>,
        o: Option<PlayerKind>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(kind) = x {
            self.x = self.x.with_kind(kind);
        }
        if let Some(kind) = o {
            self.o = self.o.with_kind(kind);
        }
        if let Some(seed) = seed {
            self.x = self.x.with_seed(seed);
            self.o = self.o.with_seed(seed);
        }
        self
    }

    /// Seat configuration for `mark`.
    pub fn seat(&self, mark: Mark) -> &PlayerConfig {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
