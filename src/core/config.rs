//! Game configuration types.
//!
//! Hosts configure a game by providing:
//! - `RulesConfig`: setup constants (opening budget, gauges, hand size, deck copies)
//! - `GameSetup`: per-game choices (seats, round limit, mode, seed)
//!
//! Both are plain data; the engine validates them when a game starts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;
use crate::metrics::Metrics;

/// Fewest seats a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most seats a game supports.
pub const MAX_PLAYERS: usize = 4;

/// Whether seats are driven by people or by the autoplay heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Every action comes from a person.
    #[default]
    Manual,
    /// Unattended demonstration driven by autoplay.
    Demo,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Manual => f.write_str("Manual"),
            GameMode::Demo => f.write_str("Demo"),
        }
    }
}

/// Setup constants shared by every game played with an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Budget each seat receives at the start of every round.
    pub initial_budget: u32,
    /// Opening gauges for every seat.
    pub initial_metrics: Metrics,
    /// Cards dealt at game start and after a hand refresh.
    pub initial_hand_size: usize,
    /// Budget spent to refresh a hand.
    pub refresh_cost: u32,
    /// How many times the event deck list is repeated.
    pub event_copies: usize,
    /// How many times the main deck list is repeated.
    pub main_copies: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_budget: 3,
            initial_metrics: Metrics::default(),
            initial_hand_size: 5,
            refresh_cost: 1,
            event_copies: 3,
            main_copies: 2,
        }
    }
}

/// Per-game choices made by the host.
///
/// ```
/// use esg_deck::core::{GameMode, GameSetup};
///
/// let setup = GameSetup::new(3, 5).mode(GameMode::Demo).seed(42);
/// assert!(setup.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub player_count: usize,
    pub max_rounds: u32,
    pub mode: GameMode,
    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameSetup {
    /// Manual game with an entropy seed.
    #[must_use]
    pub fn new(player_count: usize, max_rounds: u32) -> Self {
        Self {
            player_count,
            max_rounds,
            mode: GameMode::Manual,
            seed: None,
        }
    }

    /// Set the game mode (builder pattern).
    #[must_use]
    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the shuffle seed (builder pattern).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check seat count and round limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        Ok(())
    }
}

/// Reasons a game cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be 2-4, got {0}")]
    PlayerCount(usize),

    #[error("max rounds must be at least 1")]
    NoRounds,

    #[error("deck list names {0}, which is not in the catalog")]
    UnknownDeckCard(CardId),
}
