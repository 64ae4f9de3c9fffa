//! Core engine types: players, state, configuration, RNG, audit log.
//!
//! These are the building blocks every other module works on. Rules live
//! in `rules`; this module only describes what a game looks like.

pub mod config;
pub mod log;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{ConfigError, GameMode, GameSetup, RulesConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use self::log::{
    Actor, Field, FieldChange, GameLog, LogAction, LogDetail, LogEntry, ResolutionRule,
};
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::{EndReason, GameState, Phase};
