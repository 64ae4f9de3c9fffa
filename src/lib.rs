//! # esg-deck
//!
//! Game-state engine for a turn-based sustainability card game. Two to four
//! airlines juggle five gauges (carbon, cost, compliance, reputation, risk)
//! over a fixed number of rounds by playing cards from shared decks.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: every transition borrows a `GameState` and returns
//!    a new one. Nothing the caller holds is ever mutated.
//!
//! 2. **Injected Catalog**: card definitions live in a `CardCatalog` handed to
//!    the `Engine`; there is no global card table.
//!
//! 3. **Deterministic Replay**: all shuffles draw from a seeded RNG carried in
//!    the state, so a seed plus a move list reproduces a game exactly.
//!
//! ## Round Structure
//!
//! - **Event**: the system draws an event that hits every seat
//! - **Action**: seats take turns playing cards, refreshing, or passing
//! - **Resolution**: threshold penalties, end checks, next round
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, piles and the log are `im`
//!   vectors, so the copy made per transition shares memory with its parent.
//!
//! - **Audit Log**: every state change appends an entry with before/after
//!   values; the sequence number is the clock.
//!
//! ## Modules
//!
//! - `core`: players, state, configuration, RNG, audit log
//! - `metrics`: gauges, scoring, winner determination
//! - `cards`: card definitions and the catalog
//! - `zones`: draw piles with reshuffle-on-empty
//! - `effects`: effect kinds and the resolver
//! - `rules`: the `Engine` and its transitions
//! - `autoplay`: move heuristic and demo driver

pub mod core;
pub mod metrics;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod autoplay;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, PlayerState,
    GameRng, GameRngState,
    GameMode, GameSetup, RulesConfig, ConfigError,
    Actor, GameLog, LogAction, LogDetail, LogEntry,
    EndReason, GameState, Phase,
};

pub use crate::metrics::{calculate_score, determine_winner, Metric, Metrics, Outcome};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, CardType, DeckLists};

pub use crate::zones::{Decks, Pile};

pub use crate::effects::{apply_effect, Effect, EffectKind, EffectResolver, Target};

pub use crate::rules::{ActionError, Engine};

pub use crate::autoplay::{get_auto_move, AutoMove, AutoplayPolicy, DemoDriver, FirstAffordable};
