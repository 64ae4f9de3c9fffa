//! Game state: the root aggregate every transition consumes and produces.
//!
//! ## GameState
//!
//! - Round counter, phase and the seat whose turn it is
//! - Per-seat state (budget, gauges, hand)
//! - Event and main decks with their discards
//! - Audit log and seeded RNG
//! - Terminal fields `winner` / `end_reason`
//!
//! Transitions never mutate a state the caller holds; they clone and return
//! a successor. Sequences are `im` persistent structures, so the clone
//! shares almost all of its memory with its predecessor.

use serde::{Deserialize, Serialize};

use super::config::GameMode;
use super::log::GameLog;
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::GameRng;
use crate::cards::CardId;
use crate::metrics::Outcome;
use crate::zones::Decks;

/// The three-part round structure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// An event card hits every seat.
    #[default]
    Event,
    /// Seats act in order.
    Action,
    /// End-of-round penalties and end checks.
    Resolution,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Event => f.write_str("Event"),
            Phase::Action => f.write_str("Action"),
            Phase::Resolution => f.write_str("Resolution"),
        }
    }
}

/// Why a game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A seat's compliance collapsed. Names the first such seat found.
    ForcedLoss { player: PlayerId, name: String },
    /// The final round was resolved.
    MaxRoundsReached,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::ForcedLoss { name, .. } => {
                write!(f, "{name} compliance too low (<= 1); operations suspended")
            }
            EndReason::MaxRoundsReached => f.write_str("max rounds reached"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: String,
    pub ruleset_version: String,

    // === Game Progression ===
    /// Round number (starts at 1).
    pub round: u32,
    pub max_rounds: u32,
    pub phase: Phase,
    /// Seat currently acting.
    pub current_player: PlayerId,

    // === Seats and Cards ===
    pub players: PlayerMap<PlayerState>,
    pub decks: Decks,

    pub mode: GameMode,
    pub log: GameLog,

    // === Terminal ===
    /// `None` while the game is running.
    pub winner: Option<Outcome>,
    pub end_reason: Option<EndReason>,

    /// Shuffle source.
    pub rng: GameRng,
}

impl GameState {
    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Seed the shuffles were drawn from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether a winner has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Get a seat's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&PlayerState> {
        self.players.get(player)
    }

    /// State of the seat currently acting.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Whether the acting seat is the last one in the round.
    #[must_use]
    pub fn is_last_player(&self) -> bool {
        self.current_player.index() + 1 >= self.player_count()
    }

    /// Count copies of `card` across both decks, both discards and every hand.
    ///
    /// Constant over the life of a game.
    #[must_use]
    pub fn card_count(&self, card: &CardId) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| {
                p.hand.iter().filter(|c| *c == card).count()
                    + p.discard.iter().filter(|c| *c == card).count()
            })
            .sum();
        held + self.decks.count(card)
    }
}
