//! Append-only audit trail of every state change.
//!
//! Entries are never edited or removed. Each one is stamped with a
//! sequence number at append time; the sequence is the log's clock, so a
//! replayed game produces an identical log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameMode;
use super::player::PlayerId;
use super::state::{EndReason, Phase};
use crate::cards::CardId;
use crate::metrics::{Metric, Outcome};

/// Who caused a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    System,
    Player(PlayerId),
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::System => f.write_str("System"),
            Actor::Player(p) => write!(f, "{p}"),
        }
    }
}

/// What kind of thing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogAction {
    GameStarted,
    EventDrawn,
    CardPlayed,
    HandRefreshed,
    EffectApplied,
    RuleTriggered,
    NewRound,
    ControlTaken,
    GameEnded,
}

/// End-of-round penalty rules, tagged on the changes they cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionRule {
    /// Cost at or above the threshold costs a point of Reputation.
    #[serde(rename = "R-RES-01")]
    CostDragsReputation,
    /// Risk at or above the threshold costs a point of Compliance.
    #[serde(rename = "R-RES-02")]
    RiskDragsCompliance,
}

impl ResolutionRule {
    /// Rule tag shown in the audit trail.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            ResolutionRule::CostDragsReputation => "R-RES-01",
            ResolutionRule::RiskDragsCompliance => "R-RES-02",
        }
    }
}

/// A value a change can touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Metric(Metric),
    Budget,
}

/// One before/after pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: Field,
    pub before: i64,
    pub after: i64,
    /// Set when a resolution rule caused the change.
    pub rule: Option<ResolutionRule>,
}

impl FieldChange {
    #[must_use]
    pub fn new(field: Field, before: impl Into<i64>, after: impl Into<i64>) -> Self {
        Self {
            field,
            before: before.into(),
            after: after.into(),
            rule: None,
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ResolutionRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Whether the value actually moved.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.before != self.after
    }
}

/// Action-specific payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDetail {
    #[default]
    None,
    Setup {
        player_count: usize,
        max_rounds: u32,
        mode: GameMode,
    },
    Event {
        name: String,
    },
    Cost(u32),
    Changes(Vec<FieldChange>),
    Result {
        outcome: Outcome,
        reason: EndReason,
    },
}

/// A single audit record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the log; doubles as the logical timestamp.
    pub seq: u64,
    pub round: u32,
    pub phase: Phase,
    pub actor: Actor,
    pub action: LogAction,
    pub card: Option<CardId>,
    pub detail: LogDetail,
}

impl LogEntry {
    /// Create an entry. The sequence number is assigned on append.
    #[must_use]
    pub fn new(round: u32, phase: Phase, actor: Actor, action: LogAction) -> Self {
        Self {
            seq: 0,
            round,
            phase,
            actor,
            action,
            card: None,
            detail: LogDetail::None,
        }
    }

    #[must_use]
    pub fn with_card(mut self, card: CardId) -> Self {
        self.card = Some(card);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: LogDetail) -> Self {
        self.detail = detail;
        self
    }
}

/// Ordered, append-only list of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameLog {
    entries: Vector<LogEntry>,
}

impl GameLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, stamping its sequence number.
    pub fn push(&mut self, mut entry: LogEntry) {
        entry.seq = self.entries.len() as u64;
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Entries with a given action label.
    pub fn with_action(&self, action: LogAction) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.action == action)
    }
}
