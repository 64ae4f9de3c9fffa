//! Final scoring and winner determination.

use serde::{Deserialize, Serialize};

use super::gauge::{Metrics, METRIC_MAX};
use crate::core::{PlayerId, PlayerState};

/// Compliance below this costs `COMPLIANCE_PENALTY` points.
pub const COMPLIANCE_PENALTY_THRESHOLD: i32 = 5;

/// Points deducted for weak compliance.
pub const COMPLIANCE_PENALTY: i32 = 5;

/// A player at or below this compliance is forced out and can never win.
pub const FORCED_LOSS_COMPLIANCE: i32 = 1;

/// Score a set of gauges.
///
/// `2·Compliance + 2·Reputation + (10 − Carbon) + (10 − Risk) − Cost`,
/// minus `COMPLIANCE_PENALTY` when Compliance is below the threshold.
///
/// ```
/// use esg_deck::metrics::{calculate_score, Metrics};
///
/// assert_eq!(calculate_score(&Metrics::default()), 16);
/// ```
#[must_use]
pub fn calculate_score(metrics: &Metrics) -> i32 {
    let mut score = 2 * metrics.compliance
        + 2 * metrics.reputation
        + (METRIC_MAX - metrics.carbon)
        + (METRIC_MAX - metrics.risk)
        - metrics.cost;

    if metrics.compliance < COMPLIANCE_PENALTY_THRESHOLD {
        score -= COMPLIANCE_PENALTY;
    }

    score
}

/// Whether a player has been forced out by low compliance.
#[must_use]
pub fn is_forced_out(metrics: &Metrics) -> bool {
    metrics.compliance <= FORCED_LOSS_COMPLIANCE
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody won outright.
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{p}"),
            Outcome::Draw => f.write_str("DRAW"),
        }
    }
}

/// Pick the winner among players still eligible to win.
///
/// Players forced out by compliance are skipped entirely. The highest score
/// leads; an equal score is settled against the current leader by higher
/// Compliance, then higher Reputation, and a full tie becomes a draw.
///
/// Ties are settled pairwise in player order against whoever currently
/// leads. Once a tie has produced a draw there is no leader left to compare
/// against, so a later player on the same score keeps the draw; only a
/// strictly higher score replaces it.
pub fn determine_winner<'a>(players: impl IntoIterator<Item = &'a PlayerState>) -> Outcome {
    let mut best_score = i32::MIN;
    let mut leader: Option<&PlayerState> = None;

    for player in players {
        if is_forced_out(&player.metrics) {
            continue;
        }

        let score = calculate_score(&player.metrics);
        if score > best_score {
            best_score = score;
            leader = Some(player);
            continue;
        }
        if score < best_score {
            continue;
        }

        // Equal score: settle against the sitting leader, if any.
        let Some(current) = leader else {
            continue;
        };
        let challenger = (player.metrics.compliance, player.metrics.reputation);
        let holder = (current.metrics.compliance, current.metrics.reputation);
        if challenger > holder {
            leader = Some(player);
        } else if challenger == holder {
            leader = None;
        }
    }

    match leader {
        Some(player) => Outcome::Winner(player.id),
        None => Outcome::Draw,
    }
}
