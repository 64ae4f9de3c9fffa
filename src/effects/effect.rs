//! Effect definitions.
//!
//! Effects are the atomic changes a card makes when it resolves. Each one
//! pairs a kind (what changes) with a target scope (who it changes).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::metrics::Metric;

/// Which seats an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// The seat that played the card.
    #[serde(rename = "Self")]
    Self_,
    /// Every seat, in seat order.
    All,
    /// A named seat.
    ///
    /// Currently resolves to the acting seat rather than the named one.
    Player(PlayerId),
}

/// What an effect does to each targeted seat.
///
/// ## Implemented
///
/// - `ModifyMetric`: shift one gauge, clamped to its range
/// - `ModifyBudget`: shift the budget, floored at zero
///
/// ## Reserved
///
/// `Draw`, `DiscardRandom`, `AddFlag` and `RemoveFlag` can be declared on a
/// card but resolve as no-ops. No stock card uses them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    ModifyMetric { metric: Metric, delta: i32 },
    ModifyBudget { delta: i32 },

    // === Reserved ===
    Draw { count: usize },
    DiscardRandom { count: usize },
    AddFlag { flag: String },
    RemoveFlag { flag: String },
}

impl EffectKind {
    /// Whether resolving this kind can change state.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        !matches!(
            self,
            EffectKind::ModifyMetric { .. } | EffectKind::ModifyBudget { .. }
        )
    }
}

/// A single effect on a card.
///
/// ```
/// use esg_deck::effects::{Effect, EffectKind, Target};
/// use esg_deck::metrics::Metric;
///
/// let tax = Effect::metric(Target::All, Metric::Cost, 1);
/// assert_eq!(tax.kind, EffectKind::ModifyMetric { metric: Metric::Cost, delta: 1 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub target: Target,
}

impl Effect {
    #[must_use]
    pub fn new(kind: EffectKind, target: Target) -> Self {
        Self { kind, target }
    }

    /// Shift a gauge on every targeted seat.
    #[must_use]
    pub fn metric(target: Target, metric: Metric, delta: i32) -> Self {
        Self::new(EffectKind::ModifyMetric { metric, delta }, target)
    }

    /// Shift the budget of every targeted seat.
    #[must_use]
    pub fn budget(target: Target, delta: i32) -> Self {
        Self::new(EffectKind::ModifyBudget { delta }, target)
    }
}
