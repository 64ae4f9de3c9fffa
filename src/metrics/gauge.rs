//! The five bounded sustainability gauges tracked per player.
//!
//! Every gauge lives in the closed range `[METRIC_MIN, METRIC_MAX]`.
//! Values are clamped after every modification, whatever the delta.

use serde::{Deserialize, Serialize};

/// Lowest value a gauge can hold.
pub const METRIC_MIN: i32 = 0;

/// Highest value a gauge can hold.
pub const METRIC_MAX: i32 = 10;

/// Clamp a raw value into the gauge range.
#[must_use]
pub fn clamp_metric(value: i32) -> i32 {
    value.clamp(METRIC_MIN, METRIC_MAX)
}

/// One of the five sustainability gauges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    Carbon,
    Cost,
    Compliance,
    Reputation,
    Risk,
}

impl Metric {
    /// All gauges in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Carbon,
        Metric::Cost,
        Metric::Compliance,
        Metric::Reputation,
        Metric::Risk,
    ];

    /// Whether a lower reading is the better one.
    ///
    /// Only scoring and presentation care about polarity; clamping does not.
    #[must_use]
    pub const fn lower_is_better(self) -> bool {
        matches!(self, Metric::Carbon | Metric::Cost | Metric::Risk)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::Carbon => "Carbon",
            Metric::Cost => "Cost",
            Metric::Compliance => "Compliance",
            Metric::Reputation => "Reputation",
            Metric::Risk => "Risk",
        };
        f.write_str(name)
    }
}

/// A player's five gauge readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metrics {
    pub carbon: i32,
    pub cost: i32,
    pub compliance: i32,
    pub reputation: i32,
    pub risk: i32,
}

impl Metrics {
    /// Create a reading, clamping every value into range.
    #[must_use]
    pub fn new(carbon: i32, cost: i32, compliance: i32, reputation: i32, risk: i32) -> Self {
        Self {
            carbon: clamp_metric(carbon),
            cost: clamp_metric(cost),
            compliance: clamp_metric(compliance),
            reputation: clamp_metric(reputation),
            risk: clamp_metric(risk),
        }
    }

    /// Read a single gauge.
    #[must_use]
    pub fn get(&self, metric: Metric) -> i32 {
        match metric {
            Metric::Carbon => self.carbon,
            Metric::Cost => self.cost,
            Metric::Compliance => self.compliance,
            Metric::Reputation => self.reputation,
            Metric::Risk => self.risk,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut i32 {
        match metric {
            Metric::Carbon => &mut self.carbon,
            Metric::Cost => &mut self.cost,
            Metric::Compliance => &mut self.compliance,
            Metric::Reputation => &mut self.reputation,
            Metric::Risk => &mut self.risk,
        }
    }

    /// Set a gauge, clamped.
    pub fn set(&mut self, metric: Metric, value: i32) {
        *self.slot_mut(metric) = clamp_metric(value);
    }

    /// Add `delta` to a gauge and clamp.
    ///
    /// Returns `(before, after)`.
    pub fn modify(&mut self, metric: Metric, delta: i32) -> (i32, i32) {
        let slot = self.slot_mut(metric);
        let before = *slot;
        *slot = clamp_metric(before.saturating_add(delta));
        (before, *slot)
    }
}

impl Default for Metrics {
    /// Opening position for every player.
    fn default() -> Self {
        Self::new(8, 2, 3, 5, 5)
    }
}
