//! Metrics model: the five bounded gauges, scoring and winner selection.
//!
//! - `Metric` / `Metrics`: per-player gauges clamped to `[0, 10]`
//! - `calculate_score`: pure scoring formula shown to players
//! - `determine_winner`: end-of-game ranking with tie-breaks

mod gauge;
mod score;

pub use gauge::{clamp_metric, Metric, Metrics, METRIC_MAX, METRIC_MIN};
pub use score::{
    calculate_score, determine_winner, is_forced_out, Outcome, COMPLIANCE_PENALTY,
    COMPLIANCE_PENALTY_THRESHOLD, FORCED_LOSS_COMPLIANCE,
};
