//! Reasons an action or phase transition is rejected.

use thiserror::Error;

use crate::cards::CardId;
use crate::core::Phase;

/// Why a transition did not apply.
///
/// The plain entry points swallow these and hand back the input state; the
/// `try_*` forms return them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("game is already over")]
    GameOver,

    #[error("expected {expected} phase, game is in {actual} phase")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("card {0} is not in the catalog")]
    UnknownCard(CardId),

    #[error("card {0} is not in the acting player's hand")]
    CardNotInHand(CardId),

    #[error("insufficient budget: required {required}, available {available}")]
    InsufficientBudget { required: u32, available: u32 },
}
