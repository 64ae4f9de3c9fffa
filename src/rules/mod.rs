//! Game rules: setup, phase transitions and player actions.
//!
//! Every transition is a method on `Engine` that borrows a `GameState` and
//! returns its successor. Each comes in two forms: a plain one that returns
//! the input unchanged when the move is not allowed, and a `try_*` one that
//! says why.

mod actions;
pub mod engine;
mod error;
pub mod phases;

pub use engine::{Engine, RULESET_VERSION};
pub use error::ActionError;
pub use phases::PRESSURE_THRESHOLD;

pub use crate::core::EndReason;
