//! Effect system for card abilities.
//!
//! - `Effect`: a kind plus a target scope
//! - `EffectKind`: one variant per kind, matched exhaustively by the resolver
//! - `EffectResolver`: applies effects to seats and records what changed

mod effect;
mod resolver;

pub use effect::{Effect, EffectKind, Target};
pub use resolver::{apply_effect, EffectResolver, ResolveResult, Targets};
