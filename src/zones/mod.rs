//! Card locations outside the hands.
//!
//! ## Key Types
//!
//! - `Pile`: draw pile plus discard, with reshuffle-on-empty
//! - `Decks`: the event pile and the main pile

pub mod pile;

pub use pile::{Decks, Pile};
