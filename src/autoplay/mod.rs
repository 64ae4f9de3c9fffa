//! Autoplay: a move heuristic and the demo loop that uses it.
//!
//! The core rules never call into this module. Hosts use it to play seats
//! nobody is controlling.

mod driver;
mod policy;

pub use driver::DemoDriver;
pub use policy::{get_auto_move, AutoMove, AutoplayPolicy, FirstAffordable};
