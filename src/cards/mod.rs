//! Card system: identifiers, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: catalog identifier; decks and hands hold these
//! - `CardDefinition`: static card data (type, cost, effects)
//! - `CardCatalog`: read-only definition lookup, injected into the engine
//! - `DeckLists`: which ids make up the event and main decks

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::DeckLists;
pub use definition::{CardDefinition, CardId, CardType};
pub use registry::CardCatalog;
