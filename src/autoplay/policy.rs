//! Move choice for unattended seats.

use crate::cards::{CardCatalog, CardId};
use crate::core::GameState;

/// What an autoplayed seat does next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoMove {
    Play(CardId),
    End,
}

/// Picks the acting seat's next move.
///
/// Policies only look at the state; the driver applies the move.
pub trait AutoplayPolicy {
    fn choose(&self, state: &GameState, catalog: &CardCatalog) -> AutoMove;
}

/// Play the first card in hand order the seat can afford, else end the turn.
///
/// No lookahead. Deterministic for a given hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAffordable;

impl AutoplayPolicy for FirstAffordable {
    fn choose(&self, state: &GameState, catalog: &CardCatalog) -> AutoMove {
        let player = state.current();
        player
            .hand
            .iter()
            .find(|id| catalog.cost(id).is_some_and(|cost| cost <= player.budget))
            .map_or(AutoMove::End, |id| AutoMove::Play(id.clone()))
    }
}

/// Move the stock heuristic would make for the acting seat.
///
/// ```
/// use esg_deck::autoplay::{get_auto_move, AutoMove};
/// use esg_deck::cards::CardCatalog;
/// use esg_deck::core::GameSetup;
/// use esg_deck::rules::Engine;
///
/// let engine = Engine::new(CardCatalog::standard());
/// let state = engine.initialize_game(GameSetup::new(2, 3).seed(42));
/// let state = engine.process_event_phase(&state);
///
/// // Every opening hand holds something the opening budget covers.
/// assert!(matches!(get_auto_move(&state, engine.catalog()), AutoMove::Play(_)));
/// ```
#[must_use]
pub fn get_auto_move(state: &GameState, catalog: &CardCatalog) -> AutoMove {
    FirstAffordable.choose(state, catalog)
}
