//! Action-phase moves of the acting seat.

use crate::cards::CardId;
use crate::core::{Actor, GameState, LogAction, LogDetail, LogEntry, Phase, PlayerId};
use crate::effects::EffectResolver;

use super::engine::{draw_into_hand, ensure_phase, ensure_running, or_unchanged};
use super::{ActionError, Engine};

impl Engine {
    /// Play one copy of `card` from the acting seat's hand.
    ///
    /// Pays the card's cost, moves it to the main discard, logs the play
    /// and resolves its effects in order with the acting seat as actor.
    pub fn try_play_card(&self, state: &GameState, card: &CardId) -> Result<GameState, ActionError> {
        ensure_running(state)?;
        ensure_phase(state, Phase::Action)?;

        let seat = state.current_player;
        let player = state.current();
        if !player.holds(card) {
            return Err(ActionError::CardNotInHand(card.clone()));
        }
        let definition = self
            .catalog()
            .get(card)
            .ok_or_else(|| ActionError::UnknownCard(card.clone()))?;
        if player.budget < definition.cost {
            return Err(ActionError::InsufficientBudget {
                required: definition.cost,
                available: player.budget,
            });
        }

        let mut next = state.clone();
        let player = &mut next.players[seat];
        player.budget -= definition.cost;
        player.remove_from_hand(card);
        next.decks.main.discard(card.clone());

        next.log.push(
            LogEntry::new(next.round, Phase::Action, Actor::Player(seat), LogAction::CardPlayed)
                .with_card(card.clone())
                .with_detail(LogDetail::Cost(definition.cost)),
        );
        EffectResolver::resolve_all(&mut next, &definition.effects, card, Actor::Player(seat));
        Ok(next)
    }

    /// Play one copy of `card`, or return the input if the play is invalid.
    #[must_use]
    pub fn play_card(&self, state: &GameState, card: &CardId) -> GameState {
        or_unchanged(state, "play card", self.try_play_card(state, card))
    }

    /// Pay to swap the acting seat's whole hand for a fresh one.
    ///
    /// The old hand goes to the main discard before the new cards are
    /// drawn, so a thin deck may deal some of them straight back.
    pub fn try_refresh_hand(&self, state: &GameState) -> Result<GameState, ActionError> {
        ensure_running(state)?;
        ensure_phase(state, Phase::Action)?;

        let seat = state.current_player;
        let cost = self.rules().refresh_cost;
        let available = state.current().budget;
        if available < cost {
            return Err(ActionError::InsufficientBudget {
                required: cost,
                available,
            });
        }

        let mut next = state.clone();
        let player = &mut next.players[seat];
        player.budget -= cost;
        let old_hand = std::mem::take(&mut player.hand);
        for card in old_hand {
            next.decks.main.discard(card);
        }
        for _ in 0..self.rules().initial_hand_size {
            draw_into_hand(&mut next, seat);
        }

        next.log.push(
            LogEntry::new(next.round, Phase::Action, Actor::Player(seat), LogAction::HandRefreshed)
                .with_detail(LogDetail::Cost(cost)),
        );
        Ok(next)
    }

    #[must_use]
    pub fn refresh_hand(&self, state: &GameState) -> GameState {
        or_unchanged(state, "refresh hand", self.try_refresh_hand(state))
    }

    /// Finish the acting seat's turn.
    ///
    /// The next seat draws one card to open its turn. After the last seat,
    /// the round is resolved immediately.
    pub fn try_end_player_turn(&self, state: &GameState) -> Result<GameState, ActionError> {
        ensure_running(state)?;
        ensure_phase(state, Phase::Action)?;

        let mut next = state.clone();
        if next.is_last_player() {
            next.phase = Phase::Resolution;
            self.resolve_round(&mut next);
        } else {
            let seat = PlayerId::new(next.current_player.0 + 1);
            next.current_player = seat;
            draw_into_hand(&mut next, seat);
        }
        Ok(next)
    }

    #[must_use]
    pub fn end_player_turn(&self, state: &GameState) -> GameState {
        or_unchanged(state, "end turn", self.try_end_player_turn(state))
    }
}
