//! Event and Resolution phases.
//!
//! ## Resolution rules
//!
//! Checked for every seat in seat order:
//!
//! - `R-RES-01`: Cost at or above 8 drops Reputation by one
//! - `R-RES-02`: Risk at or above 8 drops Compliance by one
//! - `R-RES-03`: Compliance at or below 1 ends the game; the seat cannot win
//!
//! If nothing ends the game, the round advances and every budget is topped
//! back up.

use crate::core::{
    Actor, EndReason, Field, FieldChange, GameState, LogAction, LogDetail, LogEntry, Phase,
    PlayerId, ResolutionRule,
};
use crate::effects::EffectResolver;
use crate::metrics::{determine_winner, is_forced_out, Metric};

use super::engine::{draw_into_hand, ensure_phase, ensure_running, or_unchanged};
use super::{ActionError, Engine};

/// Gauge level at which Cost and Risk start dragging other gauges down.
pub const PRESSURE_THRESHOLD: i32 = 8;

impl Engine {
    /// Draw and apply this round's event, then open the Action phase.
    ///
    /// The drawn event goes straight to the event discard. Player 1 then
    /// draws a main-deck card to start their turn. An exhausted event deck
    /// still opens the Action phase, just without an event.
    pub fn try_process_event_phase(&self, state: &GameState) -> Result<GameState, ActionError> {
        ensure_running(state)?;
        ensure_phase(state, Phase::Event)?;

        let mut next = state.clone();
        match next.decks.event.draw(&mut next.rng) {
            Some(card_id) => {
                next.decks.event.discard(card_id.clone());
                let card = self
                    .catalog()
                    .get(&card_id)
                    .ok_or_else(|| ActionError::UnknownCard(card_id.clone()))?;

                log::debug!("round {}: event {} ({})", next.round, card.name, card_id);
                next.log.push(
                    LogEntry::new(next.round, Phase::Event, Actor::System, LogAction::EventDrawn)
                        .with_card(card_id.clone())
                        .with_detail(LogDetail::Event {
                            name: card.name.clone(),
                        }),
                );
                EffectResolver::resolve_all(&mut next, &card.effects, &card_id, Actor::System);
            }
            None => log::warn!(
                "game {}: event deck exhausted, round {} has no event",
                next.game_id,
                next.round
            ),
        }

        let first = PlayerId::new(0);
        next.phase = Phase::Action;
        next.current_player = first;
        draw_into_hand(&mut next, first);
        Ok(next)
    }

    /// Draw and apply this round's event, then open the Action phase.
    ///
    /// Returns the input unchanged outside the Event phase or after the
    /// game has ended.
    #[must_use]
    pub fn process_event_phase(&self, state: &GameState) -> GameState {
        or_unchanged(state, "event phase", self.try_process_event_phase(state))
    }

    /// Run the end-of-round rules on a state already in Resolution.
    ///
    /// `end_player_turn` does this on its own when the last seat finishes;
    /// this entry point is for hosts holding a state parked in Resolution.
    pub fn try_process_resolution_phase(
        &self,
        state: &GameState,
    ) -> Result<GameState, ActionError> {
        ensure_running(state)?;
        ensure_phase(state, Phase::Resolution)?;

        let mut next = state.clone();
        self.resolve_round(&mut next);
        Ok(next)
    }

    #[must_use]
    pub fn process_resolution_phase(&self, state: &GameState) -> GameState {
        or_unchanged(state, "resolution phase", self.try_process_resolution_phase(state))
    }

    /// Apply the resolution rules in place, then either end the game or
    /// open the next round.
    pub(crate) fn resolve_round(&self, state: &mut GameState) {
        let round = state.round;
        let mut forced_loss = None;

        for seat in PlayerId::all(state.player_count()) {
            let player = &mut state.players[seat];
            let mut changes = Vec::new();

            if player.metrics.cost >= PRESSURE_THRESHOLD {
                let (before, after) = player.metrics.modify(Metric::Reputation, -1);
                changes.push(
                    FieldChange::new(Field::Metric(Metric::Reputation), before, after)
                        .with_rule(ResolutionRule::CostDragsReputation),
                );
            }
            if player.metrics.risk >= PRESSURE_THRESHOLD {
                let (before, after) = player.metrics.modify(Metric::Compliance, -1);
                changes.push(
                    FieldChange::new(Field::Metric(Metric::Compliance), before, after)
                        .with_rule(ResolutionRule::RiskDragsCompliance),
                );
            }
            changes.retain(FieldChange::is_change);

            if forced_loss.is_none() && is_forced_out(&player.metrics) {
                forced_loss = Some(EndReason::ForcedLoss {
                    player: seat,
                    name: player.name.clone(),
                });
            }

            if !changes.is_empty() {
                state.log.push(
                    LogEntry::new(round, Phase::Resolution, Actor::Player(seat), LogAction::RuleTriggered)
                        .with_detail(LogDetail::Changes(changes)),
                );
            }
        }

        let end_reason = forced_loss
            .or_else(|| (state.round >= state.max_rounds).then_some(EndReason::MaxRoundsReached));
        if let Some(reason) = end_reason {
            finish(state, reason);
            return;
        }

        state.round += 1;
        state.phase = Phase::Event;
        state.current_player = PlayerId::new(0);
        for player in state.players.iter_mut() {
            player.budget = self.rules().initial_budget;
        }
        state.log.push(LogEntry::new(
            state.round,
            Phase::Event,
            Actor::System,
            LogAction::NewRound,
        ));
        log::debug!("game {}: round {} begins", state.game_id, state.round);
    }
}

/// Decide the winner and close the game.
fn finish(state: &mut GameState, reason: EndReason) {
    let outcome = determine_winner(&state.players);
    log::info!("game {} over: {} ({})", state.game_id, outcome, reason);

    state.log.push(
        LogEntry::new(state.round, state.phase, Actor::System, LogAction::GameEnded).with_detail(
            LogDetail::Result {
                outcome,
                reason: reason.clone(),
            },
        ),
    );
    state.winner = Some(outcome);
    state.end_reason = Some(reason);
}
