//! Unattended demo play.
//!
//! `DemoDriver` is the loop a host ticks to run a demo game: each `step`
//! performs exactly one transition. Timing between steps is up to the host.

use crate::core::{GameMode, GameState, Phase};
use crate::rules::Engine;

use super::policy::{AutoMove, AutoplayPolicy, FirstAffordable};

/// Advances a demo game one transition at a time.
///
/// ```
/// use esg_deck::autoplay::DemoDriver;
/// use esg_deck::cards::CardCatalog;
/// use esg_deck::core::{GameMode, GameSetup};
/// use esg_deck::rules::Engine;
///
/// let engine = Engine::new(CardCatalog::standard());
/// let state = engine.initialize_game(GameSetup::new(3, 4).mode(GameMode::Demo).seed(42));
///
/// let end = DemoDriver::new(&engine).run_to_end(&state, 10_000);
/// assert!(end.is_over());
/// ```
#[derive(Clone, Debug)]
pub struct DemoDriver<'a, P = FirstAffordable> {
    engine: &'a Engine,
    policy: P,
}

impl<'a> DemoDriver<'a, FirstAffordable> {
    /// Driver using the stock heuristic.
    #[must_use]
    pub fn new(engine: &'a Engine) -> Self {
        Self::with_policy(engine, FirstAffordable)
    }
}

impl<'a, P: AutoplayPolicy> DemoDriver<'a, P> {
    #[must_use]
    pub fn with_policy(engine: &'a Engine, policy: P) -> Self {
        Self { engine, policy }
    }

    /// Perform the next transition.
    ///
    /// Returns the input unchanged once the game is over or has been taken
    /// over by a person. A card the engine refuses ends the turn instead,
    /// so every step makes progress.
    #[must_use]
    pub fn step(&self, state: &GameState) -> GameState {
        if state.is_over() || state.mode == GameMode::Manual {
            return state.clone();
        }

        match state.phase {
            Phase::Event => self.engine.process_event_phase(state),
            Phase::Action => match self.policy.choose(state, self.engine.catalog()) {
                AutoMove::Play(card) => self
                    .engine
                    .try_play_card(state, &card)
                    .unwrap_or_else(|err| {
                        log::warn!("autoplay chose {card} but it was refused: {err}");
                        self.engine.end_player_turn(state)
                    }),
                AutoMove::End => self.engine.end_player_turn(state),
            },
            Phase::Resolution => self.engine.process_resolution_phase(state),
        }
    }

    /// Step until the game ends, control is taken, or `max_steps` run out.
    #[must_use]
    pub fn run_to_end(&self, state: &GameState, max_steps: usize) -> GameState {
        let mut current = state.clone();
        for _ in 0..max_steps {
            if current.is_over() || current.mode == GameMode::Manual {
                break;
            }
            current = self.step(&current);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, CardId};
    use crate::core::{GameSetup, LogAction, PlayerId};

    fn engine() -> Engine {
        Engine::new(CardCatalog::standard())
    }

    struct PlaysUnknown;

    impl AutoplayPolicy for PlaysUnknown {
        fn choose(&self, _: &GameState, _: &crate::cards::CardCatalog) -> AutoMove {
            AutoMove::Play(CardId::new("NOT_A_CARD"))
        }
    }

    #[test]
    fn test_step_follows_phases() {
        let e = engine();
        let driver = DemoDriver::new(&e);
        let state = e.initialize_game(GameSetup::new(2, 3).mode(GameMode::Demo).seed(3));

        let after_event = driver.step(&state);
        assert_eq!(after_event.phase, Phase::Action);

        let after_action = driver.step(&after_event);
        assert!(after_action.log.len() > after_event.log.len());
    }

    #[test]
    fn test_manual_game_is_not_driven() {
        let e = engine();
        let state = e.initialize_game(GameSetup::new(2, 3).seed(3));

        assert_eq!(DemoDriver::new(&e).step(&state), state);
    }

    #[test]
    fn test_refused_card_ends_turn() {
        let e = engine();
        let driver = DemoDriver::with_policy(&e, PlaysUnknown);
        let state = e.initialize_game(GameSetup::new(2, 3).mode(GameMode::Demo).seed(3));
        let state = driver.step(&state);

        let next = driver.step(&state);

        assert_eq!(next.current_player, PlayerId::new(1));
    }

    #[test]
    fn test_run_to_end_finishes() {
        let e = engine();
        let state = e.initialize_game(GameSetup::new(4, 5).mode(GameMode::Demo).seed(99));

        let end = DemoDriver::new(&e).run_to_end(&state, 10_000);

        assert!(end.is_over());
        assert!(end.end_reason.is_some());
        assert_eq!(end.log.with_action(LogAction::GameEnded).count(), 1);
    }

    #[test]
    fn test_run_stops_after_take_control() {
        let e = engine();
        let state = e.initialize_game(GameSetup::new(2, 5).mode(GameMode::Demo).seed(5));
        let driver = DemoDriver::new(&e);

        let mid = e.take_control(&driver.step(&state));
        let after = driver.run_to_end(&mid, 100);

        assert_eq!(after, mid);
    }
}
