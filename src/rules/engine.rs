//! The engine: game setup and the shared plumbing of every transition.
//!
//! An `Engine` owns the read-only inputs of a game (card catalog, setup
//! constants, deck lists). Every transition borrows the current state and
//! returns a successor; the caller's state is never touched.
//!
//! ## Entry Points
//!
//! | Transition | Plain | Fallible |
//! |---|---|---|
//! | Setup | `initialize_game` | `try_initialize_game` |
//! | Event phase | `process_event_phase` | `try_process_event_phase` |
//! | Play a card | `play_card` | `try_play_card` |
//! | Refresh hand | `refresh_hand` | `try_refresh_hand` |
//! | End turn | `end_player_turn` | `try_end_player_turn` |
//! | Resolution | `process_resolution_phase` | `try_process_resolution_phase` |
//!
//! The plain forms return the input state unchanged when the transition is
//! rejected.

use crate::cards::{CardCatalog, CardId, DeckLists};
use crate::core::{
    Actor, ConfigError, GameLog, GameMode, GameRng, GameSetup, GameState, LogAction, LogDetail,
    LogEntry, Phase, PlayerId, PlayerMap, PlayerState, RulesConfig,
};
use crate::zones::{Decks, Pile};

use super::ActionError;

/// Version tag stamped on every game.
pub const RULESET_VERSION: &str = "1.0";

/// Rules engine for the sustainability card game.
///
/// ```
/// use esg_deck::cards::CardCatalog;
/// use esg_deck::core::{GameSetup, Phase};
/// use esg_deck::rules::Engine;
///
/// let engine = Engine::new(CardCatalog::standard());
/// let state = engine.initialize_game(GameSetup::new(2, 5).seed(42));
/// assert_eq!(state.phase, Phase::Event);
///
/// let state = engine.process_event_phase(&state);
/// assert_eq!(state.phase, Phase::Action);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    catalog: CardCatalog,
    rules: RulesConfig,
    decks: DeckLists,
}

impl Engine {
    /// Engine with the default setup constants and the stock deck lists.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self {
            catalog,
            rules: RulesConfig::default(),
            decks: DeckLists::standard(),
        }
    }

    /// Replace the setup constants (builder pattern).
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the deck lists (builder pattern).
    #[must_use]
    pub fn with_decks(mut self, decks: DeckLists) -> Self {
        self.decks = decks;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn deck_lists(&self) -> &DeckLists {
        &self.decks
    }

    /// Create the opening state of a game.
    ///
    /// Both decks are built from the deck lists, repeated by the configured
    /// copy counts, and shuffled. Every seat is dealt an opening hand from
    /// the main deck. The game starts at round 1 in the Event phase.
    pub fn try_initialize_game(&self, setup: GameSetup) -> Result<GameState, ConfigError> {
        setup.validate()?;
        if let Some(missing) = self.decks.ids().find(|id| !self.catalog.contains(id)) {
            return Err(ConfigError::UnknownDeckCard(missing.clone()));
        }

        let mut rng = setup.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let event = repeat_list(&self.decks.event, self.rules.event_copies);
        let main = repeat_list(&self.decks.main, self.rules.main_copies);
        let mut decks = Decks {
            event: Pile::shuffled(event, &mut rng),
            main: Pile::shuffled(main, &mut rng),
        };

        let mode = setup.mode;
        let mut players = PlayerMap::new(setup.player_count, |p| {
            let is_human = p.index() == 0 || mode == GameMode::Manual;
            PlayerState::new(p, is_human, self.rules.initial_budget, self.rules.initial_metrics)
        });
        for player in players.iter_mut() {
            for _ in 0..self.rules.initial_hand_size {
                if let Some(card) = decks.main.draw(&mut rng) {
                    player.hand.push_back(card);
                }
            }
        }

        let mut log = GameLog::new();
        log.push(
            LogEntry::new(0, Phase::Event, Actor::System, LogAction::GameStarted).with_detail(
                LogDetail::Setup {
                    player_count: setup.player_count,
                    max_rounds: setup.max_rounds,
                    mode,
                },
            ),
        );

        let game_id = format!("G_{:016x}", rng.seed());
        log::info!(
            "game {} started: {} players, {} rounds, {} mode",
            game_id,
            setup.player_count,
            setup.max_rounds,
            mode
        );

        Ok(GameState {
            game_id,
            ruleset_version: RULESET_VERSION.to_string(),
            round: 1,
            max_rounds: setup.max_rounds,
            phase: Phase::Event,
            current_player: PlayerId::new(0),
            players,
            decks,
            mode,
            log,
            winner: None,
            end_reason: None,
            rng,
        })
    }

    /// Create the opening state of a game.
    ///
    /// Panics if the setup is invalid.
    #[must_use]
    pub fn initialize_game(&self, setup: GameSetup) -> GameState {
        match self.try_initialize_game(setup) {
            Ok(state) => state,
            Err(err) => panic!("invalid game setup: {err}"),
        }
    }

    /// Hand a demo game over to manual play.
    ///
    /// Every seat becomes human-driven. A no-op for games that are already
    /// manual or over.
    #[must_use]
    pub fn take_control(&self, state: &GameState) -> GameState {
        if state.is_over() || state.mode == GameMode::Manual {
            return state.clone();
        }

        let mut next = state.clone();
        next.mode = GameMode::Manual;
        for player in next.players.iter_mut() {
            player.is_human = true;
        }
        next.log.push(LogEntry::new(
            next.round,
            next.phase,
            Actor::Player(next.current_player),
            LogAction::ControlTaken,
        ));
        log::info!("game {}: demo interrupted, manual control", next.game_id);
        next
    }
}

fn repeat_list(list: &[CardId], copies: usize) -> Vec<CardId> {
    (0..copies).flat_map(|_| list.iter().cloned()).collect()
}

// === Shared transition helpers ===

/// Reject transitions on a finished game.
pub(crate) fn ensure_running(state: &GameState) -> Result<(), ActionError> {
    if state.is_over() {
        Err(ActionError::GameOver)
    } else {
        Ok(())
    }
}

/// Reject transitions outside `expected`.
pub(crate) fn ensure_phase(state: &GameState, expected: Phase) -> Result<(), ActionError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(ActionError::WrongPhase {
            expected,
            actual: state.phase,
        })
    }
}

/// Deal one main-deck card to `seat`. A fully exhausted deck deals nothing.
pub(crate) fn draw_into_hand(state: &mut GameState, seat: PlayerId) {
    if let Some(card) = state.decks.main.draw(&mut state.rng) {
        state.players[seat].hand.push_back(card);
    } else {
        log::debug!("main deck exhausted; {} draws nothing", seat);
    }
}

/// Unwrap a fallible transition, falling back to the input state.
pub(crate) fn or_unchanged(
    state: &GameState,
    what: &str,
    result: Result<GameState, ActionError>,
) -> GameState {
    match result {
        Ok(next) => next,
        Err(err) => {
            log::debug!("{} rejected in game {}: {}", what, state.game_id, err);
            state.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardType};

    fn engine() -> Engine {
        Engine::new(CardCatalog::standard())
    }

    #[test]
    fn test_initial_state() {
        let state = engine().initialize_game(GameSetup::new(3, 5).seed(42));

        assert_eq!(state.round, 1);
        assert_eq!(state.max_rounds, 5);
        assert_eq!(state.phase, Phase::Event);
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.ruleset_version, "1.0");
        assert_eq!(state.game_id, "G_000000000000002a");
        assert_eq!(state.seed(), 42);
        assert!(state.winner.is_none());
        assert!(state.end_reason.is_none());

        for player in state.players.iter() {
            assert_eq!(player.budget, 3);
            assert_eq!(player.hand.len(), 5);
            assert!(player.is_human);
        }
        assert_eq!(state.decks.event.len(), 12);
        assert_eq!(state.decks.main.len(), 40 - 15);
    }

    #[test]
    fn test_initial_log_entry() {
        let state = engine().initialize_game(GameSetup::new(2, 4).mode(GameMode::Demo).seed(1));

        assert_eq!(state.log.len(), 1);
        let entry = state.log.last().unwrap();
        assert_eq!(entry.round, 0);
        assert_eq!(entry.action, LogAction::GameStarted);
        assert_eq!(entry.actor, Actor::System);
        assert_eq!(
            entry.detail,
            LogDetail::Setup {
                player_count: 2,
                max_rounds: 4,
                mode: GameMode::Demo
            }
        );
    }

    #[test]
    fn test_demo_mode_only_first_seat_human() {
        let state = engine().initialize_game(GameSetup::new(4, 3).mode(GameMode::Demo).seed(9));

        let humans: Vec<bool> = state.players.iter().map(|p| p.is_human).collect();
        assert_eq!(humans, vec![true, false, false, false]);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = engine().initialize_game(GameSetup::new(2, 3).seed(77));
        let b = engine().initialize_game(GameSetup::new(2, 3).seed(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_setup() {
        assert_eq!(
            engine().try_initialize_game(GameSetup::new(5, 3)),
            Err(ConfigError::PlayerCount(5))
        );
        assert_eq!(
            engine().try_initialize_game(GameSetup::new(2, 0)),
            Err(ConfigError::NoRounds)
        );
    }

    #[test]
    #[should_panic(expected = "invalid game setup")]
    fn test_initialize_panics_on_bad_setup() {
        let _ = engine().initialize_game(GameSetup::new(1, 3));
    }

    #[test]
    fn test_deck_list_must_match_catalog() {
        let catalog: CardCatalog = [CardDefinition::new("EVT_001", "Surge", CardType::Event)]
            .into_iter()
            .collect();
        let result = Engine::new(catalog).try_initialize_game(GameSetup::new(2, 3).seed(0));

        assert!(matches!(result, Err(ConfigError::UnknownDeckCard(_))));
    }

    #[test]
    fn test_custom_rules() {
        let rules = RulesConfig {
            initial_budget: 5,
            initial_hand_size: 2,
            ..RulesConfig::default()
        };
        let state = engine()
            .with_rules(rules)
            .initialize_game(GameSetup::new(2, 3).seed(3));

        assert!(state.players.iter().all(|p| p.budget == 5 && p.hand.len() == 2));
    }

    #[test]
    fn test_take_control() {
        let e = engine();
        let demo = e.initialize_game(GameSetup::new(2, 3).mode(GameMode::Demo).seed(5));

        let manual = e.take_control(&demo);

        assert_eq!(manual.mode, GameMode::Manual);
        assert!(manual.players.iter().all(|p| p.is_human));
        assert_eq!(manual.log.last().map(|l| l.action), Some(LogAction::ControlTaken));
        assert_eq!(demo.mode, GameMode::Demo);

        let again = e.take_control(&manual);
        assert_eq!(again, manual);
    }
}
