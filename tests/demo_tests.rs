//! Demo mode: autoplay driving whole games.

use esg_deck::autoplay::{get_auto_move, AutoMove, AutoplayPolicy, DemoDriver};
use esg_deck::cards::CardCatalog;
use esg_deck::core::{GameMode, GameSetup, GameState, LogAction, LogDetail};
use esg_deck::metrics::Outcome;
use esg_deck::rules::Engine;

fn engine() -> Engine {
    Engine::new(CardCatalog::standard())
}

fn demo(player_count: usize, rounds: u32, seed: u64) -> GameSetup {
    GameSetup::new(player_count, rounds)
        .mode(GameMode::Demo)
        .seed(seed)
}

/// Always passes.
struct Passive;

impl AutoplayPolicy for Passive {
    fn choose(&self, _: &GameState, _: &CardCatalog) -> AutoMove {
        AutoMove::End
    }
}

#[test]
fn test_demo_games_finish_for_every_table_size() {
    let e = engine();
    let driver = DemoDriver::new(&e);

    for player_count in 2..=4 {
        for seed in 0..10 {
            let state = e.initialize_game(demo(player_count, 5, seed));
            let end = driver.run_to_end(&state, 10_000);

            assert!(end.is_over(), "{player_count}p seed {seed} did not finish");
            assert!(end.round <= 5);

            let last = end.log.last().unwrap();
            assert_eq!(last.action, LogAction::GameEnded);
            match &last.detail {
                LogDetail::Result { outcome, reason } => {
                    assert_eq!(Some(*outcome), end.winner);
                    assert_eq!(Some(reason), end.end_reason.as_ref());
                }
                other => panic!("unexpected detail {other:?}"),
            }
        }
    }
}

#[test]
fn test_demo_is_deterministic_per_seed() {
    let e = engine();
    let driver = DemoDriver::new(&e);

    let a = driver.run_to_end(&e.initialize_game(demo(3, 6, 1234)), 10_000);
    let b = driver.run_to_end(&e.initialize_game(demo(3, 6, 1234)), 10_000);

    assert_eq!(a, b);
}

#[test]
fn test_winner_is_never_forced_out() {
    let e = engine();
    let driver = DemoDriver::new(&e);

    for seed in 0..25 {
        let end = driver.run_to_end(&e.initialize_game(demo(4, 8, seed)), 10_000);
        if let Some(Outcome::Winner(id)) = end.winner {
            assert!(end.players[id].metrics.compliance > 1, "seed {seed}");
        }
    }
}

#[test]
fn test_step_budget_stops_early() {
    let e = engine();
    let state = e.initialize_game(demo(2, 5, 9));

    let partial = DemoDriver::new(&e).run_to_end(&state, 3);

    assert!(!partial.is_over());
    assert!(partial.log.len() > state.log.len());
}

#[test]
fn test_passive_policy_only_ends_turns() {
    let e = engine();
    let state = e.initialize_game(demo(2, 2, 4));

    let end = DemoDriver::with_policy(&e, Passive).run_to_end(&state, 1_000);

    assert!(end.is_over());
    assert_eq!(end.log.with_action(LogAction::CardPlayed).count(), 0);
}

#[test]
fn test_take_control_mid_demo() {
    let e = engine();
    let driver = DemoDriver::new(&e);
    let state = e.initialize_game(demo(2, 5, 77));
    let mut mid = state.clone();
    for _ in 0..4 {
        mid = driver.step(&mid);
    }

    let manual = e.take_control(&mid);

    assert_eq!(manual.mode, GameMode::Manual);
    assert_eq!(driver.step(&manual), manual);
    assert_eq!(manual.log.with_action(LogAction::ControlTaken).count(), 1);
    // A person can carry on from where autoplay stopped.
    assert!(e.try_end_player_turn(&manual).is_ok());
}

#[test]
fn test_auto_move_matches_driver() {
    let e = engine();
    let state = e.initialize_game(demo(2, 3, 55));
    let state = e.process_event_phase(&state);

    match get_auto_move(&state, e.catalog()) {
        AutoMove::Play(card) => {
            let next = DemoDriver::new(&e).step(&state);
            let played = next.log.with_action(LogAction::CardPlayed).last().unwrap();
            assert_eq!(played.card.as_ref(), Some(&card));
        }
        AutoMove::End => panic!("opening hand should hold an affordable card"),
    }
}
