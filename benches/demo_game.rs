//! Benchmarks for complete demo games and single transitions.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use esg_deck::{DemoDriver, Engine, CardCatalog, GameMode, GameSetup};

fn bench_demo_game(c: &mut Criterion) {
    let engine = Engine::new(CardCatalog::standard());
    let driver = DemoDriver::new(&engine);

    c.bench_function("demo_game_2p_5r", |b| {
        b.iter(|| {
            let setup = GameSetup::new(2, 5).mode(GameMode::Demo).seed(black_box(42));
            let state = engine.initialize_game(setup);
            black_box(driver.run_to_end(&state, 10_000))
        });
    });

    c.bench_function("demo_game_4p_10r", |b| {
        b.iter(|| {
            let setup = GameSetup::new(4, 10).mode(GameMode::Demo).seed(black_box(42));
            let state = engine.initialize_game(setup);
            black_box(driver.run_to_end(&state, 10_000))
        });
    });
}

fn bench_transition(c: &mut Criterion) {
    // Clone cost dominates a single transition.
    let engine = Engine::new(CardCatalog::standard());
    let state = engine.initialize_game(GameSetup::new(4, 10).mode(GameMode::Demo).seed(7));
    let state = DemoDriver::new(&engine).run_to_end(&state, 200);

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(benches, bench_demo_game, bench_transition);
criterion_main!(benches);
