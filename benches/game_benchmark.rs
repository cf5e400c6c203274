//! Benchmarks for move generation, forecasting and complete games.
//!
//! Search agents call `forecast_move` and `active_moves` in their inner
//! loop, so these are the hot paths.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use isolation::agent::{GreedyAgent, RandomAgent};
use isolation::game::{Coord, GameState, Roster, Variant};
use isolation::tournament::{MatchConfig, run_game};

/// A 9x9 board a few moves into the game.
fn midgame() -> GameState {
    let mut state = GameState::new(9, 9, Roster::default(), Variant::ImpactCrater).unwrap();
    for (c, r) in [(4, 4), (2, 6), (4, 1), (5, 6), (7, 4), (5, 3)] {
        state.apply_move(Coord::new(c, r)).unwrap();
    }
    state
}

fn bench_legal_moves(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("active_moves_9x9", |b| {
        b.iter(|| black_box(black_box(&state).active_moves()));
    });
}

fn bench_forecast(c: &mut Criterion) {
    let state = midgame();
    let moves = state.active_moves();

    c.bench_function("forecast_all_moves_9x9", |b| {
        b.iter(|| {
            for mv in &moves {
                black_box(black_box(&state).forecast_move(*mv).unwrap());
            }
        });
    });
}

fn bench_random_game(c: &mut Criterion) {
    let config = MatchConfig {
        time_limit_ms: 0,
        ..MatchConfig::default()
    };

    c.bench_function("random_game_9x9", |b| {
        b.iter(|| {
            let result = run_game(
                Box::new(RandomAgent::new(1)),
                Box::new(RandomAgent::new(2)),
                black_box(&config),
            );
            black_box(result)
        });
    });
}

fn bench_greedy_game(c: &mut Criterion) {
    let config = MatchConfig {
        time_limit_ms: 0,
        ..MatchConfig::default()
    };

    c.bench_function("greedy_game_9x9", |b| {
        b.iter(|| {
            let result = run_game(
                Box::new(GreedyAgent::default()),
                Box::new(RandomAgent::new(3)),
                black_box(&config),
            );
            black_box(result)
        });
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_forecast,
    bench_random_game,
    bench_greedy_game
);
criterion_main!(benches);
