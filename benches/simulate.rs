//! Full-game simulation throughput.
//!
//! ```bash
//! cargo bench --bench simulate
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_ludo::{Game, GameConfig, Strategy};

fn bench_full_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_game");

    for strategy in Strategy::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy),
            &strategy,
            |b, &strategy| {
                let config = GameConfig::new()
                    .with_seed(42)
                    .with_strategies([strategy, strategy]);
                b.iter(|| {
                    let mut game = Game::new(black_box(config.clone())).unwrap();
                    black_box(game.run().unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_long_game(c: &mut Criterion) {
    let config = GameConfig::new()
        .with_tokens(4)
        .with_rounds(200)
        .with_seed(7);

    c.bench_function("long_game_4_tokens_200_rounds", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(config.clone())).unwrap();
            black_box(game.run().unwrap())
        });
    });
}

fn bench_log_encode(c: &mut Criterion) {
    let history = Game::new(GameConfig::new().with_rounds(200).with_seed(7))
        .unwrap()
        .run()
        .unwrap();

    c.bench_function("move_log_to_bytes", |b| {
        b.iter(|| black_box(history.to_bytes().unwrap()));
    });
}

criterion_group!(benches, bench_full_game, bench_long_game, bench_log_encode);
criterion_main!(benches);
