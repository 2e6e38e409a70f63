use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use othello_engine::engines::engine_alpha_beta::AlphaBetaEngine;
use othello_engine::engines::engine_trait::{Engine, EngineMove};
use othello_engine::game_state::game_state::GameState;
use othello_engine::game_state::othello_types::Position;
use othello_engine::search::board_scoring::DiscDifferenceScorer;
use othello_engine::search::depth_policy::SearchConfig;

/// A fixed early-midgame line (d3 c5 f6 f5 e6 e3).
const LINE: &[(u8, u8)] = &[(4, 3), (3, 5), (6, 6), (6, 5), (5, 6), (5, 3)];

fn midgame() -> GameState {
    let mut game = GameState::new_game();
    for &(x, y) in LINE {
        game.apply_move(Position::new(x, y))
            .expect("benchmark line should be legal");
    }
    game
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha_beta_midgame");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for (presearch_depth, normal_depth) in [(0u8, 4u8), (3, 4), (0, 5), (3, 5)] {
        let config = SearchConfig {
            presearch_depth,
            normal_depth,
            ..SearchConfig::default()
        };
        let mut engine = AlphaBetaEngine::with_scorer(config, DiscDifferenceScorer);
        let mut game = midgame();
        let before = game.clone();

        // Correctness guard: a placement is chosen and the board is restored.
        let out = engine.choose_move(&mut game).expect("search should run");
        assert!(matches!(out.best_move, Some(EngineMove::Place(_))));
        assert_eq!(game, before);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("pre{presearch_depth}_d{normal_depth}")),
            &normal_depth,
            |b, _| {
                b.iter(|| {
                    let out = engine
                        .choose_move(black_box(&mut game))
                        .expect("search benchmark run should succeed");
                    black_box(out.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
