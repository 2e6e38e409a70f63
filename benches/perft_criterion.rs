use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use othello_engine::game_state::game_state::GameState;
use othello_engine::move_generation::perft::perft;

const OPENING_NODES: &[u64] = &[4, 12, 56, 244, 1396, 8200];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_opening");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for (depth_idx, expected_nodes) in OPENING_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;
        let mut game = GameState::new_game();

        // Correctness guard before benchmarking.
        let warmup = perft(&mut game, depth).expect("perft should run");
        assert_eq!(
            warmup.nodes, *expected_nodes,
            "node mismatch in warmup for depth {}",
            depth
        );

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft(black_box(&mut game), black_box(depth))
                        .expect("perft benchmark run should succeed");
                    assert_eq!(count.nodes, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
