//! Benchmarks for board generation.
//!
//! Measures the complete wave-function-collapse loop, including any
//! contradiction restarts, over fixed seeds so runs are comparable:
//!
//! - `seed_0` and `seed_7` complete without restarts
//! - `seed_1` restarts twice before completing
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generate
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sudowave_generator::{Board, Difficulty, SeedStream};

const SEEDS: [u64; 3] = [0, 1, 7];

fn bench_generate(c: &mut Criterion) {
    for seed in SEEDS {
        c.bench_with_input(
            BenchmarkId::new("generate", format!("seed_{seed}")),
            &seed,
            |b, &seed| {
                b.iter_batched(
                    || hint::black_box(seed),
                    |seed| {
                        let mut board = Board::new();
                        board.generate(seed).unwrap();
                        board
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_gameify(c: &mut Criterion) {
    let mut board = Board::new();
    board.generate(0).unwrap();

    c.bench_with_input(
        BenchmarkId::new("gameify", "hard"),
        &board,
        |b, board| {
            b.iter_batched(
                || (board.clone(), SeedStream::new(7)),
                |(mut board, mut removal)| {
                    board.gameify(Difficulty::Hard, &mut removal).unwrap();
                    board
                },
                BatchSize::SmallInput,
            );
        },
    );
}

criterion_group!(benches, bench_generate, bench_gameify);
criterion_main!(benches);
