//! Criterion micro-benchmarks for direction sets and coordinate algebra.

use criterion::{criterion_group, criterion_main, Criterion};
use orthant_bench::coord_pairs;
use orthant_core::{all, diagonal, orthogonal, Coord, Direction, Move};
use std::collections::HashSet;
use std::hint::black_box;

/// Benchmark: generate every direction set over all six axes.
fn bench_direction_sets_6d(c: &mut Criterion) {
    c.bench_function("direction_sets_6d", |b| {
        b.iter(|| {
            black_box(orthogonal(black_box(6)));
            black_box(diagonal(black_box(6)));
            black_box(all(black_box(6)));
        });
    });
}

/// Benchmark: Move::vector for every non-empty 4D direction.
fn bench_move_vectors_4d(c: &mut Criterion) {
    let moves: Vec<Move> = all(4).into_iter().map(|d| d.to_move(3)).collect();

    c.bench_function("move_vectors_4d", |b| {
        b.iter(|| {
            for mv in &moves {
                black_box(mv.vector());
            }
        });
    });
}

/// Benchmark: add 1000 mixed-dimension pairs and dedupe the sums.
fn bench_coord_add_and_hash(c: &mut Criterion) {
    let pairs = coord_pairs(1000);

    c.bench_function("coord_add_and_hash_1k", |b| {
        b.iter(|| {
            let set: HashSet<Coord> = pairs.iter().map(|(a, bv)| a + bv).collect();
            black_box(set.len());
        });
    });
}

/// Benchmark: take 1000 steps of a diagonal walk.
fn bench_walk_1k(c: &mut Criterion) {
    let mv = Move::new(Direction::RIGHT | Direction::UP, 1);

    c.bench_function("walk_diagonal_1k", |b| {
        b.iter(|| {
            let last = Coord::origin().walk(mv).take(1000).last();
            black_box(last);
        });
    });
}

criterion_group!(
    benches,
    bench_direction_sets_6d,
    bench_move_vectors_4d,
    bench_coord_add_and_hash,
    bench_walk_1k
);
criterion_main!(benches);
