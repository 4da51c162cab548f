use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use quarterturn_benchmarks::seeded_states;
use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::apply::apply_move;
use quarterturn_kernel::operators::moves::Move;
use quarterturn_kernel::proof::hash::canonical_hash;
use quarterturn_kernel::proof::hash_domain::HashDomain;
use quarterturn_search::frontier::BreadthFirstFrontier;
use quarterturn_search::heuristic::{Heuristic, MisplacedFacelets, ZeroHeuristic};
use quarterturn_search::node::SearchNodeV1;

// ---------------------------------------------------------------------------
// Move engine
// ---------------------------------------------------------------------------

fn bench_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");
    let start = seeded_states(20).swap_remove(0);
    for mv in [Move::U, Move::F_PRIME, Move::R] {
        group.bench_with_input(BenchmarkId::from_parameter(mv), &mv, |b, &mv| {
            b.iter(|| black_box(apply_move(black_box(&start), mv)));
        });
    }
    group.finish();
}

fn bench_fingerprint(c: &mut Criterion) {
    let state = seeded_states(20).swap_remove(1);
    c.bench_function("fingerprint", |b| {
        b.iter(|| black_box(black_box(&state).fingerprint()));
    });
    c.bench_function("state_hash", |b| {
        b.iter(|| {
            let fp = black_box(&state).fingerprint();
            black_box(canonical_hash(HashDomain::CubeState, fp.as_bytes()))
        });
    });
}

// ---------------------------------------------------------------------------
// Heuristic
// ---------------------------------------------------------------------------

fn bench_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic_estimate");
    let state = seeded_states(20).swap_remove(2);
    let heuristics: [&dyn Heuristic; 2] = [&MisplacedFacelets, &ZeroHeuristic];
    for h in heuristics {
        group.bench_function(h.name(), |b| {
            b.iter(|| black_box(h.estimate(black_box(&state))));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Frontier push/pop
// ---------------------------------------------------------------------------

fn bench_frontier(c: &mut Criterion) {
    let mut group = c.benchmark_group("frontier_push_pop");
    let root = SearchNodeV1::root(CubeStateV1::solved(), &ZeroHeuristic);
    for &width in &[12usize, 144] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &n| {
            b.iter_batched(
                || {
                    // Setup: one and two ply children of solved, repeats included.
                    Move::ALL
                        .iter()
                        .flat_map(|&a| Move::ALL.iter().map(move |&m| (a, m)))
                        .take(n)
                        .map(|(a, m)| root.child(a, &ZeroHeuristic).child(m, &ZeroHeuristic))
                        .collect::<Vec<_>>()
                },
                |nodes| {
                    let mut frontier = BreadthFirstFrontier::new();
                    for node in nodes {
                        black_box(frontier.push(node));
                    }
                    while let Some(node) = frontier.pop() {
                        black_box(node);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_fingerprint,
    bench_heuristic,
    bench_frontier
);
criterion_main!(benches);
