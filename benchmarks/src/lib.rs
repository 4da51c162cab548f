//! Shared helpers for quarterturn benchmark suites.

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::scramble::scramble_seeded;
use quarterturn_kernel::proof::hash::{canonical_hash, ContentHash};
use quarterturn_kernel::proof::hash_domain::HashDomain;
use quarterturn_search::policy::{Algorithm, SearchPolicyV1};
use quarterturn_search::search::{solve, SolveResultV1};

/// Seeds used by every regime so runs are comparable across machines.
pub const BENCH_SEEDS: [u64; 4] = [3, 17, 101, 4099];

/// One benchmark regime: a scramble depth and the strategy to time on it.
#[derive(Debug, Clone, Copy)]
pub struct Regime {
    pub name: &'static str,
    pub scramble_depth: usize,
    pub algorithm: Algorithm,
}

/// Regimes small enough that every strategy finishes in milliseconds.
///
/// DFS is only timed at depth 3: its first branch dives to `max_depth`, so
/// deeper scrambles measure the depth cap rather than the strategy.
pub const REGIMES: [Regime; 6] = [
    Regime { name: "bfs_d3", scramble_depth: 3, algorithm: Algorithm::Bfs },
    Regime { name: "bfs_d4", scramble_depth: 4, algorithm: Algorithm::Bfs },
    Regime { name: "dfs_d3", scramble_depth: 3, algorithm: Algorithm::Dfs },
    Regime { name: "iddfs_d4", scramble_depth: 4, algorithm: Algorithm::Iddfs },
    Regime { name: "ida_star_d4", scramble_depth: 4, algorithm: Algorithm::IdaStar },
    Regime { name: "ida_star_d6", scramble_depth: 6, algorithm: Algorithm::IdaStar },
];

/// Scrambled start states for `depth`, one per entry in [`BENCH_SEEDS`].
///
/// # Panics
///
/// Panics if `depth` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn seeded_states(depth: usize) -> Vec<CubeStateV1> {
    BENCH_SEEDS
        .iter()
        .map(|&seed| scramble_seeded(depth, seed).expect("scramble depth must be positive").state)
        .collect()
}

/// Policy used by strategy benchmarks. DFS gets a tight depth cap.
#[must_use]
pub fn regime_policy(regime: &Regime) -> SearchPolicyV1 {
    let policy = SearchPolicyV1::default();
    match regime.algorithm {
        Algorithm::Dfs => policy.with_max_depth(3),
        _ => policy,
    }
}

/// Solve one start state under a regime.
///
/// # Panics
///
/// Panics if the policy is rejected. Benchmark policies are always valid.
#[must_use]
pub fn solve_regime(regime: &Regime, start: &CubeStateV1) -> SolveResultV1 {
    solve(start, regime.algorithm, &regime_policy(regime)).expect("benchmark policy is valid")
}

/// Digest of every solution a regime produces over [`BENCH_SEEDS`].
///
/// Strategy benches compare this before and after timing, so a change that
/// makes a strategy faster by returning different moves is caught.
#[must_use]
pub fn solution_guard(regime: &Regime) -> ContentHash {
    let mut bytes = Vec::new();
    for start in seeded_states(regime.scramble_depth) {
        let result = solve_regime(regime, &start);
        bytes.extend(result.moves.iter().map(|m| m.code()));
        bytes.push(0xFF);
    }
    canonical_hash(HashDomain::BenchGuard, &bytes)
}
