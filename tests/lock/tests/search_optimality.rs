//! Cross-strategy search properties on seeded scrambles.
//!
//! Proves:
//! 1. BFS solution length never exceeds the scramble length
//! 2. IDA* (admissible heuristic) and IDDFS match BFS length
//! 3. Every returned solution replays to solved
//! 4. Solved starts cost nothing; invalid inputs fail before search

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::scramble::{scramble_seeded, ScrambleError};
use quarterturn_kernel::proof::replay::replay_verify;
use quarterturn_search::error::SearchError;
use quarterturn_search::policy::{Algorithm, SearchPolicyV1};
use quarterturn_search::search::{solve, solve_tagged, TerminationReasonV1};

fn policy() -> SearchPolicyV1 {
    SearchPolicyV1::default()
        .with_max_nodes(500_000)
        .with_max_depth(8)
}

#[test]
fn optimal_strategies_agree_on_shallow_scrambles() {
    for depth in 1..=4 {
        for seed in 0..4 {
            let s = scramble_seeded(depth, seed).unwrap();
            let bfs = solve(&s.state, Algorithm::Bfs, &policy()).unwrap();
            let ida = solve(&s.state, Algorithm::IdaStar, &policy()).unwrap();
            let iddfs = solve(&s.state, Algorithm::Iddfs, &policy()).unwrap();

            assert!(bfs.moves.len() <= depth, "depth={depth} seed={seed}");
            assert_eq!(ida.moves.len(), bfs.moves.len(), "depth={depth} seed={seed}");
            assert_eq!(iddfs.moves.len(), bfs.moves.len(), "depth={depth} seed={seed}");
            for r in [&bfs, &ida, &iddfs] {
                assert!(
                    replay_verify(&s.state, &r.moves).is_solved(),
                    "{} failed replay at depth={depth} seed={seed}",
                    r.algorithm_used
                );
            }
        }
    }
}

#[test]
fn dfs_solution_respects_depth_limit() {
    let s = scramble_seeded(3, 17).unwrap();
    let limited = policy().with_max_depth(5);
    let r = solve(&s.state, Algorithm::Dfs, &limited).unwrap();
    if r.is_goal_reached() {
        assert!(r.moves.len() <= 5);
        assert!(replay_verify(&s.state, &r.moves).is_solved());
    } else {
        assert!(r.moves.is_empty());
    }
}

#[test]
fn solved_start_for_every_strategy() {
    for algorithm in Algorithm::ALL {
        let r = solve(&CubeStateV1::solved(), algorithm, &policy()).unwrap();
        assert!(r.moves.is_empty());
        assert_eq!(r.nodes_explored, 0);
        assert_eq!(r.termination, TerminationReasonV1::GoalReached);
    }
}

#[test]
fn zero_length_scramble_rejected() {
    assert_eq!(
        scramble_seeded(0, 1).unwrap_err(),
        ScrambleError::InvalidArgument { count: 0 }
    );
}

#[test]
fn unknown_algorithm_rejected() {
    let s = scramble_seeded(2, 1).unwrap();
    assert!(matches!(
        solve_tagged(&s.state, "simulated_annealing", &policy()),
        Err(SearchError::UnsupportedAlgorithm { .. })
    ));
}
