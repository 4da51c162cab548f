//! Move engine laws over seeded random states.
//!
//! Proves:
//! 1. Every move is undone by its inverse, from any state
//! 2. Every quarter-turn has order 4
//! 3. Fingerprint equality coincides with state equality
//! 4. Known group identities (commuting opposite faces, `R U R' U'` has order 6)

use rand::rngs::StdRng;
use rand::SeedableRng;

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::apply::{apply_move, apply_move_code, apply_moves};
use quarterturn_kernel::operators::moves::{parse_moves, Move};
use quarterturn_kernel::operators::scramble::scramble;

fn random_states(count: usize, seed: u64) -> Vec<CubeStateV1> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| scramble(5 + i % 20, &mut rng).unwrap().state)
        .collect()
}

#[test]
fn inverse_undoes_every_move_from_random_states() {
    for state in random_states(40, 1) {
        for mv in Move::ALL {
            let there = apply_move(&state, mv);
            assert_eq!(apply_move(&there, mv.inverse()), state, "{mv}");
        }
    }
}

#[test]
fn every_move_has_order_four() {
    for state in random_states(20, 2) {
        for mv in Move::ALL {
            assert_eq!(apply_moves(&state, &[mv; 4]), state, "{mv}");
        }
    }
}

#[test]
fn fingerprint_equality_matches_state_equality() {
    let states = random_states(30, 3);
    for a in &states {
        for b in &states {
            assert_eq!(a == b, a.fingerprint() == b.fingerprint());
        }
    }
}

#[test]
fn move_then_inverse_and_four_turns() {
    let solved = CubeStateV1::solved();
    assert!(apply_moves(&solved, &[Move::R, Move::R_PRIME]).is_solved());
    assert_eq!(apply_moves(&solved, &[Move::U; 4]), solved);
}

#[test]
fn opposite_faces_commute_adjacent_do_not() {
    let s = CubeStateV1::solved();
    assert_eq!(
        apply_moves(&s, &parse_moves("U D").unwrap()),
        apply_moves(&s, &parse_moves("D U").unwrap())
    );
    assert_eq!(
        apply_moves(&s, &parse_moves("R L'").unwrap()),
        apply_moves(&s, &parse_moves("L' R").unwrap())
    );
    assert_ne!(
        apply_moves(&s, &parse_moves("R U").unwrap()),
        apply_moves(&s, &parse_moves("U R").unwrap())
    );
}

#[test]
fn commutator_r_u_has_order_six() {
    let sexy = parse_moves("R U R' U'").unwrap();
    let mut state = CubeStateV1::solved();
    for i in 1..=6 {
        state = apply_moves(&state, &sexy);
        assert_eq!(state.is_solved(), i == 6, "after {i} repetitions");
    }
}

#[test]
fn invalid_code_leaves_state_untouched() {
    let state = random_states(1, 4).remove(0);
    let before = state.clone();
    assert!(apply_move_code(&state, 12).is_err());
    assert_eq!(state, before);
}
