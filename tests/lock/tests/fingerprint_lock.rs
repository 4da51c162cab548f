//! Golden fingerprints and digests.
//!
//! These values are part of every persisted report. A change here means old
//! reports no longer verify, so update them only with a schema version bump.

use sha2::{Digest, Sha256};

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::apply::apply_moves;
use quarterturn_kernel::operators::moves::parse_moves;
use quarterturn_kernel::proof::hash::canonical_hash;
use quarterturn_kernel::proof::hash_domain::HashDomain;

const SOLVED_LETTERS: &str = "WWWWWWWWWYYYYYYYYYGGGGGGGGGBBBBBBBBBOOOOOOOOORRRRRRRRR";
const SOLVED_STATE_HASH: &str =
    "sha256:b02af2369d031e302f11af9b9acae590acf2ebd99e8eab412e9d7c1d5bd81080";

const COMMUTATOR_LETTERS: &str = "WWOWWGWWGYYRYYYYYYGGYGGWGGGBRRBBBBBBBOOOOOOOORRWBRRWRR";
const COMMUTATOR_STATE_HASH: &str =
    "sha256:bffbed6480e975fe974f5f37853851b2b37f4818a83595d36e233662c0b60751";

const MOVE_SEQUENCE_HASH: &str =
    "sha256:cd72262ab673584265ec49d8fca37293a2f0edeefcb304b595ab4e19fd18cedb";

#[test]
fn solved_fingerprint_and_hash() {
    let fp = CubeStateV1::solved().fingerprint();
    assert_eq!(fp.to_string(), SOLVED_LETTERS);
    assert_eq!(
        canonical_hash(HashDomain::CubeState, fp.as_bytes()).as_str(),
        SOLVED_STATE_HASH
    );
}

#[test]
fn commutator_fingerprint_and_hash() {
    let state = apply_moves(&CubeStateV1::solved(), &parse_moves("R U R' U'").unwrap());
    let fp = state.fingerprint();
    assert_eq!(fp.to_string(), COMMUTATOR_LETTERS);
    assert_eq!(
        canonical_hash(HashDomain::CubeState, fp.as_bytes()).as_str(),
        COMMUTATOR_STATE_HASH
    );
    assert_eq!(CubeStateV1::from_facelets(COMMUTATOR_LETTERS).unwrap(), state);
}

#[test]
fn move_sequence_hash_over_codes() {
    let codes: Vec<u8> = parse_moves("R U R' U'")
        .unwrap()
        .iter()
        .map(|m| m.code())
        .collect();
    assert_eq!(codes, vec![10, 0, 11, 1]);
    assert_eq!(
        canonical_hash(HashDomain::MoveSequence, &codes).as_str(),
        MOVE_SEQUENCE_HASH
    );
}

#[test]
fn canonical_hash_is_plain_sha256_of_prefixed_bytes() {
    let fp = CubeStateV1::solved().fingerprint();
    let mut hasher = Sha256::new();
    hasher.update(HashDomain::CubeState.as_bytes());
    hasher.update(fp.as_bytes());
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
    assert_eq!(expected, SOLVED_STATE_HASH);
}
