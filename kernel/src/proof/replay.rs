//! `replay_verify()`: check a solution by re-applying it from the start state.
//!
//! Replay is how every caller (tests, harness, fixtures) confirms a search
//! result. It never trusts the search's own notion of "solved".

use crate::carrier::cube_state::{CubeStateV1, Fingerprint};
use crate::operators::apply::{apply_move, apply_move_code, ApplyFailure};
use crate::operators::moves::Move;

/// Outcome of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// The moves carry the start state to the solved state.
    Solved,
    /// Replay finished on an unsolved state with this fingerprint.
    Unsolved { fingerprint: Fingerprint },
}

impl ReplayVerdict {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved)
    }
}

/// Apply `moves` to `start` in order and report whether the result is solved.
#[must_use]
pub fn replay_verify(start: &CubeStateV1, moves: &[Move]) -> ReplayVerdict {
    let end = moves
        .iter()
        .fold(start.clone(), |state, &mv| apply_move(&state, mv));
    verdict_for(&end)
}

/// Same as [`replay_verify`] over raw move codes, as stored in reports.
///
/// # Errors
///
/// Returns [`ApplyFailure::InvalidMove`] for the first code outside `0..12`.
pub fn replay_verify_codes(start: &CubeStateV1, codes: &[u8]) -> Result<ReplayVerdict, ApplyFailure> {
    let mut state = start.clone();
    for &code in codes {
        state = apply_move_code(&state, code)?;
    }
    Ok(verdict_for(&state))
}

fn verdict_for(end: &CubeStateV1) -> ReplayVerdict {
    if end.is_solved() {
        ReplayVerdict::Solved
    } else {
        ReplayVerdict::Unsolved {
            fingerprint: end.fingerprint(),
        }
    }
}
