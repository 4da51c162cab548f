//! Random scrambles: a legal state plus the exact moves that produced it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::carrier::cube_state::CubeStateV1;
use crate::operators::apply::apply_move;
use crate::operators::moves::{Move, MOVE_COUNT};

/// A scrambled state and the moves applied to the solved state to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleV1 {
    pub state: CubeStateV1,
    pub moves: Vec<Move>,
}

/// Scramble request rejected before any move was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The move count must be positive.
    InvalidArgument { count: usize },
}

impl std::fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { count } => {
                write!(f, "invalid argument: scramble count must be positive, got {count}")
            }
        }
    }
}

impl std::error::Error for ScrambleError {}

/// Draw `count` moves uniformly from all twelve and apply them to a solved state.
///
/// Consecutive moves are independent draws, so a move may be followed by its
/// own inverse.
///
/// # Errors
///
/// Returns [`ScrambleError::InvalidArgument`] when `count` is zero.
pub fn scramble<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<ScrambleV1, ScrambleError> {
    if count == 0 {
        return Err(ScrambleError::InvalidArgument { count });
    }

    let moves: Vec<Move> = (0..count)
        .map(|_| Move::ALL[rng.gen_range(0..MOVE_COUNT)])
        .collect();
    let state = moves
        .iter()
        .fold(CubeStateV1::solved(), |acc, &mv| apply_move(&acc, mv));

    Ok(ScrambleV1 { state, moves })
}

/// Reproducible scramble: same `(count, seed)` gives the same moves in every process.
///
/// # Errors
///
/// Returns [`ScrambleError::InvalidArgument`] when `count` is zero.
pub fn scramble_seeded(count: usize, seed: u64) -> Result<ScrambleV1, ScrambleError> {
    let mut rng = StdRng::seed_from_u64(seed);
    scramble(count, &mut rng)
}
