//! `apply_move()`: apply one quarter-turn to a `CubeStateV1`, producing a new state.
//!
//! Two-phase application:
//! 1. Read: copy the four bordering strips into a buffer and rotate the
//!    turned face's grid into a fresh grid.
//! 2. Write: lay the rotated grid and the cycled strips into a copy of the
//!    input.
//!
//! No destination is written before every source has been read, and the
//! caller's state is never touched. Validation of untyped input
//! ([`apply_move_code`]) happens before phase 1.

use crate::carrier::cube_state::CubeStateV1;
use crate::carrier::facelet::Face;
use crate::operators::moves::{Move, Turn};

/// The rejected input behind an [`ApplyFailure::InvalidMove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInput {
    /// Numeric move code outside `0..12`.
    Code(u8),
    /// Text that is not a face letter with an optional `'`.
    Notation(String),
}

impl std::fmt::Display for MoveInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "code {code} is outside 0..12"),
            Self::Notation(notation) => write!(f, "unrecognized notation {notation:?}"),
        }
    }
}

/// Typed failure for move parsing and application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// The input does not name one of the twelve quarter-turns.
    InvalidMove { input: MoveInput },
}

impl ApplyFailure {
    #[must_use]
    pub const fn invalid_code(code: u8) -> Self {
        Self::InvalidMove {
            input: MoveInput::Code(code),
        }
    }

    #[must_use]
    pub fn invalid_notation(notation: &str) -> Self {
        Self::InvalidMove {
            input: MoveInput::Notation(notation.to_string()),
        }
    }
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMove { input } => write!(f, "invalid move: {input}"),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// A three-facelet strip on a face bordering the turned face.
type Strip = [(Face, usize, usize); 3];

/// The four strips bordering `face`, in clockwise cycle order.
///
/// A clockwise turn moves strip `i` onto strip `i + 1` (mod 4); entries at
/// the same position within each strip map onto each other.
const fn border_strips(face: Face) -> [Strip; 4] {
    use Face::{Back as B, Down as D, Front as F, Left as L, Right as R, Up as U};
    match face {
        Face::Up => [
            [(F, 0, 0), (F, 0, 1), (F, 0, 2)],
            [(L, 0, 0), (L, 0, 1), (L, 0, 2)],
            [(B, 0, 0), (B, 0, 1), (B, 0, 2)],
            [(R, 0, 0), (R, 0, 1), (R, 0, 2)],
        ],
        Face::Down => [
            [(F, 2, 0), (F, 2, 1), (F, 2, 2)],
            [(R, 2, 0), (R, 2, 1), (R, 2, 2)],
            [(B, 2, 0), (B, 2, 1), (B, 2, 2)],
            [(L, 2, 0), (L, 2, 1), (L, 2, 2)],
        ],
        Face::Front => [
            [(U, 2, 0), (U, 2, 1), (U, 2, 2)],
            [(R, 0, 0), (R, 1, 0), (R, 2, 0)],
            [(D, 0, 2), (D, 0, 1), (D, 0, 0)],
            [(L, 2, 2), (L, 1, 2), (L, 0, 2)],
        ],
        Face::Back => [
            [(U, 0, 0), (U, 0, 1), (U, 0, 2)],
            [(L, 2, 0), (L, 1, 0), (L, 0, 0)],
            [(D, 2, 2), (D, 2, 1), (D, 2, 0)],
            [(R, 0, 2), (R, 1, 2), (R, 2, 2)],
        ],
        Face::Left => [
            [(U, 0, 0), (U, 1, 0), (U, 2, 0)],
            [(F, 0, 0), (F, 1, 0), (F, 2, 0)],
            [(D, 0, 0), (D, 1, 0), (D, 2, 0)],
            [(B, 2, 2), (B, 1, 2), (B, 0, 2)],
        ],
        Face::Right => [
            [(U, 0, 2), (U, 1, 2), (U, 2, 2)],
            [(B, 2, 0), (B, 1, 0), (B, 0, 0)],
            [(D, 0, 2), (D, 1, 2), (D, 2, 2)],
            [(F, 0, 2), (F, 1, 2), (F, 2, 2)],
        ],
    }
}

/// Rotate a 3×3 grid a quarter-turn.
fn rotate_grid<T: Copy>(old: &[[T; 3]; 3], turn: Turn) -> [[T; 3]; 3] {
    let mut new = *old;
    for (row, cells) in new.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = match turn {
                Turn::Clockwise => old[2 - col][row],
                Turn::CounterClockwise => old[col][2 - row],
            };
        }
    }
    new
}

/// Apply `mv` to any six-face grid. Generic so the permutation itself can be
/// checked with distinct labels in tests.
pub(crate) fn turn_faces<T: Copy>(faces: &[[[T; 3]; 3]; 6], mv: Move) -> [[[T; 3]; 3]; 6] {
    let face = mv.face();
    let strips = border_strips(face);

    // Phase 1: read every source.
    let mut buffer = [[faces[0][0][0]; 3]; 4];
    for (slot, strip) in buffer.iter_mut().zip(strips.iter()) {
        for (cell, &(f, row, col)) in slot.iter_mut().zip(strip.iter()) {
            *cell = faces[f.index()][row][col];
        }
    }
    let rotated = rotate_grid(&faces[face.index()], mv.turn());

    // Phase 2: write.
    let mut out = *faces;
    out[face.index()] = rotated;
    for (i, strip) in strips.iter().enumerate() {
        let source = match mv.turn() {
            Turn::Clockwise => &buffer[(i + 3) % 4],
            Turn::CounterClockwise => &buffer[(i + 1) % 4],
        };
        for (&(f, row, col), &value) in strip.iter().zip(source.iter()) {
            out[f.index()][row][col] = value;
        }
    }
    out
}

/// Apply one quarter-turn, returning the new state.
#[must_use]
pub fn apply_move(state: &CubeStateV1, mv: Move) -> CubeStateV1 {
    CubeStateV1::from_faces(turn_faces(state.faces(), mv))
}

/// Apply a sequence of moves left to right.
#[must_use]
pub fn apply_moves(state: &CubeStateV1, moves: &[Move]) -> CubeStateV1 {
    moves
        .iter()
        .fold(state.clone(), |acc, &mv| apply_move(&acc, mv))
}

/// Apply a move given by its numeric code.
///
/// # Errors
///
/// Returns [`ApplyFailure::InvalidMove`] if `code` is not in `0..12`.
/// The input state is borrowed immutably, so it is unchanged either way.
pub fn apply_move_code(state: &CubeStateV1, code: u8) -> Result<CubeStateV1, ApplyFailure> {
    let mv = Move::try_from(code)?;
    Ok(apply_move(state, mv))
}
