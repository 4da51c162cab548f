//! Admissible distance estimates for IDA*.
//!
//! A quarter-turn carries exactly twelve facelets onto a different face: the
//! four bordering strips, each one edge facelet between two corner facelets.
//! Facelets of the turned face stay on that face, and centers never move.
//! So one move changes the misplaced status of at most 4 edge facelets and
//! 8 corner facelets, which bounds the remaining distance from below.

use quarterturn_kernel::carrier::cube_state::CubeStateV1;

/// Lower bound on the number of moves needed to solve a state.
///
/// Implementations must return 0 for the solved state and never exceed the
/// true distance over the full move set.
pub trait Heuristic {
    fn estimate(&self, state: &CubeStateV1) -> u32;

    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;
}

/// Counts facelets off their face's canonical color, split by edge and corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct MisplacedFacelets;

/// Edge facelets one quarter-turn can move between faces.
const EDGES_PER_MOVE: u32 = 4;
/// Corner facelets one quarter-turn can move between faces.
const CORNERS_PER_MOVE: u32 = 8;

impl MisplacedFacelets {
    /// `(misplaced edge facelets, misplaced corner facelets)`.
    #[must_use]
    pub fn counts(state: &CubeStateV1) -> (u32, u32) {
        let mut edges = 0;
        let mut corners = 0;
        for (face, row, col, color) in state.facelets() {
            if color == face.canonical_color() {
                continue;
            }
            match (row == 1, col == 1) {
                (true, true) => {}
                (true, false) | (false, true) => edges += 1,
                (false, false) => corners += 1,
            }
        }
        (edges, corners)
    }
}

impl Heuristic for MisplacedFacelets {
    fn estimate(&self, state: &CubeStateV1) -> u32 {
        let (edges, corners) = Self::counts(state);
        edges
            .div_ceil(EDGES_PER_MOVE)
            .max(corners.div_ceil(CORNERS_PER_MOVE))
    }

    fn name(&self) -> &'static str {
        "misplaced_facelets"
    }
}

/// Always 0. Makes IDA* behave as cost-bounded iterative deepening.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _state: &CubeStateV1) -> u32 {
        0
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}
