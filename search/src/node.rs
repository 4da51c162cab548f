//! Search node: an exclusively owned state plus the path that reached it.

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::apply::apply_move;
use quarterturn_kernel::operators::moves::Move;

use crate::heuristic::Heuristic;

/// A node on a frontier or stack.
///
/// Each node owns its own `CubeStateV1`; children are built from a fresh
/// state returned by `apply_move`, so siblings never share a grid.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    pub state: CubeStateV1,
    /// Moves from the start state to `state`.
    pub path: Vec<Move>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Path cost; one per quarter-turn.
    pub g_cost: u32,
    /// Heuristic estimate for `state` (0 when the strategy ignores it).
    pub h_cost: u32,
}

impl SearchNodeV1 {
    /// Root node for `state`.
    #[must_use]
    pub fn root(state: CubeStateV1, heuristic: &dyn Heuristic) -> Self {
        let h_cost = heuristic.estimate(&state);
        Self {
            state,
            path: Vec::new(),
            depth: 0,
            g_cost: 0,
            h_cost,
        }
    }

    /// Child reached by applying `mv`.
    #[must_use]
    pub fn child(&self, mv: Move, heuristic: &dyn Heuristic) -> Self {
        let state = apply_move(&self.state, mv);
        let h_cost = heuristic.estimate(&state);
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(mv);
        Self {
            state,
            path,
            depth: self.depth + 1,
            g_cost: self.g_cost + 1,
            h_cost,
        }
    }

    /// `f = g + h`, the IDA* pruning key.
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// The move that produced this node, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.path.last().copied()
    }
}
