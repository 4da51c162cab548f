//! Search entry point and the uniform result record.

use tracing::{debug, info};

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::moves::{format_moves, Move};

use crate::bfs::breadth_first;
use crate::budget::BudgetMeter;
use crate::dfs::{depth_first, iterative_deepening};
use crate::error::SearchError;
use crate::heuristic::{Heuristic, MisplacedFacelets};
use crate::ida_star::ida_star;
use crate::policy::{Algorithm, SearchPolicyV1};

/// Why a solve stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReasonV1 {
    /// The returned moves solve the start state.
    GoalReached,
    /// Every reachable state was examined without finding the goal.
    FrontierExhausted,
    /// No solution within `max_depth` (DFS, IDDFS) or threshold above it (IDA*).
    DepthLimitReached,
    /// `max_nodes` expansions were spent.
    NodeBudgetExceeded,
    /// The policy's `CancelToken` was set.
    Cancelled,
    /// The policy's deadline passed.
    DeadlineExceeded,
}

impl TerminationReasonV1 {
    /// Stable snake-case tag for reports and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimitReached => "depth_limit_reached",
            Self::NodeBudgetExceeded => "node_budget_exceeded",
            Self::Cancelled => "cancelled",
            Self::DeadlineExceeded => "deadline_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReasonV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform result of every strategy.
///
/// "Not found" is not an error: `moves` is empty, `nodes_explored` is the
/// actual count, and `termination` says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResultV1 {
    /// Solving sequence; empty when the start was solved or nothing was found.
    pub moves: Vec<Move>,
    /// Node expansions performed, summed over all iterations.
    pub nodes_explored: u64,
    pub algorithm_used: Algorithm,
    pub termination: TerminationReasonV1,
    /// Largest frontier (BFS) or stack (DFS, IDDFS, IDA*) observed.
    pub frontier_high_water: u64,
    /// Deepest expanded node.
    pub max_depth_reached: u32,
}

impl SolveResultV1 {
    /// `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }
}

/// What a strategy hands back; counters live in the [`BudgetMeter`].
#[derive(Debug)]
pub(crate) struct StrategyOutcome {
    moves: Vec<Move>,
    termination: TerminationReasonV1,
}

impl StrategyOutcome {
    pub(crate) fn found(moves: Vec<Move>) -> Self {
        Self {
            moves,
            termination: TerminationReasonV1::GoalReached,
        }
    }

    pub(crate) fn stopped(termination: TerminationReasonV1) -> Self {
        Self {
            moves: Vec::new(),
            termination,
        }
    }
}

/// Solve `start` with `algorithm`, using [`MisplacedFacelets`] for IDA*.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails pre-flight
/// validation. Budget exhaustion, depth limits and cancellation are reported
/// through [`SolveResultV1::termination`], not as errors.
pub fn solve(
    start: &CubeStateV1,
    algorithm: Algorithm,
    policy: &SearchPolicyV1,
) -> Result<SolveResultV1, SearchError> {
    solve_with_heuristic(start, algorithm, policy, &MisplacedFacelets)
}

/// Like [`solve`], selecting the strategy by tag (`bfs`, `dfs`, `iddfs`, `ida*`).
///
/// # Errors
///
/// Returns [`SearchError::UnsupportedAlgorithm`] for an unknown tag, and
/// anything [`solve`] returns.
pub fn solve_tagged(
    start: &CubeStateV1,
    tag: &str,
    policy: &SearchPolicyV1,
) -> Result<SolveResultV1, SearchError> {
    let algorithm: Algorithm = tag.parse()?;
    solve(start, algorithm, policy)
}

/// Solve with an explicit heuristic. Only IDA* consults it.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if the policy fails pre-flight
/// validation.
pub fn solve_with_heuristic(
    start: &CubeStateV1,
    algorithm: Algorithm,
    policy: &SearchPolicyV1,
    heuristic: &dyn Heuristic,
) -> Result<SolveResultV1, SearchError> {
    policy.validate()?;

    let mut meter = BudgetMeter::new(policy);
    let outcome = if start.is_solved() {
        debug!(%algorithm, "start state already solved");
        StrategyOutcome::found(Vec::new())
    } else {
        match algorithm {
            Algorithm::Bfs => breadth_first(start, &mut meter),
            Algorithm::Dfs => depth_first(start, &mut meter),
            Algorithm::Iddfs => iterative_deepening(start, &mut meter),
            Algorithm::IdaStar => ida_star(start, heuristic, &mut meter),
        }
    };

    let result = SolveResultV1 {
        moves: outcome.moves,
        nodes_explored: meter.expanded(),
        algorithm_used: algorithm,
        termination: outcome.termination,
        frontier_high_water: meter.high_water(),
        max_depth_reached: meter.deepest(),
    };
    info!(
        %algorithm,
        heuristic = heuristic.name(),
        termination = %result.termination,
        nodes = result.nodes_explored,
        length = result.moves.len(),
        moves = %format_moves(&result.moves),
        "solve finished"
    );
    Ok(result)
}
