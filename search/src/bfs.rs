//! Breadth-first search: shortest solution over the configured move set.

use tracing::debug;

use quarterturn_kernel::carrier::cube_state::CubeStateV1;

use crate::budget::BudgetMeter;
use crate::frontier::BreadthFirstFrontier;
use crate::heuristic::ZeroHeuristic;
use crate::node::SearchNodeV1;
use crate::search::{StrategyOutcome, TerminationReasonV1};

/// Level-order search seeded with `start`. Goal test on dequeue.
///
/// A child is admitted only if the queue stays within `max_frontier_size`,
/// which bounds BFS memory independently of the expansion budget.
pub(crate) fn breadth_first(start: &CubeStateV1, meter: &mut BudgetMeter<'_>) -> StrategyOutcome {
    let move_set = &meter.policy().move_set;
    let mut frontier = BreadthFirstFrontier::new();
    if let Err(reason) = meter.observe_frontier(1) {
        return StrategyOutcome::stopped(reason);
    }
    frontier.push(SearchNodeV1::root(start.clone(), &ZeroHeuristic));

    let mut level = 0;
    while let Some(node) = frontier.pop() {
        if node.state.is_solved() {
            return StrategyOutcome::found(node.path);
        }
        if node.depth > level {
            level = node.depth;
            debug!(
                level,
                queued = frontier.len(),
                visited = frontier.visited_count(),
                "bfs level"
            );
        }
        if let Err(reason) = meter.charge(node.depth) {
            return StrategyOutcome::stopped(reason);
        }
        for mv in move_set.iter() {
            let child = node.child(mv, &ZeroHeuristic);
            if frontier.is_visited(&child.state.fingerprint()) {
                continue;
            }
            if let Err(reason) = meter.observe_frontier(frontier.len() + 1) {
                return StrategyOutcome::stopped(reason);
            }
            frontier.push(child);
        }
    }

    StrategyOutcome::stopped(TerminationReasonV1::FrontierExhausted)
}
