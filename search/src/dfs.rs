//! Depth-limited DFS and iterative deepening, on an explicit stack.

use tracing::debug;

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::moves::Move;

use crate::budget::BudgetMeter;
use crate::heuristic::ZeroHeuristic;
use crate::node::SearchNodeV1;
use crate::search::{StrategyOutcome, TerminationReasonV1};

/// Result of one depth-limited pass.
enum Pass {
    Found(Vec<Move>),
    /// Nothing at or below the limit. `cut_off` is true if some branch was
    /// cut at the limit, i.e. a deeper pass could still succeed.
    Exhausted { cut_off: bool },
}

/// Depth-first search to `limit`, no visited set, moves in move-set order.
fn depth_limited(
    start: &CubeStateV1,
    limit: u32,
    meter: &mut BudgetMeter<'_>,
) -> Result<Pass, TerminationReasonV1> {
    let moves = meter.policy().move_set.as_slice();
    let mut stack = vec![SearchNodeV1::root(start.clone(), &ZeroHeuristic)];
    let mut cut_off = false;

    while let Some(node) = stack.pop() {
        if node.state.is_solved() {
            return Ok(Pass::Found(node.path));
        }
        if node.depth >= limit {
            cut_off = true;
            continue;
        }
        meter.charge(node.depth)?;
        // Reverse push so the first move in the set is explored first.
        for &mv in moves.iter().rev() {
            stack.push(node.child(mv, &ZeroHeuristic));
        }
        meter.observe_frontier(stack.len())?;
    }

    Ok(Pass::Exhausted { cut_off })
}

fn not_found(cut_off: bool) -> StrategyOutcome {
    if cut_off {
        StrategyOutcome::stopped(TerminationReasonV1::DepthLimitReached)
    } else {
        StrategyOutcome::stopped(TerminationReasonV1::FrontierExhausted)
    }
}

/// Single depth-limited pass at `policy.max_depth`. First path found wins.
pub(crate) fn depth_first(start: &CubeStateV1, meter: &mut BudgetMeter<'_>) -> StrategyOutcome {
    let limit = meter.policy().max_depth;
    match depth_limited(start, limit, meter) {
        Ok(Pass::Found(path)) => StrategyOutcome::found(path),
        Ok(Pass::Exhausted { cut_off }) => not_found(cut_off),
        Err(reason) => StrategyOutcome::stopped(reason),
    }
}

/// Depth-limited passes at limits `1..=max_depth` sharing one budget.
pub(crate) fn iterative_deepening(
    start: &CubeStateV1,
    meter: &mut BudgetMeter<'_>,
) -> StrategyOutcome {
    let max_depth = meter.policy().max_depth;
    let mut cut_off = true;
    for limit in 1..=max_depth {
        debug!(limit, expanded = meter.expanded(), "iddfs iteration");
        match depth_limited(start, limit, meter) {
            Ok(Pass::Found(path)) => return StrategyOutcome::found(path),
            Ok(Pass::Exhausted { cut_off: false }) => {
                cut_off = false;
                break;
            }
            Ok(Pass::Exhausted { cut_off: true }) => {}
            Err(reason) => return StrategyOutcome::stopped(reason),
        }
    }
    not_found(cut_off)
}
