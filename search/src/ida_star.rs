//! IDA*: depth-first passes bounded by `f = g + h`, on an explicit stack.
//!
//! Each pass prunes nodes with `f` above the threshold and remembers the
//! smallest pruned `f`; that value becomes the next threshold. With an
//! admissible heuristic and the full move set the first solution is
//! move-optimal.

use tracing::debug;

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::moves::Move;

use crate::budget::BudgetMeter;
use crate::heuristic::Heuristic;
use crate::node::SearchNodeV1;
use crate::search::{StrategyOutcome, TerminationReasonV1};

enum Pass {
    Found(Vec<Move>),
    /// Minimum `f` that exceeded the threshold, `None` if nothing was pruned.
    Exhausted { next_threshold: Option<u32> },
}

fn bounded_pass(
    start: &CubeStateV1,
    threshold: u32,
    heuristic: &dyn Heuristic,
    meter: &mut BudgetMeter<'_>,
) -> Result<Pass, TerminationReasonV1> {
    let moves = meter.policy().move_set.as_slice();
    let mut stack = vec![SearchNodeV1::root(start.clone(), heuristic)];
    let mut next_threshold: Option<u32> = None;

    while let Some(node) = stack.pop() {
        let f = node.f_cost();
        if f > threshold {
            next_threshold = Some(next_threshold.map_or(f, |t| t.min(f)));
            continue;
        }
        if node.state.is_solved() {
            return Ok(Pass::Found(node.path));
        }
        meter.charge(node.depth)?;
        let undo = node.last_move().map(Move::inverse);
        for &mv in moves.iter().rev() {
            if Some(mv) == undo {
                continue;
            }
            stack.push(node.child(mv, heuristic));
        }
        meter.observe_frontier(stack.len())?;
    }

    Ok(Pass::Exhausted { next_threshold })
}

pub(crate) fn ida_star(
    start: &CubeStateV1,
    heuristic: &dyn Heuristic,
    meter: &mut BudgetMeter<'_>,
) -> StrategyOutcome {
    let max_depth = meter.policy().max_depth;
    let mut threshold = heuristic.estimate(start);
    loop {
        if threshold > max_depth {
            return StrategyOutcome::stopped(TerminationReasonV1::DepthLimitReached);
        }
        debug!(threshold, expanded = meter.expanded(), "ida* iteration");
        match bounded_pass(start, threshold, heuristic, meter) {
            Ok(Pass::Found(path)) => return StrategyOutcome::found(path),
            Ok(Pass::Exhausted {
                next_threshold: Some(next),
            }) => threshold = next,
            Ok(Pass::Exhausted {
                next_threshold: None,
            }) => return StrategyOutcome::stopped(TerminationReasonV1::FrontierExhausted),
            Err(reason) => return StrategyOutcome::stopped(reason),
        }
    }
}
