//! Per-call expansion accounting: node budget, cancellation, deadline.

use std::time::Instant;

use tracing::warn;

use crate::policy::SearchPolicyV1;
use crate::search::TerminationReasonV1;

/// Counts expansions for one `solve` call and decides when to stop.
///
/// Shared across IDDFS and IDA* iterations, so the budget is cumulative.
#[derive(Debug)]
pub(crate) struct BudgetMeter<'p> {
    policy: &'p SearchPolicyV1,
    expanded: u64,
    high_water: u64,
    deepest: u32,
}

impl<'p> BudgetMeter<'p> {
    pub(crate) fn new(policy: &'p SearchPolicyV1) -> Self {
        Self {
            policy,
            expanded: 0,
            high_water: 0,
            deepest: 0,
        }
    }

    /// Account for one expansion, or return why the search must stop first.
    ///
    /// Cancellation and the deadline are polled when the count is a multiple
    /// of `check_interval`, which includes the very first expansion.
    pub(crate) fn charge(&mut self, depth: u32) -> Result<(), TerminationReasonV1> {
        if self.expanded >= self.policy.max_nodes {
            warn!(
                max_nodes = self.policy.max_nodes,
                "node budget exhausted before a solution was found"
            );
            return Err(TerminationReasonV1::NodeBudgetExceeded);
        }
        if self.expanded % self.policy.check_interval == 0 {
            if self
                .policy
                .cancel
                .as_ref()
                .is_some_and(crate::policy::CancelToken::is_cancelled)
            {
                return Err(TerminationReasonV1::Cancelled);
            }
            if self
                .policy
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                return Err(TerminationReasonV1::DeadlineExceeded);
            }
        }
        self.expanded += 1;
        self.deepest = self.deepest.max(depth);
        Ok(())
    }

    /// Admit a frontier or stack of `len` nodes.
    ///
    /// A size above `max_frontier_size` is refused and not recorded, so the
    /// high-water mark never exceeds the cap.
    pub(crate) fn observe_frontier(&mut self, len: usize) -> Result<(), TerminationReasonV1> {
        let len = len as u64;
        if len > self.policy.max_frontier_size {
            warn!(
                max_frontier_size = self.policy.max_frontier_size,
                "frontier cap reached before a solution was found"
            );
            return Err(TerminationReasonV1::NodeBudgetExceeded);
        }
        self.high_water = self.high_water.max(len);
        Ok(())
    }

    pub(crate) const fn expanded(&self) -> u64 {
        self.expanded
    }

    pub(crate) const fn high_water(&self) -> u64 {
        self.high_water
    }

    pub(crate) const fn deepest(&self) -> u32 {
        self.deepest
    }

    pub(crate) const fn policy(&self) -> &'p SearchPolicyV1 {
        self.policy
    }
}
