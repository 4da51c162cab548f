//! Search policy types: per-call budgets, strategy selection, cancellation.
//!
//! Nothing here is engine-global. Every `solve` call receives its own
//! [`SearchPolicyV1`], so independent solves can run side by side.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use quarterturn_kernel::operators::moves::MoveSetV1;

use crate::error::SearchError;

/// Budget, depth cutoff and move set for a single solve.
#[derive(Debug, Clone)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions, shared across all iterations of a call.
    pub max_nodes: u64,
    /// Depth limit for DFS, maximum limit for IDDFS, maximum threshold for IDA*.
    /// BFS ignores it.
    pub max_depth: u32,
    /// Hard cap on queued nodes (BFS) or stacked nodes (DFS, IDDFS, IDA*).
    /// Hitting it ends the search with `NodeBudgetExceeded`.
    pub max_frontier_size: u64,
    /// Moves every strategy branches over, in expansion order.
    pub move_set: MoveSetV1,
    /// Cancellation and deadline are checked every this many expansions.
    pub check_interval: u64,
    /// Optional wall-clock deadline.
    pub deadline: Option<Instant>,
    /// Optional cooperative cancellation flag.
    pub cancel: Option<CancelToken>,
}

impl SearchPolicyV1 {
    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the move set is empty, or
    /// `check_interval` or `max_frontier_size` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.move_set.is_empty() {
            return Err(SearchError::InvalidPolicy {
                detail: "move set is empty".into(),
            });
        }
        if self.max_frontier_size == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        if self.check_interval == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "check_interval must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Same policy with a different node budget.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Same policy with a different frontier cap.
    #[must_use]
    pub fn with_max_frontier_size(mut self, max_frontier_size: u64) -> Self {
        self.max_frontier_size = max_frontier_size;
        self
    }

    /// Same policy with a different depth cutoff.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_nodes: 2_000_000,
            max_depth: 20,
            max_frontier_size: 1_000_000,
            move_set: MoveSetV1::full(),
            check_interval: 1024,
            deadline: None,
            cancel: None,
        }
    }
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Searches stop at their next check.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The four interchangeable strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Iddfs,
    IdaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Iddfs, Self::IdaStar];

    /// Canonical tag, as accepted by `FromStr` and written in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Iddfs => "iddfs",
            Self::IdaStar => "ida*",
        }
    }

    /// Default strategy for a scramble of `depth` moves: BFS up to 4,
    /// IDDFS up to 6, IDA* beyond.
    #[must_use]
    pub const fn for_scramble_depth(depth: usize) -> Self {
        match depth {
            0..=4 => Self::Bfs,
            5..=6 => Self::Iddfs,
            _ => Self::IdaStar,
        }
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// Case-insensitive. `ida*`, `idastar` and `ida_star` all select IDA*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "iddfs" => Ok(Self::Iddfs),
            "ida*" | "idastar" | "ida_star" => Ok(Self::IdaStar),
            _ => Err(SearchError::UnsupportedAlgorithm { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
