//! FIFO frontier with a fingerprint visited set, for breadth-first search.
//!
//! The visited set is only probed, never iterated, so a `HashSet` keeps the
//! search deterministic.

use std::collections::{HashSet, VecDeque};

use quarterturn_kernel::carrier::cube_state::Fingerprint;

use crate::node::SearchNodeV1;

/// Level-order frontier. A fingerprint is marked visited when first pushed.
#[derive(Debug, Default)]
pub struct BreadthFirstFrontier {
    queue: VecDeque<SearchNodeV1>,
    visited: HashSet<Fingerprint>,
}

impl BreadthFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `node` unless its state was already seen.
    ///
    /// Returns `false` if the fingerprint was already visited (node dropped).
    pub fn push(&mut self, node: SearchNodeV1) -> bool {
        if !self.visited.insert(node.state.fingerprint()) {
            return false;
        }
        self.queue.push_back(node);
        true
    }

    /// Dequeue the oldest node.
    pub fn pop(&mut self) -> Option<SearchNodeV1> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn is_visited(&self, fingerprint: &Fingerprint) -> bool {
        self.visited.contains(fingerprint)
    }

    /// Nodes waiting to be dequeued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Distinct states ever enqueued.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
