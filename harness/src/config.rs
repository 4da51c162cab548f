//! Trial configuration: optional overrides resolved against fixed defaults.
//!
//! Resolution is deterministic; nothing is read from the environment.

use quarterturn_search::policy::{Algorithm, SearchPolicyV1};

/// Scramble length when none is configured.
pub const DEFAULT_SCRAMBLE_DEPTH: usize = 6;
/// Seed when none is configured.
pub const DEFAULT_SEED: u64 = 0;
const DEFAULT_MAX_NODES: u64 = 2_000_000;
const DEFAULT_MAX_DEPTH: u32 = 20;

/// Overrides for a single trial. `None` fields use defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialConfig {
    pub scramble_depth: Option<usize>,
    pub seed: Option<u64>,
    /// `None` lets [`Algorithm::for_scramble_depth`] choose.
    pub algorithm: Option<Algorithm>,
    pub max_nodes: Option<u64>,
    pub max_depth: Option<u32>,
}

/// A fully resolved trial: every knob has a concrete value.
#[derive(Debug, Clone)]
pub struct ResolvedTrial {
    pub scramble_depth: usize,
    pub seed: u64,
    pub algorithm: Algorithm,
    pub policy: SearchPolicyV1,
}

impl TrialConfig {
    /// Fill in defaults.
    #[must_use]
    pub fn resolve(&self) -> ResolvedTrial {
        let scramble_depth = self.scramble_depth.unwrap_or(DEFAULT_SCRAMBLE_DEPTH);
        let policy = SearchPolicyV1::default()
            .with_max_nodes(self.max_nodes.unwrap_or(DEFAULT_MAX_NODES))
            .with_max_depth(self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH));
        ResolvedTrial {
            scramble_depth,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            algorithm: self
                .algorithm
                .unwrap_or_else(|| Algorithm::for_scramble_depth(scramble_depth)),
            policy,
        }
    }
}
