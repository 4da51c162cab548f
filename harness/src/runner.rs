//! Trial runner: scramble, solve, replay, report.
//!
//! # Pipeline
//!
//! ```text
//! TrialConfig::resolve() → scramble_seeded() → solve()
//!   → replay_verify() → build_report()
//! ```
//!
//! The runner only orchestrates kernel and search APIs; it never decides
//! on its own whether a solution is correct. Replay does that.

use tracing::{info, info_span};

use quarterturn_kernel::operators::scramble::{scramble_seeded, ScrambleError, ScrambleV1};
use quarterturn_kernel::proof::replay::{replay_verify, ReplayVerdict};
use quarterturn_search::error::SearchError;
use quarterturn_search::policy::Algorithm;
use quarterturn_search::search::{solve, SolveResultV1};

use crate::config::TrialConfig;
use crate::report::{build_report, ReportError, SolveReportV1};

/// Error during a trial run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Scramble request rejected.
    Scramble(ScrambleError),
    /// Search rejected the policy or algorithm before running.
    Search(SearchError),
    /// Search claimed a goal but replaying its moves did not solve the state.
    SolutionDivergence { end_fingerprint: String },
    /// Report construction failed.
    Report(ReportError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scramble(e) => write!(f, "scramble failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::SolutionDivergence { end_fingerprint } => {
                write!(f, "solution does not replay to solved; ended at {end_fingerprint}")
            }
            Self::Report(e) => write!(f, "report failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ScrambleError> for RunError {
    fn from(e: ScrambleError) -> Self {
        Self::Scramble(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ReportError> for RunError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Everything a trial produced.
#[derive(Debug, Clone)]
pub struct TrialOutcomeV1 {
    pub seed: u64,
    pub scramble: ScrambleV1,
    pub algorithm: Algorithm,
    pub result: SolveResultV1,
    /// Replay of `result.moves` against `scramble.state`.
    pub verdict: ReplayVerdict,
    pub report: SolveReportV1,
}

/// Run one seeded trial.
///
/// A search that stops without a solution (budget, depth, cancellation) is
/// a normal outcome: the verdict is `Unsolved` and the report records why.
///
/// # Errors
///
/// Returns [`RunError::SolutionDivergence`] if the search reported a goal
/// that replay does not confirm, and wraps scramble, search and report
/// failures.
pub fn run_trial(config: &TrialConfig) -> Result<TrialOutcomeV1, RunError> {
    let trial = config.resolve();
    let span = info_span!(
        "trial",
        seed = trial.seed,
        depth = trial.scramble_depth,
        algorithm = %trial.algorithm
    );
    let _guard = span.enter();

    let scramble = scramble_seeded(trial.scramble_depth, trial.seed)?;
    let result = solve(&scramble.state, trial.algorithm, &trial.policy)?;
    let verdict = replay_verify(&scramble.state, &result.moves);

    if result.is_goal_reached() {
        if let ReplayVerdict::Unsolved { fingerprint } = &verdict {
            return Err(RunError::SolutionDivergence {
                end_fingerprint: fingerprint.to_string(),
            });
        }
    }

    let report = build_report(&scramble, trial.seed, &result, &trial.policy)?;
    info!(
        digest = report.digest().as_str(),
        solved = verdict.is_solved(),
        "trial complete"
    );

    Ok(TrialOutcomeV1 {
        seed: trial.seed,
        scramble,
        algorithm: trial.algorithm,
        result,
        verdict,
        report,
    })
}
