//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal, budget exhaustion, depth limit, cancellation) are expressed via
//! [`crate::search::TerminationReasonV1`] on a successful result.

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is created, so no counters are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy selector did not name one of the four strategies.
    UnsupportedAlgorithm { tag: String },
    /// The policy cannot drive a search (empty move set, zero check interval).
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { tag } => {
                write!(f, "unsupported algorithm: {tag:?}")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
