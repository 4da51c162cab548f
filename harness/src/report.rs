//! Solve report: canonical JSON record of one trial plus its content digest.
//!
//! # Shape (`solve_report.v1`)
//!
//! ```text
//! {
//!   "algorithm": "ida*",
//!   "policy": {"max_depth", "max_frontier_size", "max_nodes", "move_set"},
//!   "scramble": {"depth", "move_codes", "moves", "seed"},
//!   "schema_version": "solve_report.v1",
//!   "search": {"frontier_high_water", "max_depth_reached", "nodes_explored", "termination"},
//!   "solution": {"length", "move_codes", "moves", "sequence_hash"},
//!   "start_fingerprint": "<54 color letters>",
//!   "start_state_hash": "sha256:..."
//! }
//! ```
//!
//! Keys are shown sorted because the bytes are canonical JSON. The digest is
//! `canonical_hash(SolveReport, bytes)`. Wall-clock data never enters a report,
//! so equal inputs give byte-identical reports across processes.

use quarterturn_kernel::carrier::cube_state::CubeStateV1;
use quarterturn_kernel::operators::moves::{format_moves, Move};
use quarterturn_kernel::operators::scramble::ScrambleV1;
use quarterturn_kernel::proof::canon::canonical_json_bytes;
use quarterturn_kernel::proof::hash::{canonical_hash, ContentHash};
use quarterturn_kernel::proof::hash_domain::HashDomain;
use quarterturn_kernel::proof::replay::{replay_verify_codes, ReplayVerdict};
use quarterturn_search::policy::SearchPolicyV1;
use quarterturn_search::search::SolveResultV1;

pub const REPORT_SCHEMA_VERSION: &str = "solve_report.v1";

/// Canonical report bytes and their digest. Construct via [`build_report`]
/// or [`SolveReportV1::from_bytes`]; both guarantee the digest matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReportV1 {
    bytes: Vec<u8>,
    digest: ContentHash,
}

/// Failure building, parsing or replaying a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Canonical JSON serialization failed.
    Canon { detail: String },
    /// The bytes are not valid JSON.
    Parse { detail: String },
    /// The bytes parse but are not in canonical form.
    NotCanonical,
    /// `schema_version` is missing or unrecognized.
    SchemaMismatch { found: String },
    /// A required field is missing or has the wrong type.
    MissingField { field: &'static str },
    /// `start_fingerprint` does not describe a state.
    BadStartState { detail: String },
    /// A move code in the solution is outside `0..12`.
    BadMoveCode { detail: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::Parse { detail } => write!(f, "report parse error: {detail}"),
            Self::NotCanonical => write!(f, "report bytes are not canonical JSON"),
            Self::SchemaMismatch { found } => write!(f, "unexpected schema_version: {found:?}"),
            Self::MissingField { field } => write!(f, "missing or mistyped field: {field}"),
            Self::BadStartState { detail } => write!(f, "bad start state: {detail}"),
            Self::BadMoveCode { detail } => write!(f, "bad move code: {detail}"),
        }
    }
}

impl std::error::Error for ReportError {}

fn move_codes(moves: &[Move]) -> Vec<u8> {
    moves.iter().map(|m| m.code()).collect()
}

/// Build the report for one solve of `scramble.state`.
///
/// # Errors
///
/// Returns [`ReportError::Canon`] if canonicalization fails.
pub fn build_report(
    scramble: &ScrambleV1,
    seed: u64,
    result: &SolveResultV1,
    policy: &SearchPolicyV1,
) -> Result<SolveReportV1, ReportError> {
    let start_fp = scramble.state.fingerprint();
    let solution_codes = move_codes(&result.moves);
    let value = serde_json::json!({
        "algorithm": result.algorithm_used.as_str(),
        "policy": {
            "max_depth": policy.max_depth,
            "max_frontier_size": policy.max_frontier_size,
            "max_nodes": policy.max_nodes,
            "move_set": format_moves(policy.move_set.as_slice()),
        },
        "scramble": {
            "depth": scramble.moves.len(),
            "move_codes": move_codes(&scramble.moves),
            "moves": format_moves(&scramble.moves),
            "seed": seed,
        },
        "schema_version": REPORT_SCHEMA_VERSION,
        "search": {
            "frontier_high_water": result.frontier_high_water,
            "max_depth_reached": result.max_depth_reached,
            "nodes_explored": result.nodes_explored,
            "termination": result.termination.as_str(),
        },
        "solution": {
            "length": result.moves.len(),
            "move_codes": &solution_codes,
            "moves": format_moves(&result.moves),
            "sequence_hash": canonical_hash(HashDomain::MoveSequence, &solution_codes).as_str(),
        },
        "start_fingerprint": start_fp.to_string(),
        "start_state_hash": canonical_hash(HashDomain::CubeState, start_fp.as_bytes()).as_str(),
    });
    let bytes = canonical_json_bytes(&value).map_err(|e| ReportError::Canon {
        detail: e.to_string(),
    })?;
    Ok(SolveReportV1::from_canonical(bytes))
}

impl SolveReportV1 {
    fn from_canonical(bytes: Vec<u8>) -> Self {
        let digest = canonical_hash(HashDomain::SolveReport, &bytes);
        Self { bytes, digest }
    }

    /// Accept bytes read from elsewhere. They must already be canonical.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`], [`ReportError::NotCanonical`] or
    /// [`ReportError::SchemaMismatch`].
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ReportError> {
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ReportError::Parse {
                detail: e.to_string(),
            })?;
        let recanon = canonical_json_bytes(&value).map_err(|e| ReportError::Canon {
            detail: e.to_string(),
        })?;
        if recanon != bytes {
            return Err(ReportError::NotCanonical);
        }
        let schema = value["schema_version"].as_str().unwrap_or("");
        if schema != REPORT_SCHEMA_VERSION {
            return Err(ReportError::SchemaMismatch {
                found: schema.to_string(),
            });
        }
        Ok(Self::from_canonical(bytes))
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }

    /// Parsed view of the report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Parse`] only if the bytes were corrupted after
    /// construction, which the private fields prevent.
    pub fn value(&self) -> Result<serde_json::Value, ReportError> {
        serde_json::from_slice(&self.bytes).map_err(|e| ReportError::Parse {
            detail: e.to_string(),
        })
    }

    /// Re-apply the recorded solution to the recorded start state.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the start state or move codes are malformed.
    pub fn replay(&self) -> Result<ReplayVerdict, ReportError> {
        let value = self.value()?;
        let facelets = value["start_fingerprint"]
            .as_str()
            .ok_or(ReportError::MissingField {
                field: "start_fingerprint",
            })?;
        let start = CubeStateV1::from_facelets(facelets).map_err(|e| ReportError::BadStartState {
            detail: e.to_string(),
        })?;
        let codes = value["solution"]["move_codes"]
            .as_array()
            .ok_or(ReportError::MissingField {
                field: "solution.move_codes",
            })?
            .iter()
            .map(|c| {
                c.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| ReportError::BadMoveCode {
                        detail: c.to_string(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        replay_verify_codes(&start, &codes).map_err(|e| ReportError::BadMoveCode {
            detail: e.to_string(),
        })
    }
}
