//! Report directory persistence.
//!
//! # Layout
//!
//! ```text
//! <dir>/
//!   solve_report.json   canonical JSON report
//!   report_digest.txt   ASCII digest ("sha256:...")
//! ```
//!
//! Reading is fail-closed: a missing file, an undeclared extra file,
//! non-canonical report bytes or a stored digest that disagrees with the
//! recomputed one are all errors. The directory path is never hashed.

use std::collections::BTreeSet;
use std::path::Path;

use crate::report::{ReportError, SolveReportV1};

pub const REPORT_FILENAME: &str = "solve_report.json";
pub const DIGEST_FILENAME: &str = "report_digest.txt";

const EXPECTED_FILES: &[&str] = &[DIGEST_FILENAME, REPORT_FILENAME];

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportDirWriteError {
    Io { detail: String },
}

impl std::fmt::Display for ReportDirWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ReportDirWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportDirReadError {
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// A file other than the two expected ones exists.
    ExtraFile { name: String },
    /// The report bytes failed validation.
    Report(ReportError),
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportDirReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { name } => write!(f, "undeclared extra file: {name}"),
            Self::Report(e) => write!(f, "invalid report: {e}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored={stored}, recomputed={recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportDirReadError {}

/// Write `report` into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ReportDirWriteError::Io`] on any filesystem failure.
pub fn write_report_dir(report: &SolveReportV1, dir: &Path) -> Result<(), ReportDirWriteError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirWriteError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;
    write_atomic(dir, REPORT_FILENAME, report.bytes())?;
    write_atomic(dir, DIGEST_FILENAME, report.digest().as_str().as_bytes())?;
    Ok(())
}

/// Read and verify a report directory written by [`write_report_dir`].
///
/// # Errors
///
/// Returns [`ReportDirReadError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<SolveReportV1, ReportDirReadError> {
    for name in list_files(dir)? {
        if !EXPECTED_FILES.contains(&name.as_str()) {
            return Err(ReportDirReadError::ExtraFile { name });
        }
    }

    let bytes = read_required(dir, REPORT_FILENAME)?;
    let stored = read_required(dir, DIGEST_FILENAME)?;
    let stored = String::from_utf8_lossy(&stored).trim().to_string();

    let report = SolveReportV1::from_bytes(bytes).map_err(ReportDirReadError::Report)?;
    if report.digest().as_str() != stored {
        return Err(ReportDirReadError::DigestMismatch {
            stored,
            recomputed: report.digest().as_str().to_string(),
        });
    }
    Ok(report)
}

/// Write through a temp file in the same directory, then rename.
fn write_atomic(dir: &Path, name: &str, content: &[u8]) -> Result<(), ReportDirWriteError> {
    let temp_path = dir.join(format!(".tmp_{name}"));
    let path = dir.join(name);
    std::fs::write(&temp_path, content).map_err(|e| ReportDirWriteError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, &path).map_err(|e| ReportDirWriteError::Io {
        detail: format!("rename {} -> {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirReadError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirReadError::MissingFile {
        filename: filename.to_string(),
    })
}

fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirReadError> {
    let io = |e: std::io::Error| ReportDirReadError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if entry.file_type().map_err(io)?.is_file() {
            files.insert(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(files)
}
