//! Quarterturn Harness: seeded solve trials with verifiable reports.
//!
//! The harness runs a scramble through the search layer, replays the answer
//! with the kernel, and packages the run as a canonical JSON report with a
//! content digest.
//!
//! The harness does NOT decide correctness itself: replay is delegated to
//! the kernel and search to `quarterturn_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod report;
pub mod report_dir;
pub mod runner;
