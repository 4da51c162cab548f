//! Quarterturn Search: four interchangeable strategies over the kernel's
//! move engine, with per-call budgets and a uniform result record.
//!
//! Depends only on `quarterturn_kernel`; it does NOT depend on the harness.
//!
//! # Crate dependency graph
//!
//! ```text
//! quarterturn_kernel  ←  quarterturn_search  ←  quarterturn_harness
//! (state, moves)         (strategies, budget)   (trials, reports)
//! ```
//!
//! # Key types
//!
//! - [`search::solve`] / [`search::solve_tagged`] -- entry points
//! - [`search::SolveResultV1`] -- moves, nodes explored, algorithm used, termination
//! - [`policy::SearchPolicyV1`] -- node budget, depth cutoff, move set, cancellation
//! - [`policy::Algorithm`] -- BFS, DFS, IDDFS, IDA* and the scramble-depth dispatcher
//! - [`heuristic::Heuristic`] -- admissible estimate consumed by IDA*
//!
//! DFS, IDDFS and IDA* run on explicit stacks; no strategy recurses.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

mod bfs;
mod budget;
mod dfs;
pub mod error;
pub mod frontier;
pub mod heuristic;
mod ida_star;
pub mod node;
pub mod policy;
pub mod search;
