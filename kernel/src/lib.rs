//! Quarterturn Kernel: the facelet state model and move engine.
//!
//! # API Surface
//!
//! - [`carrier::cube_state::CubeStateV1`] -- the 54-facelet state, solved predicate, fingerprint
//! - [`operators::apply::apply_move`] -- apply one quarter-turn, producing a new state
//! - [`operators::scramble::scramble`] -- random legal state plus the moves that produced it
//! - [`proof::replay::replay_verify`] -- verify a solution by replaying it
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. No cycles. `proof` depends on `operators` and `carrier`.
//! `operators` depends on `carrier`. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
