//! Operators module: the move set, `apply_move()`, and the scrambler.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod apply;
pub mod moves;
pub mod scramble;
