//! Proof module: canonical hashing, canonical JSON, solution replay.
//!
//! Depends on `carrier` and `operators`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod replay;
