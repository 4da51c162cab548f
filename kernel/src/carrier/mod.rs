//! Carrier module: facelet colors, face identities, and `CubeStateV1`.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod cube_state;
pub mod facelet;
