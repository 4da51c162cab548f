//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. Adding a new
//! domain is a single entry in the macro invocation below: the enum,
//! `as_bytes()`, `ALL`, and `Display` are generated from it.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// Fingerprint bytes of a single `CubeStateV1`.
    CubeState => b"QUARTERTURN::CUBE_STATE::V1\0",

    /// Move code sequence (one byte per move).
    MoveSequence => b"QUARTERTURN::MOVE_SEQUENCE::V1\0",

    /// Canonical JSON of a solve report.
    SolveReport => b"QUARTERTURN::SOLVE_REPORT::V1\0",

    /// Benchmark determinism guard.
    BenchGuard => b"QUARTERTURN::BENCH_GUARD::V1\0",
}
