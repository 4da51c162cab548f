//! Diagnostic tracing for harness binaries and tests.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's choice. Output goes to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are no-ops.
///
/// ```bash
/// RUST_LOG=quarterturn_search=debug solve_fixture 7 12 ida*
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
