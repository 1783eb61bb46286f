//! Tracing setup for tests and benchmarks
//!
//! The engine itself only emits `tracing` events; installing a subscriber is
//! the caller's concern. Tests and benches share this Once-guarded fmt
//! subscriber honoring `RUST_LOG`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install an env-filtered fmt subscriber once per process.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
