//! Tracing configuration for tests

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per process. `RUST_LOG` overrides
/// the default `info` filter.
pub fn init_test_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
