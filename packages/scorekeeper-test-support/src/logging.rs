//! One-shot `tracing` subscriber for tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
const DEFAULT_TEST_FILTER: &str = "warn";

/// Resolve the test filter: `TEST_LOG`, then `RUST_LOG`, then `warn`.
fn filter_from_env() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER))
}

/// Install the test subscriber once per process.
///
/// Safe to call from every test and from `ctor` hooks; later calls are
/// no-ops. Output goes through the libtest writer so it is captured per test.
///
/// ```bash
/// TEST_LOG=scorekeeper=debug cargo test -p scorekeeper
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
