//! Unified test logging initialization
//!
//! One init function shared by unit tests and integration tests so the
//! subscriber is only installed once per process.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it from every test is fine. The filter
/// is resolved in this order:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. `"warn"` (default, quiet)
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer() // Critical for cargo/nextest capture
            .without_time() // Stable output
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}

fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
