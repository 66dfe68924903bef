#![cfg(test)]

//! Unified test logging initialization.
//!
//! Unit tests inside this crate and the integration tests under `tests/`
//! both go through `backend_test_support::logging::init`, so log filtering
//! works the same everywhere (`TEST_LOG`, then `RUST_LOG`, then `warn`).

/// Initialize structured logging for tests. Idempotent.
pub fn init() {
    backend_test_support::logging::init();
}
