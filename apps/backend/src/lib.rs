#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use error::AppError;
pub use errors::DomainError;
pub use extractors::completion_id::CompletionId;
pub use extractors::validated_json::ValidatedJson;
pub use infra::db::connect_db;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::db::*;
    pub use super::error::*;
    pub use super::extractors::*;
    pub use super::infra::*;
    pub use super::middleware::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
