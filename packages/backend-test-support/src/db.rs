//! In-memory database helpers
//!
//! Integration tests run against SQLite in memory. Each helper call returns
//! an isolated database the caller still has to migrate.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open a fresh in-memory SQLite database.
///
/// The pool is capped at a single connection: `:memory:` databases exist per
/// connection, so a second pooled connection would see an empty schema.
pub async fn open_memory_db() -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    tracing::debug!("opened in-memory sqlite database");
    Ok(db)
}
