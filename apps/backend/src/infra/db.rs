//! Database connection setup.

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect to the configured database.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, owner)?;
    let db = Database::connect(&url)
        .await
        .map_err(|e| AppError::db_unavailable(format!("Failed to connect to database: {e}")))?;
    info!(profile = ?profile, "database connected");
    Ok(db)
}
