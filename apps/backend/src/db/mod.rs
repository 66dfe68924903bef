pub mod txn;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Get the database connection or fail with a 500-mapped error.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("Database is not configured".to_string()))
}
