use sea_orm::DatabaseConnection;

/// Shared application state handed to every handler.
///
/// The connection is optional: routes that need the database go through
/// `crate::db::require_db`, which turns the missing-pool case into a
/// proper error response instead of a panic.
#[derive(Clone)]
pub struct AppState {
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
