use backend::state::app_state::AppState;
use backend_test_support::db::open_memory_db;
use migration::MigrationCommand;
use sea_orm::DbErr;

/// Fresh in-memory SQLite state with the schema applied.
///
/// Every call returns an isolated database, so tests never see each
/// other's rows and need no serialization.
pub async fn memory_state() -> Result<AppState, DbErr> {
    let db = open_memory_db().await?;
    migration::migrate(&db, MigrationCommand::Up).await?;
    Ok(AppState::new(db))
}
