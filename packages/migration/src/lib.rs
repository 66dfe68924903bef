pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20250825_000001_create_game_completions; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250825_000001_create_game_completions::Migration)]
    }
}

#[derive(Debug)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run one migration command against an already-open connection.
/// Shared by the CLI and by test bootstrap code.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = runner_info(db).await?;

    tracing::info!("▶ cmd={command:?}  backend={}", before.backend);
    tracing::info!("▶ connected to DB: {}", before.name);
    tracing::info!(
        "▶ BEFORE: runner has {} migration(s) defined, {} applied",
        before.defined,
        before.applied
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            // Status doesn't change state, so skip the second snapshot
            if !matches!(command, MigrationCommand::Status) {
                let after = runner_info(db).await?;
                tracing::info!(
                    "▶ AFTER: runner has {} migration(s) defined, {} applied",
                    after.defined,
                    after.applied
                );
            }
            tracing::info!("✅ {command:?} OK for {}", before.backend);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {command:?} failed for {}: {e}", before.backend);
            Err(e)
        }
    }
}

#[derive(Debug)]
struct RunnerInfo {
    backend: String,
    name: String,
    applied: usize,
    defined: usize,
}

async fn runner_info(db: &DatabaseConnection) -> Result<RunnerInfo, DbErr> {
    let backend = format!("{:?}", db.get_database_backend());

    let name = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("select current_database() as name"),
            );
            match db.query_one(stmt).await? {
                Some(row) => row.try_get("", "name")?,
                None => "<unknown>".to_string(),
            }
        }
        sea_orm::DatabaseBackend::Sqlite => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
            );
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "file") {
                    Ok(file) if !file.is_empty() => file,
                    Ok(_) => ":memory:".to_string(),
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        _ => "<unsupported>".to_string(),
    };

    Ok(RunnerInfo {
        backend,
        name,
        applied: count_applied_migrations(db).await.unwrap_or(0),
        defined: Migrator::migrations().len(),
    })
}

/// Number of applied migrations. Returns 0 if the tracking table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Version string of the most recently applied migration.
/// Returns None if no migrations have been applied or the tracking table doesn't exist.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
