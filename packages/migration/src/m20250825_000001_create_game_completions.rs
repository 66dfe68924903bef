use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum GameCompletions {
    Table,
    Id,
    UserName,
    CompletionStatus,
    ChallengesCompleted,
    TotalChallenges,
    TimeTaken,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CompletionStatusEnum {
    #[iden = "completion_status"]
    Type,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // completion_status enum (PostgreSQL only; SQLite stores the values as TEXT)
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                async fn enum_exists(
                    manager: &SchemaManager<'_>,
                    enum_name: &str,
                ) -> Result<bool, DbErr> {
                    let result = manager
                        .get_connection()
                        .query_one(Statement::from_string(
                            sea_orm::DatabaseBackend::Postgres,
                            format!("SELECT 1 FROM pg_type WHERE typname = '{}'", enum_name),
                        ))
                        .await?;
                    Ok(result.is_some())
                }

                if !enum_exists(manager, "completion_status").await? {
                    manager
                        .create_type(
                            PgType::create()
                                .as_enum(CompletionStatusEnum::Type)
                                .values(["completed", "failed", "in_progress"])
                                .to_owned(),
                        )
                        .await?;
                }
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't need enum types
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        // game_completions
        manager
            .create_table(
                Table::create()
                    .table(GameCompletions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameCompletions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::UserName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::CompletionStatus)
                            .custom(CompletionStatusEnum::Type)
                            .not_null()
                            .default("in_progress"),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::ChallengesCompleted)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::TotalChallenges)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::TimeTaken)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameCompletions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // newest-first listing reads through this index
        manager
            .create_index(
                Index::create()
                    .name("ix_game_completions_created_at")
                    .table(GameCompletions::Table)
                    .col(GameCompletions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop index before table, enum type last
        manager
            .drop_index(
                Index::drop()
                    .name("ix_game_completions_created_at")
                    .table(GameCompletions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GameCompletions::Table).to_owned())
            .await?;

        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                manager
                    .drop_type(
                        PgType::drop()
                            .name(CompletionStatusEnum::Type)
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            sea_orm::DatabaseBackend::Sqlite => {
                // SQLite doesn't have enum types to drop
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".into()));
            }
        }

        Ok(())
    }
}
