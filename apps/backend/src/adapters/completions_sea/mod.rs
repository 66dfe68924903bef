//! SeaORM adapter for game completions.
//!
//! Thin data-access functions over the `game_completions` table. Everything
//! here returns `DbErr`; mapping into `DomainError` happens in the repo
//! layer.

pub mod dto;

pub use dto::{CompletionCreate, CompletionUpdate};

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entities::game_completions::{self, Column, Model};
use crate::entities::GameCompletions;

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, DbErr> {
    GameCompletions::find_by_id(id).one(conn).await
}

/// Fetch a completion or fail with `RecordNotFound`.
pub async fn require_completion<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Model, DbErr> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Game completion not found".to_string()))
}

/// List all completions, newest first (ties broken by id).
pub async fn list_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
    GameCompletions::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn)
        .await
}

pub async fn create_completion<C: ConnectionTrait>(
    conn: &C,
    create: CompletionCreate,
) -> Result<Model, DbErr> {
    let now = OffsetDateTime::now_utc();
    let active = game_completions::ActiveModel {
        id: NotSet,
        user_name: Set(create.user_name),
        completion_status: Set(create.status),
        challenges_completed: Set(create.challenges_completed),
        total_challenges: Set(create.total_challenges),
        time_taken: Set(create.time_taken),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}

pub async fn update_completion<C: ConnectionTrait>(
    conn: &C,
    update: CompletionUpdate,
) -> Result<Model, DbErr> {
    // A no-op update still verifies the row exists but must not bump
    // updated_at.
    if update.is_noop() {
        return require_completion(conn, update.id).await;
    }

    let existing = require_completion(conn, update.id).await?;
    let mut active: game_completions::ActiveModel = existing.into();

    if let Some(user_name) = update.user_name {
        active.user_name = Set(user_name);
    }
    if let Some(status) = update.status {
        active.completion_status = Set(status);
    }
    if let Some(value) = update.challenges_completed {
        active.challenges_completed = Set(value);
    }
    if let Some(value) = update.total_challenges {
        active.total_challenges = Set(value);
    }
    if let Some(value) = update.time_taken {
        active.time_taken = Set(value);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn delete_completion<C: ConnectionTrait>(conn: &C, id: i64) -> Result<(), DbErr> {
    let result = GameCompletions::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotFound(
            "Game completion not found".to_string(),
        ));
    }
    Ok(())
}
