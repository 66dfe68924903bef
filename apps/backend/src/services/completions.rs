//! Service layer for the game-completion CRUD surface.
//!
//! Holds the validation rules; storage goes through
//! `crate::repos::completions`.

use sea_orm::ConnectionTrait;

use crate::entities::game_completions::CompletionStatus;
use crate::errors::domain::DomainError;
use crate::repos;
use crate::repos::completions::{CompletionCreate, CompletionUpdate, GameCompletion};

/// Input for creating a completion.
///
/// Both `user_name` and `completion_status` are optional at this level so
/// the missing-field case produces the contract's validation message
/// rather than a deserialization error.
#[derive(Debug, Clone, Default)]
pub struct CreateCompletionInput {
    pub user_name: Option<String>,
    pub completion_status: Option<CompletionStatus>,
    pub challenges_completed: Option<i32>,
    pub total_challenges: Option<i32>,
    pub time_taken: Option<i32>,
}

/// Input for a partial update.
///
/// The numeric fields are double-optional: outer `None` leaves the column
/// unchanged, `Some(None)` clears it, `Some(Some(v))` writes `v`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompletionInput {
    pub user_name: Option<String>,
    pub completion_status: Option<CompletionStatus>,
    pub challenges_completed: Option<Option<i32>>,
    pub total_challenges: Option<Option<i32>>,
    pub time_taken: Option<Option<i32>>,
}

pub async fn create_completion<C>(
    conn: &C,
    input: CreateCompletionInput,
) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let (user_name, status) = match (input.user_name, input.completion_status) {
        (Some(name), Some(status)) if !name.trim().is_empty() => (name, status),
        _ => {
            return Err(DomainError::validation(
                "userName and completionStatus are required",
            ))
        }
    };

    let create = CompletionCreate {
        user_name,
        status,
        challenges_completed: input.challenges_completed,
        total_challenges: input.total_challenges,
        time_taken: input.time_taken,
    };
    repos::completions::create_completion(conn, create).await
}

pub async fn get_completion<C>(conn: &C, id: i64) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    repos::completions::require_completion(conn, id).await
}

/// All completions, newest first.
pub async fn list_completions<C>(conn: &C) -> Result<Vec<GameCompletion>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    repos::completions::list_all(conn).await
}

pub async fn update_completion<C>(
    conn: &C,
    id: i64,
    input: UpdateCompletionInput,
) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    if let Some(name) = &input.user_name {
        if name.trim().is_empty() {
            return Err(DomainError::validation("userName cannot be empty"));
        }
    }

    let update = CompletionUpdate {
        id,
        user_name: input.user_name,
        status: input.completion_status,
        challenges_completed: input.challenges_completed,
        total_challenges: input.total_challenges,
        time_taken: input.time_taken,
    };
    repos::completions::update_completion(conn, update).await
}

pub async fn delete_completion<C>(conn: &C, id: i64) -> Result<(), DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    repos::completions::delete_completion(conn, id).await
}
