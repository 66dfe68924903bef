//! Repository for game completions.
//!
//! Exposes a domain-level `GameCompletion` model and free functions that
//! return `DomainError`. The SeaORM specifics stay in
//! `crate::adapters::completions_sea`.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::completions_sea;
use crate::entities::game_completions::{CompletionStatus, Model};
use crate::errors::domain::DomainError;

pub use crate::adapters::completions_sea::{CompletionCreate, CompletionUpdate};

/// Domain view of a recorded game run.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCompletion {
    pub id: i64,
    pub user_name: String,
    pub completion_status: CompletionStatus,
    pub challenges_completed: Option<i32>,
    pub total_challenges: Option<i32>,
    pub time_taken: Option<i32>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl GameCompletion {
    /// Fraction of challenges completed, when both counters are present
    /// and the total is positive.
    pub fn progress(&self) -> Option<f64> {
        match (self.challenges_completed, self.total_challenges) {
            (Some(done), Some(total)) if total > 0 => Some(f64::from(done) / f64::from(total)),
            _ => None,
        }
    }
}

impl From<Model> for GameCompletion {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            user_name: m.user_name,
            completion_status: m.completion_status,
            challenges_completed: m.challenges_completed,
            total_challenges: m.total_challenges,
            time_taken: m.time_taken,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_by_id<C>(conn: &C, id: i64) -> Result<Option<GameCompletion>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let model = completions_sea::find_by_id(conn, id).await?;
    Ok(model.map(GameCompletion::from))
}

pub async fn require_completion<C>(conn: &C, id: i64) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let model = completions_sea::require_completion(conn, id).await?;
    Ok(GameCompletion::from(model))
}

pub async fn list_all<C>(conn: &C) -> Result<Vec<GameCompletion>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let models = completions_sea::list_all(conn).await?;
    Ok(models.into_iter().map(GameCompletion::from).collect())
}

pub async fn create_completion<C>(
    conn: &C,
    create: CompletionCreate,
) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let model = completions_sea::create_completion(conn, create).await?;
    Ok(GameCompletion::from(model))
}

pub async fn update_completion<C>(
    conn: &C,
    update: CompletionUpdate,
) -> Result<GameCompletion, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let model = completions_sea::update_completion(conn, update).await?;
    Ok(GameCompletion::from(model))
}

pub async fn delete_completion<C>(conn: &C, id: i64) -> Result<(), DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    completions_sea::delete_completion(conn, id).await?;
    Ok(())
}
