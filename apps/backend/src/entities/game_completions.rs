use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Terminal (or in-flight) status of a recorded game run.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "completion_status")]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_completions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "user_name")]
    pub user_name: String,
    #[sea_orm(column_name = "completion_status")]
    pub completion_status: CompletionStatus,
    #[sea_orm(column_name = "challenges_completed")]
    pub challenges_completed: Option<i32>,
    #[sea_orm(column_name = "total_challenges")]
    pub total_challenges: Option<i32>,
    #[sea_orm(column_name = "time_taken")]
    pub time_taken: Option<i32>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
