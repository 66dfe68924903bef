//! REST surface for game completions.
//!
//! Request and response bodies use camelCase field names. Nullable
//! columns always appear in responses, as explicit nulls when unset.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::entities::game_completions::CompletionStatus;
use crate::error::AppError;
use crate::extractors::{CompletionId, ValidatedJson};
use crate::repos::completions::GameCompletion;
use crate::services;
use crate::services::completions::{CreateCompletionInput, UpdateCompletionInput};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGameCompletionRequest {
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    completion_status: Option<CompletionStatus>,
    #[serde(default)]
    challenges_completed: Option<i32>,
    #[serde(default)]
    total_challenges: Option<i32>,
    #[serde(default)]
    time_taken: Option<i32>,
}

impl CreateGameCompletionRequest {
    fn into_input(self) -> CreateCompletionInput {
        CreateCompletionInput {
            user_name: self.user_name,
            completion_status: self.completion_status,
            challenges_completed: self.challenges_completed,
            total_challenges: self.total_challenges,
            time_taken: self.time_taken,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateGameCompletionRequest {
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    completion_status: Option<CompletionStatus>,
    // Three states for the numeric fields:
    //   absent        -> None         -> leave unchanged
    //   null          -> Some(None)   -> clear the column
    //   value         -> Some(Some(v))-> set the column
    #[serde(default, with = "::serde_with::rust::double_option")]
    challenges_completed: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    total_challenges: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    time_taken: Option<Option<i32>>,
}

impl UpdateGameCompletionRequest {
    fn into_input(self) -> UpdateCompletionInput {
        UpdateCompletionInput {
            user_name: self.user_name,
            completion_status: self.completion_status,
            challenges_completed: self.challenges_completed,
            total_challenges: self.total_challenges,
            time_taken: self.time_taken,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameCompletionResponse {
    id: i64,
    user_name: String,
    completion_status: CompletionStatus,
    challenges_completed: Option<i32>,
    total_challenges: Option<i32>,
    time_taken: Option<i32>,
    created_at: String,
    updated_at: String,
}

impl From<GameCompletion> for GameCompletionResponse {
    fn from(c: GameCompletion) -> Self {
        Self {
            id: c.id,
            user_name: c.user_name,
            completion_status: c.completion_status,
            challenges_completed: c.challenges_completed,
            total_challenges: c.total_challenges,
            time_taken: c.time_taken,
            created_at: format_timestamp(c.created_at),
            updated_at: format_timestamp(c.updated_at),
        }
    }
}

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

#[derive(Debug, Serialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct MessageEnvelope<T> {
    message: String,
    data: T,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// POST /game-completion
async fn create_completion(
    state: web::Data<AppState>,
    body: ValidatedJson<CreateGameCompletionRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_input();

    let completion = with_txn(&state, |txn| {
        Box::pin(async move {
            services::completions::create_completion(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(MessageEnvelope {
        message: "Game completion saved successfully".to_string(),
        data: GameCompletionResponse::from(completion),
    }))
}

/// GET /game-completion
async fn list_completions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let completions = with_txn(&state, |txn| {
        Box::pin(async move {
            services::completions::list_completions(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let data: Vec<GameCompletionResponse> = completions
        .into_iter()
        .map(GameCompletionResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(DataEnvelope { data }))
}

/// GET /game-completion/{id}
async fn get_completion(
    state: web::Data<AppState>,
    id: CompletionId,
) -> Result<HttpResponse, AppError> {
    let completion = with_txn(&state, |txn| {
        Box::pin(async move {
            services::completions::get_completion(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DataEnvelope {
        data: GameCompletionResponse::from(completion),
    }))
}

/// PUT /game-completion/{id}
async fn update_completion(
    state: web::Data<AppState>,
    id: CompletionId,
    body: ValidatedJson<UpdateGameCompletionRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_input();

    let completion = with_txn(&state, |txn| {
        Box::pin(async move {
            services::completions::update_completion(txn, id.0, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageEnvelope {
        message: "Game completion updated successfully".to_string(),
        data: GameCompletionResponse::from(completion),
    }))
}

/// DELETE /game-completion/{id}
async fn delete_completion(
    state: web::Data<AppState>,
    id: CompletionId,
) -> Result<HttpResponse, AppError> {
    with_txn(&state, |txn| {
        Box::pin(async move {
            services::completions::delete_completion(txn, id.0)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Game completion deleted successfully".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/game-completion")
            .service(
                web::resource("")
                    .route(web::get().to(list_completions))
                    .route(web::post().to(create_completion)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_completion))
                    .route(web::put().to(update_completion))
                    .route(web::delete().to(delete_completion)),
            ),
    );
}
