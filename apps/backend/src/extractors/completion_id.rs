use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Completion id extracted from the `{id}` path parameter.
///
/// A malformed or non-positive id is indistinguishable from a missing row
/// as far as the client is concerned, so both map to the same 404.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct CompletionId(pub i64);

impl FromRequest for CompletionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_id(req))
    }
}

fn extract_id(req: &HttpRequest) -> Result<CompletionId, AppError> {
    let raw = req
        .match_info()
        .get("id")
        .ok_or_else(|| AppError::not_found("Game completion not found"))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::not_found("Game completion not found"))?;

    if id <= 0 {
        return Err(AppError::not_found("Game completion not found"));
    }

    Ok(CompletionId(id))
}
