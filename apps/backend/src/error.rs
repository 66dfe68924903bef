use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// HTTP-facing application error.
///
/// Domain and infra layers return `DomainError`; handlers convert into
/// `AppError` (via `?` and the `From` impl below) so the response shape
/// stays uniform across routes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{detail}")]
    Validation { detail: String },

    #[error("{detail}")]
    NotFound { detail: String },

    #[error("{detail}")]
    Db { detail: String },

    #[error("{detail}")]
    DbUnavailable { detail: String },

    #[error("{detail}")]
    Internal { detail: String },

    #[error("{detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db { .. }
            | AppError::DbUnavailable { .. }
            | AppError::Internal { .. }
            | AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail }
            | AppError::NotFound { detail }
            | AppError::Db { detail }
            | AppError::DbUnavailable { detail }
            | AppError::Internal { detail }
            | AppError::Config { detail } => detail,
        }
    }
}

/// JSON body for every error response.
///
/// 4xx responses carry the detail in `error`; 5xx responses keep `error`
/// generic and move the detail into `details` so internals never leak as
/// the headline message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let body = if status.is_server_error() {
            ErrorBody {
                error: "Internal server error".to_string(),
                details: Some(self.detail().to_string()),
            }
        } else {
            ErrorBody {
                error: self.detail().to_string(),
                details: None,
            }
        };
        HttpResponse::build(status).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::invalid(detail),
            DomainError::NotFound(_, detail) => AppError::not_found(detail),
            DomainError::Infra(InfraErrorKind::DbUnavailable, detail) => {
                AppError::db_unavailable(detail)
            }
            DomainError::Infra(_, detail) => AppError::db(detail),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::internal(format!("Missing environment variable: {err}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::internal(format!("Database error: {err}"))
    }
}
