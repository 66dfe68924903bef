//! Mapping from SeaORM's `DbErr` into `DomainError`.
//!
//! Repos call `map_db_err` (or rely on the `From` impl below via `?`) so
//! that callers above the repo layer never see a raw `DbErr`.

use sea_orm::DbErr;
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

pub fn map_db_err(err: DbErr) -> DomainError {
    match err {
        DbErr::RecordNotFound(msg) => {
            let kind = if msg.contains("Game completion") {
                NotFoundKind::Completion
            } else {
                NotFoundKind::Other("Record".to_string())
            };
            DomainError::not_found(kind, msg)
        }
        DbErr::ConnectionAcquire(source) => {
            warn!(error = %source, "database connection unavailable");
            DomainError::infra(
                InfraErrorKind::DbUnavailable,
                format!("Failed to acquire database connection: {source}"),
            )
        }
        DbErr::Conn(source) => {
            warn!(error = %source, "database connection failed");
            DomainError::infra(
                InfraErrorKind::DbUnavailable,
                format!("Database connection failed: {source}"),
            )
        }
        other => {
            let msg = other.to_string();
            let lowered = msg.to_lowercase();
            if lowered.contains("timeout")
                || lowered.contains("pool")
                || lowered.contains("unavailable")
            {
                warn!(error = %msg, "database operation timed out");
                DomainError::infra(InfraErrorKind::Timeout, msg)
            } else {
                error!(error = %msg, "unexpected database error");
                DomainError::infra(InfraErrorKind::Other("DbErr".to_string()), msg)
            }
        }
    }
}

impl From<DbErr> for DomainError {
    fn from(err: DbErr) -> Self {
        map_db_err(err)
    }
}
