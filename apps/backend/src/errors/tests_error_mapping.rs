use actix_web::http::StatusCode;
use actix_web::ResponseError;
use backend_test_support::error_body::assert_error_body_from_http_response;

use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

#[actix_web::test]
async fn validation_maps_to_400_with_detail_as_error() {
    let app_err: AppError =
        DomainError::validation("userName and completionStatus are required").into();
    assert_eq!(app_err.status(), StatusCode::BAD_REQUEST);

    let resp = app_err.error_response();
    assert_error_body_from_http_response(
        resp,
        StatusCode::BAD_REQUEST,
        "userName and completionStatus are required",
        None,
    )
    .await;
}

#[actix_web::test]
async fn not_found_maps_to_404_with_detail_as_error() {
    let app_err: AppError =
        DomainError::not_found(NotFoundKind::Completion, "Game completion not found").into();
    assert_eq!(app_err.status(), StatusCode::NOT_FOUND);

    let resp = app_err.error_response();
    assert_error_body_from_http_response(
        resp,
        StatusCode::NOT_FOUND,
        "Game completion not found",
        None,
    )
    .await;
}

#[actix_web::test]
async fn db_unavailable_maps_to_500_with_generic_error() {
    let app_err: AppError =
        DomainError::infra(InfraErrorKind::DbUnavailable, "Database is not configured").into();
    assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app_err.error_response();
    assert_error_body_from_http_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        Some("Database is not configured"),
    )
    .await;
}

#[actix_web::test]
async fn infra_timeout_maps_to_500_with_generic_error() {
    let app_err: AppError =
        DomainError::infra(InfraErrorKind::Timeout, "connection pool timed out").into();
    assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app_err.error_response();
    assert_error_body_from_http_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        Some("connection pool timed out"),
    )
    .await;
}

#[actix_web::test]
async fn db_err_converts_to_internal() {
    let db_err = sea_orm::DbErr::Custom("boom".to_string());
    let app_err: AppError = db_err.into();
    assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app_err.error_response();
    assert_error_body_from_http_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        Some("boom"),
    )
    .await;
}

#[test]
fn domain_error_display_is_stable() {
    let err = DomainError::validation("bad input");
    assert_eq!(err.to_string(), "validation error: bad input");

    let err = DomainError::not_found(NotFoundKind::Completion, "missing");
    assert_eq!(err.to_string(), "not found Completion: missing");
}
