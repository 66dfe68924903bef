//! Error body test helpers for backend testing
//!
//! Assertions for the wire error contract (`{"error": ..., "details": ...}`)
//! that work in unit and integration tests without depending on backend types.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Local mirror of the backend's error body so assertions don't depend on
/// backend types. Client errors carry `error` only; server errors add
/// `details` with the underlying cause.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct ErrorBodyLike {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Assert that an `HttpResponse` carries the expected error body.
///
/// `expected_details_contains`: `Some(s)` asserts the `details` field is
/// present and contains `s`; `None` asserts the field is absent.
pub async fn assert_error_body_from_http_response(
    resp: actix_web::HttpResponse,
    expected_status: StatusCode,
    expected_error: &str,
    expected_details_contains: Option<&str>,
) {
    let status = resp.status();
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    assert_error_body_from_parts(
        status,
        &body,
        expected_status,
        expected_error,
        expected_details_contains,
    );
}

/// Assert that raw response parts carry the expected error body.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_error: &str,
    expected_details_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let body_str =
        String::from_utf8(body_bytes.to_vec()).expect("response body should be valid UTF-8");
    let body: ErrorBodyLike =
        serde_json::from_str(&body_str).expect("response body should be valid error JSON");

    assert_eq!(body.error, expected_error);

    match expected_details_contains {
        Some(expected) => {
            let details = body
                .details
                .as_deref()
                .expect("details field should be present");
            assert!(
                details.contains(expected),
                "expected details to contain '{}', but got '{}'",
                expected,
                details
            );
        }
        None => {
            assert!(
                body.details.is_none(),
                "expected no details field, but got '{:?}'",
                body.details
            );
        }
    }
}

/// Assert that a `ServiceResponse` carries the expected error body.
///
/// Also checks that the request trace middleware stamped an `x-request-id`
/// header on the response.
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_error: &str,
    expected_details_contains: Option<&str>,
) {
    let status = resp.status();

    assert!(
        resp.headers().get("x-request-id").is_some(),
        "x-request-id header should be present"
    );

    let body = actix_web::test::read_body(resp).await;
    assert_error_body_from_parts(
        status,
        &body,
        expected_status,
        expected_error,
        expected_details_contains,
    );
}
