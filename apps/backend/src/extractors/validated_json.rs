use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;

/// JSON extractor with standardized error handling.
///
/// Deserializes request bodies and converts any JSON parse failure into
/// an `AppError` 400 with a sanitized message, instead of actix's default
/// error shape.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            // Collect the request body into BytesMut
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    debug!(error = %e, "Failed to read request body chunk");
                    AppError::invalid("Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            // Attempt to parse JSON
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                let detail = classify_json_error(&e);

                debug!(
                    error = %e,
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );

                AppError::invalid(detail)
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
