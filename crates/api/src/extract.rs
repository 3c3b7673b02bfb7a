//! Request body extractor accepting either JSON or URL-encoded forms.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Deserializes the body as JSON (`application/json`) or as a form
/// (`application/x-www-form-urlencoded`), chosen by `Content-Type`.
///
/// Both paths read the body through axum's default body limit, so an
/// oversized body is rejected with `413` before the handler runs.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(json_rejection)?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(form_rejection)?;
            Ok(Self(value))
        } else {
            Err(AppError::UnsupportedMediaType(format!(
                "Expected application/json or application/x-www-form-urlencoded, got '{content_type}'"
            )))
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    classify_rejection(rejection.status(), rejection.body_text())
}

fn form_rejection(rejection: FormRejection) -> AppError {
    classify_rejection(rejection.status(), rejection.body_text())
}

fn classify_rejection(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}
