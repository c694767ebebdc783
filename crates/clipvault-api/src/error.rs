//! HTTP error response conversion
//!
//! `AppError` lives in clipvault-core and cannot implement axum's
//! `IntoResponse` there (orphan rule), so handlers return
//! `Result<Response, HttpError>` and let `?` convert through `From`.
//! The conversion logs the failure, picks the status code, and renders the
//! response envelope; the raw cause never reaches the client.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clipvault_core::{AppError, FieldError, LogLevel};
use serde::de::DeserializeOwned;

use crate::response::ApiResponse;

/// Wrapper type for AppError to implement IntoResponse.
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        HttpError(err)
    }
}

/// JSON body extractor that answers deserialization failures with the 400
/// envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(rejection = %rejection.body_text(), "rejected malformed request body");
            HttpError(AppError::Validation(vec![FieldError::new(
                "body",
                "Invalid request body",
            )]))
        })?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "request failed");
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let err = &self.0;

        let status = StatusCode::from_u16(err.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(err);

        let mut body = ApiResponse::<()>::failure(err.client_message());
        if let Some(errors) = err.field_errors() {
            body = body.with_errors(errors.to_vec());
        }

        (status, Json(body)).into_response()
    }
}
