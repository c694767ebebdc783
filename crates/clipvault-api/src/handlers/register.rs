use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use clipvault_core::messages::USER_REGISTRATION_SUCCESSFUL;

use crate::error::{HttpError, ValidatedJson};
use crate::response::ApiResponse;
use crate::services::{RegisterRequest, RegistrationService};
use crate::state::AppState;

/// POST /register
///
/// Create an account from identity fields alone. The password is generated
/// server-side and delivered by mail; the response body never carries it.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let service = RegistrationService::new(&state);
    service.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::<()>::success(USER_REGISTRATION_SUCCESSFUL)),
    ))
}
