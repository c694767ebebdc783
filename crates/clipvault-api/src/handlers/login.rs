use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use clipvault_core::messages::LOGIN_SUCCESSFUL;
use clipvault_core::password::verify_password;
use clipvault_core::validation::validate_login;
use clipvault_core::AppError;

use crate::error::{HttpError, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login payload. Missing fields become empty strings and fail field
/// validation rather than deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login
///
/// Verify credentials and issue a bearer token. An unknown email and a wrong
/// password are reported separately; the client shows different prompts for
/// the two cases.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let errors = validate_login(&request.email, &request.password);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors).into());
    }

    let user = state
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or(AppError::NotFound)?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::IncorrectPassword.into());
    }

    let token = state.tokens.issue(&user)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(
        ApiResponse::<()>::success(LOGIN_SUCCESSFUL).with_token(token),
    ))
}
