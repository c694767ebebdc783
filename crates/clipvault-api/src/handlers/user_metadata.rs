use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use clipvault_core::messages::USER_FETCH_SUCCESSFUL;
use clipvault_core::models::UserResponse;
use clipvault_core::AppError;

use crate::auth::AuthenticatedUser;
use crate::error::HttpError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
struct UserData {
    user: UserResponse,
}

/// GET /user-metadata
///
/// Return the authenticated user's own profile. The token is trusted only
/// for identity; the record is re-read so the response reflects the store.
pub async fn user_metadata(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, HttpError> {
    let record = state
        .users
        .find_by_email(&user.email)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("account vanished for authenticated user {}", user.user_id))
        })?;

    Ok(Json(
        ApiResponse::success(USER_FETCH_SUCCESSFUL).with_data(UserData {
            user: record.into(),
        }),
    ))
}
