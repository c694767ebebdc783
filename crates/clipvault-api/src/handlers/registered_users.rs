use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use clipvault_core::messages::USERS_FETCH_SUCCESSFUL;
use clipvault_core::models::UserResponse;

use crate::error::HttpError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
struct UsersData {
    users: Vec<UserResponse>,
}

/// GET /registered-users
///
/// Every registered account, as wire DTOs (no credential material).
pub async fn registered_users(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpError> {
    let users = state.users.list_all().await?;

    Ok(Json(
        ApiResponse::success(USERS_FETCH_SUCCESSFUL).with_data(UsersData {
            users: users.into_iter().map(Into::into).collect(),
        }),
    ))
}
