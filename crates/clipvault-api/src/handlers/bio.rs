use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use clipvault_core::messages::BIO_ADDED;
use clipvault_core::validation::validate_bio;
use clipvault_core::AppError;

use crate::auth::AuthenticatedUser;
use crate::error::{HttpError, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BioRequest {
    pub bio: String,
}

/// POST /bio
///
/// Set the authenticated user's bio. The update is keyed by email from the
/// token; if the row is gone the update matches nothing and still succeeds.
pub async fn add_bio(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<BioRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let errors = validate_bio(&request.bio);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors).into());
    }

    state.users.set_bio(&user.email, &request.bio).await?;
    tracing::info!(user_id = %user.user_id, "bio updated");

    Ok(Json(ApiResponse::<()>::success(BIO_ADDED)))
}
