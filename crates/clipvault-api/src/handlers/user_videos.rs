use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use clipvault_core::messages::VIDEOS_FETCH_SUCCESSFUL;
use clipvault_core::models::VideoResponse;

use crate::auth::AuthenticatedUser;
use crate::error::HttpError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize)]
struct VideosData {
    videos: Vec<VideoResponse>,
}

/// GET /user-videos
///
/// All videos owned by the authenticated user, oldest first.
pub async fn user_videos(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, HttpError> {
    let videos = state.videos.list_by_owner(user.user_id, None).await?;

    Ok(Json(
        ApiResponse::success(VIDEOS_FETCH_SUCCESSFUL).with_data(VideosData {
            videos: videos.into_iter().map(Into::into).collect(),
        }),
    ))
}
