use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clipvault_core::messages::VIDEOS_FETCH_SUCCESSFUL;
use clipvault_core::models::VideoResponse;
use clipvault_core::{AppError, FieldError};

use crate::error::HttpError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters arrive as strings; `limit` is parsed leniently below so
/// that junk values degrade to "no limit" instead of erroring.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    pub user_id: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize)]
struct VideosData {
    videos: Vec<VideoResponse>,
}

/// GET /listing-videos?userId=<uuid>&limit=<n>
///
/// Videos owned by an arbitrary user, for any authenticated caller. `limit`
/// caps the result when it parses to a positive integer.
pub async fn listing_videos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let Some(raw_user_id) = query.user_id else {
        return Err(AppError::Validation(vec![FieldError::new(
            "userId",
            "User id is required",
        )])
        .into());
    };
    let owner = Uuid::parse_str(&raw_user_id).map_err(|_| {
        AppError::Validation(vec![FieldError::new("userId", "Invalid user id")])
    })?;

    let limit = query
        .limit
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n > 0);

    let videos = state.videos.list_by_owner(owner, limit).await?;

    Ok(Json(
        ApiResponse::success(VIDEOS_FETCH_SUCCESSFUL).with_data(VideosData {
            videos: videos.into_iter().map(Into::into).collect(),
        }),
    ))
}
