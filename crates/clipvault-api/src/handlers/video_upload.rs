use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use clipvault_core::messages::VIDEO_UPLOADED;

use crate::auth::AuthenticatedUser;
use crate::error::HttpError;
use crate::response::ApiResponse;
use crate::services::VideoUploadService;
use crate::state::AppState;
use crate::utils::upload::read_upload_form;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadData {
    video_url: String,
    title: String,
    description: String,
}

/// POST /upload-video
///
/// Multipart upload: `title` and `description` text fields plus a `video`
/// file. The file is spooled to disk while the form is read, then validated
/// and pushed to durable storage.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpError> {
    let form = read_upload_form(multipart, Path::new(&state.config.upload_spool_dir)).await?;

    let service = VideoUploadService::new(&state);
    let video = service.upload(&user, form).await?;

    Ok(Json(
        ApiResponse::success(VIDEO_UPLOADED).with_data(UploadData {
            video_url: video.video_url,
            title: video.title,
            description: video.description,
        }),
    ))
}
