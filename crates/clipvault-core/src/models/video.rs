use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Uploaded-video metadata. A row exists only after the blob transfer
/// succeeded; `video_url` is the durable reference the backend returned.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for persisting a video after its blob has been stored.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub uploaded_by: Uuid,
}

/// Video payload returned over the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub uploaded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            uploaded_by: video.uploaded_by,
            created_at: video.created_at,
        }
    }
}
