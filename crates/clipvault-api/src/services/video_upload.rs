//! Video upload pipeline: gate the spooled file, push it to durable storage,
//! then record the metadata row.

use std::sync::Arc;

use tokio::io::BufReader;

use clipvault_core::validation::validate_video_fields;
use clipvault_core::{AppError, models::NewVideo, models::Video};
use clipvault_db::VideoRepositoryTrait;
use clipvault_storage::{keys, Storage};

use crate::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::staging::StagedUpload;
use crate::utils::upload::{normalize_mime_type, UploadForm};

pub struct VideoUploadService {
    videos: Arc<dyn VideoRepositoryTrait>,
    storage: Arc<dyn Storage>,
    max_size_bytes: u64,
    allowed_content_types: Vec<String>,
}

impl VideoUploadService {
    pub fn new(state: &AppState) -> Self {
        Self {
            videos: state.videos.clone(),
            storage: state.storage.clone(),
            max_size_bytes: state.config.max_video_size_bytes,
            allowed_content_types: state.config.video_allowed_content_types.clone(),
        }
    }

    /// Run the spooled upload through type, size, and field checks, transfer
    /// it under the owner's key prefix, and persist the metadata row. The
    /// spool file is removed on every path out of here.
    #[tracing::instrument(skip(self, owner, form), fields(owner = %owner.email))]
    pub async fn upload(
        &self,
        owner: &AuthenticatedUser,
        form: UploadForm,
    ) -> Result<Video, AppError> {
        let Some(file) = form.file else {
            return Err(AppError::MissingFile);
        };

        let mime = normalize_mime_type(file.content_type());
        if !self.allowed_content_types.iter().any(|t| t == &mime) {
            let err = AppError::InvalidFileType(mime);
            file.discard().await;
            return Err(err);
        }

        if file.size() > self.max_size_bytes {
            let err = AppError::FileSizeExceeded {
                size: file.size(),
                max: self.max_size_bytes,
            };
            file.discard().await;
            return Err(err);
        }

        let errors = validate_video_fields(&form.title, &form.description);
        if !errors.is_empty() {
            file.discard().await;
            return Err(AppError::Validation(errors));
        }

        let storage_key = keys::video_key(&owner.email, file.filename());
        let size_bytes = file.size();
        let upload_result = self.transfer(&file, &storage_key).await;
        file.discard().await;
        let video_url = upload_result?;

        let video = self
            .videos
            .insert(NewVideo {
                title: form.title,
                description: form.description,
                video_url,
                uploaded_by: owner.user_id,
            })
            .await?;

        tracing::info!(video_id = %video.id, size_bytes, key = %storage_key, "video uploaded");
        Ok(video)
    }

    async fn transfer(&self, file: &StagedUpload, storage_key: &str) -> Result<String, AppError> {
        let reader = tokio::fs::File::open(file.path()).await?;
        self.storage
            .upload_stream(
                storage_key,
                file.content_type(),
                Some(file.size()),
                Box::pin(BufReader::new(reader)),
            )
            .await
            .map_err(|e| AppError::Storage(e.to_string()))
    }
}
