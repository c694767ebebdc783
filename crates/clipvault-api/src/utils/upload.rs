//! Multipart intake for video uploads.
//!
//! The boundary layer walks the form before the upload workflow runs: text
//! fields are collected as strings and the `video` file field is streamed
//! to the spool directory, never buffered whole in memory. Everything else
//! about the file (type, size, word counts) is judged by the workflow.

use std::path::Path;

use axum::extract::multipart::Field;
use axum::extract::Multipart;
use tokio::io::AsyncWriteExt;

use clipvault_core::{AppError, FieldError};
use clipvault_storage::keys::staged_filename;

use super::staging::StagedUpload;

/// Parsed multipart form: `title`, `description`, and the staged file.
/// Missing text fields stay empty and fail word-count validation later.
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub file: Option<StagedUpload>,
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!(error = %e, "failed to read multipart body");
    AppError::Validation(vec![FieldError::new("body", "Invalid multipart body")])
}

/// Walk the multipart body, staging the first `video` file field under
/// `spool_dir`. Additional `video` parts are drained and ignored; unknown
/// fields are skipped.
pub async fn read_upload_form(
    mut multipart: Multipart,
    spool_dir: &Path,
) -> Result<UploadForm, AppError> {
    let mut title = String::new();
    let mut description = String::new();
    let mut file: Option<StagedUpload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "title" => {
                title = field.text().await.map_err(multipart_error)?;
            }
            "description" => {
                description = field.text().await.map_err(multipart_error)?;
            }
            "video" => {
                if file.is_some() {
                    // First file wins; read the extra part out so the body
                    // stream stays consumable.
                    while field.chunk().await.map_err(multipart_error)?.is_some() {}
                    continue;
                }
                file = Some(stage_field(&mut field, spool_dir).await?);
            }
            _ => {}
        }
    }

    Ok(UploadForm {
        title,
        description,
        file,
    })
}

/// Stream one file field to disk. On any mid-stream failure the partial
/// file is removed before the error propagates.
async fn stage_field(field: &mut Field<'_>, spool_dir: &Path) -> Result<StagedUpload, AppError> {
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let filename = staged_filename(&content_type);
    let path = spool_dir.join(&filename);

    let mut out = tokio::fs::File::create(&path).await?;
    match spool_chunks(field, &mut out).await {
        Ok(size) => {
            tracing::debug!(filename = %filename, size_bytes = size, "staged upload file");
            Ok(StagedUpload::new(path, filename, content_type, size))
        }
        Err(e) => {
            drop(out);
            if let Err(cleanup_err) = tokio::fs::remove_file(&path).await {
                tracing::warn!(path = %path.display(), error = %cleanup_err, "failed to remove partial staged file");
            }
            Err(e)
        }
    }
}

async fn spool_chunks(field: &mut Field<'_>, out: &mut tokio::fs::File) -> Result<u64, AppError> {
    let mut size: u64 = 0;
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        out.write_all(&chunk).await?;
        size += chunk.len() as u64;
    }
    out.flush().await?;
    Ok(size)
}

/// Normalize a MIME type for comparison by stripping parameters and
/// lowercasing (e.g. "Video/MP4; codecs=avc1" -> "video/mp4").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}
