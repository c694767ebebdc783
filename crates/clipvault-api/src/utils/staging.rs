//! Staged upload files.
//!
//! Multipart file fields are spooled to disk before the upload workflow
//! runs. [`StagedUpload`] owns that on-disk artifact: the workflow discards
//! it explicitly on every path that is done with the file, and `Drop` sweeps
//! up anything a panic or an early `?` left behind. The file must never
//! outlive the request that staged it.

use std::mem;
use std::path::{Path, PathBuf};

/// A file field staged under the spool directory, owned by one request.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
    filename: String,
    content_type: String,
    size: u64,
}

impl StagedUpload {
    pub fn new(path: PathBuf, filename: String, content_type: String, size: u64) -> Self {
        Self {
            path,
            filename,
            content_type,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The generated on-disk name, which doubles as the blob filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Content type as the client declared it, unnormalized.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Remove the staged file. Consumes the guard, so `Drop` has nothing
    /// left to do.
    pub async fn discard(mut self) {
        let path = mem::take(&mut self.path);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove staged upload");
            }
        }
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        // Empty path means discard() already ran.
        if self.path.as_os_str().is_empty() {
            return;
        }
        let path = mem::take(&mut self.path);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "staged upload left on disk");
            }
        }
    }
}
