//! Shared naming for staged uploads and storage keys.
//!
//! Key format: `{owner_email}/{filename}`, where the filename is the staged
//! name minted when the upload arrives. Filenames carry a millisecond
//! timestamp, so two uploads landing in the same millisecond share a name and
//! the later write wins.

use chrono::Utc;

/// Mint the filename a freshly received video is staged (and later stored)
/// under: `video-{unix_millis}.{ext}`.
///
/// The extension is the MIME subtype (`video/mp4` becomes `mp4`), with any
/// trailing parameters stripped; content types without a subtype fall back to
/// `bin`.
pub fn staged_filename(content_type: &str) -> String {
    let subtype = content_type
        .split('/')
        .nth(1)
        .map(|s| s.split(';').next().unwrap_or(s).trim())
        .filter(|s| !s.is_empty())
        .unwrap_or("bin");
    format!("video-{}.{}", Utc::now().timestamp_millis(), subtype)
}

/// Build the storage key for a video owned by `owner_email`.
pub fn video_key(owner_email: &str, filename: &str) -> String {
    format!("{}/{}", owner_email, filename)
}
