//! HTTP request handlers, one file per route.

pub mod bio;
pub mod listing_videos;
pub mod login;
pub mod register;
pub mod registered_users;
pub mod user_metadata;
pub mod user_videos;
pub mod video_upload;
