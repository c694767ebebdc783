//! Application state shared by every request handler.

use std::sync::Arc;

use clipvault_core::Config;
use clipvault_db::{UserRepositoryTrait, VideoRepositoryTrait};
use clipvault_storage::Storage;

use crate::auth::TokenService;
use crate::services::mailer::Mailer;

/// Shared application state: configuration plus the store, blob, mail, and
/// token collaborators. Built once in setup and handed to the router as
/// `Arc<AppState>`; the trait objects let tests substitute in-memory
/// implementations.
pub struct AppState {
    pub config: Config,
    pub users: Arc<dyn UserRepositoryTrait>,
    pub videos: Arc<dyn VideoRepositoryTrait>,
    pub storage: Arc<dyn Storage>,
    pub mailer: Arc<dyn Mailer>,
    pub tokens: TokenService,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
