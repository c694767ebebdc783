//! In-memory repository implementations
//!
//! Vec-backed stores that satisfy the repository traits without a database.
//! They back local development and the API integration tests; insertion order
//! stands in for `created_at` ordering.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use clipvault_core::error::AppError;
use clipvault_core::models::{NewUser, NewVideo, User, Video};

use super::users::UserRepositoryTrait;
use super::videos::VideoRepositoryTrait;

/// User store held entirely in memory. Clones share the same backing Vec.
#[derive(Clone)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed an existing record, bypassing the duplicate check.
    pub async fn add_user(&self, user: User) {
        self.users.lock().await.push(user);
    }

    pub async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().await;
        // Same rule the unique index enforces in Postgres.
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::Conflict);
        }
        let user = User {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone_number: new_user.phone_number,
            password_hash: new_user.password_hash,
            bio: None,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn set_bio(&self, email: &str, bio: &str) -> Result<(), AppError> {
        let mut users = self.users.lock().await;
        if let Some(user) = users.iter_mut().find(|u| u.email == email) {
            user.bio = Some(bio.to_string());
        }
        // Matching no rows is not an error, same as the UPDATE.
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().await.clone())
    }
}

/// Video store held entirely in memory. Clones share the same backing Vec.
#[derive(Clone)]
pub struct MemoryVideoRepository {
    videos: Arc<Mutex<Vec<Video>>>,
}

impl MemoryVideoRepository {
    pub fn new() -> Self {
        Self {
            videos: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.videos.lock().await.len()
    }
}

#[async_trait]
impl VideoRepositoryTrait for MemoryVideoRepository {
    async fn insert(&self, new_video: NewVideo) -> Result<Video, AppError> {
        let video = Video {
            id: Uuid::new_v4(),
            title: new_video.title,
            description: new_video.description,
            video_url: new_video.video_url,
            uploaded_by: new_video.uploaded_by,
            created_at: Utc::now(),
        };
        self.videos.lock().await.push(video.clone());
        Ok(video)
    }

    async fn list_by_owner(
        &self,
        owner: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Video>, AppError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .await
            .iter()
            .filter(|v| v.uploaded_by == owner)
            .cloned()
            .collect();
        if let Some(n) = limit {
            videos.truncate(n.max(0) as usize);
        }
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: email.to_string(),
            phone_number: "9876543210".to_string(),
            password_hash: "$2b$04$fakehashfakehashfakehash".to_string(),
        }
    }

    fn new_video(owner: Uuid, title: &str) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            description: "a clip".to_string(),
            video_url: format!("http://localhost:4000/files/{title}.mp4"),
            uploaded_by: owner,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let repo = MemoryUserRepository::new();
        repo.insert(new_user("priya@example.com")).await.unwrap();

        let err = repo.insert(new_user("priya@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_by_email_is_exact() {
        let repo = MemoryUserRepository::new();
        repo.insert(new_user("priya@example.com")).await.unwrap();

        assert!(repo
            .find_by_email("priya@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_email("PRIYA@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn set_bio_on_missing_user_is_not_an_error() {
        let repo = MemoryUserRepository::new();
        assert!(repo.set_bio("ghost@example.com", "hello").await.is_ok());

        repo.insert(new_user("priya@example.com")).await.unwrap();
        repo.set_bio("priya@example.com", "film student")
            .await
            .unwrap();
        let user = repo
            .find_by_email("priya@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.bio.as_deref(), Some("film student"));
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order() {
        let repo = MemoryVideoRepository::new();
        let owner = Uuid::new_v4();
        for title in ["first", "second", "third"] {
            repo.insert(new_video(owner, title)).await.unwrap();
        }
        repo.insert(new_video(Uuid::new_v4(), "someone-elses"))
            .await
            .unwrap();

        let videos = repo.list_by_owner(owner, None).await.unwrap();
        let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn limit_caps_results_and_none_means_unbounded() {
        let repo = MemoryVideoRepository::new();
        let owner = Uuid::new_v4();
        for title in ["a", "b", "c"] {
            repo.insert(new_video(owner, title)).await.unwrap();
        }

        assert_eq!(repo.list_by_owner(owner, Some(2)).await.unwrap().len(), 2);
        assert_eq!(repo.list_by_owner(owner, None).await.unwrap().len(), 3);
    }
}
