use async_trait::async_trait;
use chrono::Utc;
use clipvault_core::models::{NewVideo, Video};
use clipvault_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Trait for video metadata repository operations
/// This abstracts the database implementation (PostgreSQL)
#[async_trait]
pub trait VideoRepositoryTrait: Send + Sync {
    async fn insert(&self, new_video: NewVideo) -> Result<Video, AppError>;

    /// List videos uploaded by `owner`, oldest first. `None` means no limit.
    async fn list_by_owner(&self, owner: Uuid, limit: Option<i64>)
        -> Result<Vec<Video>, AppError>;
}

#[derive(Clone)]
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepositoryTrait for PostgresVideoRepository {
    #[tracing::instrument(skip(self, new_video), fields(db.table = "videos", db.operation = "insert"))]
    async fn insert(&self, new_video: NewVideo) -> Result<Video, AppError> {
        sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (id, title, description, video_url, uploaded_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, video_url, uploaded_by, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_video.title)
        .bind(&new_video.description)
        .bind(&new_video.video_url)
        .bind(new_video.uploaded_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select_list"))]
    async fn list_by_owner(
        &self,
        owner: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Video>, AppError> {
        let mut sql = String::from(
            r#"
            SELECT id, title, description, video_url, uploaded_by, created_at
            FROM videos
            WHERE uploaded_by = $1
            ORDER BY created_at ASC
            "#,
        );

        if limit.is_some() {
            sql.push_str(" LIMIT $2");
        }

        let mut query_builder = sqlx::query_as::<Postgres, Video>(&sql).bind(owner);

        if let Some(limit) = limit {
            query_builder = query_builder.bind(limit);
        }

        query_builder
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::from)
    }
}
