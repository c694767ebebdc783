use async_trait::async_trait;
use chrono::Utc;
use clipvault_core::models::{NewUser, User};
use clipvault_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Trait for user repository operations
/// This abstracts the database implementation (PostgreSQL)
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Insert a new account. A duplicate email maps to [`AppError::Conflict`],
    /// backed by the unique index so concurrent registrations cannot both win.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Set the bio for the account with the given email. Matching no rows is
    /// not an error; the write is simply lost.
    async fn set_bio(&self, email: &str, bio: &str) -> Result<(), AppError>;

    async fn list_all(&self) -> Result<Vec<User>, AppError>;
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for PostgresUserRepository {
    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select_one"))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<Postgres, User>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, password_hash, bio, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    #[tracing::instrument(skip(self, new_user), fields(db.table = "users", db.operation = "insert"))]
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let result = sqlx::query_as::<Postgres, User>(
            r#"
            INSERT INTO users (id, first_name, last_name, email, phone_number, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, first_name, last_name, email, phone_number, password_hash, bio, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.phone_number)
        .bind(&new_user.password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::debug!(email = %new_user.email, "duplicate email rejected by unique index");
                Err(AppError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(skip(self, bio), fields(db.table = "users", db.operation = "update"))]
    async fn set_bio(&self, email: &str, bio: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET bio = $1 WHERE email = $2")
            .bind(bio)
            .bind(email)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(email = %email, "bio update matched no rows");
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "users", db.operation = "select_list"))]
    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<Postgres, User>(
            r#"
            SELECT id, first_name, last_name, email, phone_number, password_hash, bio, created_at
            FROM users
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
