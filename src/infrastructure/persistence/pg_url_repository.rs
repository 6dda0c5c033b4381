//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Url;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for short URL storage.
///
/// Uses bound parameters for every query. Id uniqueness is enforced by the
/// `urls` primary key; violations surface as [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for Url {
    fn from(row: UrlRow) -> Self {
        Url::new(row.id, row.destination, row.created_at)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn put(&self, url: Url) -> Result<(), AppError> {
        sqlx::query("INSERT INTO urls (id, destination, created_at) VALUES ($1, $2, $3)")
            .bind(&url.id)
            .bind(&url.destination)
            .bind(url.created)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Url>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, destination, created_at FROM urls WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Url::from))
    }

    async fn list(&self) -> Result<Vec<Url>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            "SELECT id, destination, created_at FROM urls ORDER BY created_at, id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Url::from).collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
