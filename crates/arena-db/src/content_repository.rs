use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use arena_core::error::AppError;
use arena_core::models::{Content, NewContent};

use crate::database::map_db_err;

/// Repository for editorial content pages in PostgreSQL.
#[derive(Clone)]
pub struct ContentRepository {
    pool: Pool<Postgres>,
}

impl ContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new page. A duplicate slug surfaces as [`AppError::Conflict`].
    pub async fn create(&self, content: &NewContent) -> Result<Content, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            INSERT INTO contents (slug, title, body, published)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&content.slug)
        .bind(&content.title)
        .bind(&content.body)
        .bind(content.published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("content slug", e))?;

        Ok(row.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Content>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>("SELECT * FROM contents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Content>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>("SELECT * FROM contents WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// List pages, newest first, optionally filtered by published flag.
    pub async fn list(
        &self,
        published: Option<bool>,
        limit: usize,
    ) -> Result<Vec<Content>, AppError> {
        let rows = sqlx::query_as::<_, ContentRow>(
            r#"
            SELECT * FROM contents
            WHERE ($1::boolean IS NULL OR published = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(published)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: Uuid, content: &NewContent) -> Result<Option<Content>, AppError> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
            UPDATE contents
            SET slug = $2, title = $3, body = $4, published = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&content.slug)
        .bind(&content.title)
        .bind(&content.body)
        .bind(content.published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("content slug", e))?;

        Ok(row.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct ContentRow {
    id: Uuid,
    slug: String,
    title: String,
    body: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContentRow> for Content {
    fn from(row: ContentRow) -> Self {
        Content {
            id: row.id,
            slug: row.slug,
            title: row.title,
            body: row.body,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
