use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use arena_core::error::AppError;
use arena_core::models::{Event, NewEvent};

/// Repository for events in PostgreSQL.
#[derive(Clone)]
pub struct EventRepository {
    pool: Pool<Postgres>,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, event: &NewEvent) -> Result<Event, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (name, location, discipline, description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&event.name)
        .bind(&event.location)
        .bind(&event.discipline)
        .bind(&event.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// List events, newest first.
    pub async fn list(&self, limit: usize) -> Result<Vec<Event>, AppError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT * FROM events
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Replace an event's fields. Returns `None` when the id is unknown.
    pub async fn update(&self, id: Uuid, event: &NewEvent) -> Result<Option<Event>, AppError> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET name = $2, location = $3, discipline = $4, description = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&event.name)
        .bind(&event.location)
        .bind(&event.discipline)
        .bind(&event.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Delete an event. Returns false when the id is unknown.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    name: String,
    location: String,
    discipline: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            name: row.name,
            location: row.location,
            discipline: row.discipline,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
