use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use arena_core::error::AppError;
use arena_core::models::{NewTrial, Trial};

/// Repository for trials (individual races) in PostgreSQL.
#[derive(Clone)]
pub struct TrialRepository {
    pool: Pool<Postgres>,
}

impl TrialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trial: &NewTrial) -> Result<Trial, AppError> {
        let row = sqlx::query_as::<_, TrialRow>(
            r#"
            INSERT INTO trials (edition_id, name, distance_label, start_time, capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(trial.edition_id)
        .bind(&trial.name)
        .bind(&trial.distance_label)
        .bind(trial.start_time)
        .bind(trial.capacity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Trial>, AppError> {
        let row = sqlx::query_as::<_, TrialRow>("SELECT * FROM trials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// List trials by start time, optionally scoped to one edition.
    pub async fn list(
        &self,
        edition_id: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<Trial>, AppError> {
        let rows = sqlx::query_as::<_, TrialRow>(
            r#"
            SELECT * FROM trials
            WHERE ($1::uuid IS NULL OR edition_id = $1)
            ORDER BY start_time ASC NULLS LAST, created_at ASC
            LIMIT $2
            "#,
        )
        .bind(edition_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: Uuid, trial: &NewTrial) -> Result<Option<Trial>, AppError> {
        let row = sqlx::query_as::<_, TrialRow>(
            r#"
            UPDATE trials
            SET edition_id = $2, name = $3, distance_label = $4, start_time = $5,
                capacity = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(trial.edition_id)
        .bind(&trial.name)
        .bind(&trial.distance_label)
        .bind(trial.start_time)
        .bind(trial.capacity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct TrialRow {
    id: Uuid,
    edition_id: Uuid,
    name: String,
    distance_label: String,
    start_time: Option<DateTime<Utc>>,
    capacity: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TrialRow> for Trial {
    fn from(row: TrialRow) -> Self {
        Trial {
            id: row.id,
            edition_id: row.edition_id,
            name: row.name,
            distance_label: row.distance_label,
            start_time: row.start_time,
            capacity: row.capacity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
