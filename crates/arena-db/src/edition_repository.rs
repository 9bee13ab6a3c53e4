use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use arena_core::error::AppError;
use arena_core::models::{Edition, NewEdition};

use crate::database::map_db_err;

/// Repository for event editions in PostgreSQL.
#[derive(Clone)]
pub struct EditionRepository {
    pool: Pool<Postgres>,
}

impl EditionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new edition. A duplicate (event, year) pair surfaces as
    /// [`AppError::Conflict`]; an unknown event id as a database error
    /// (foreign key).
    pub async fn create(&self, edition: &NewEdition) -> Result<Edition, AppError> {
        let row = sqlx::query_as::<_, EditionRow>(
            r#"
            INSERT INTO editions (event_id, year, start_date, end_date, registration_open)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(edition.event_id)
        .bind(edition.year)
        .bind(edition.start_date)
        .bind(edition.end_date)
        .bind(edition.registration_open)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("edition", e))?;

        Ok(row.into())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Edition>, AppError> {
        let row = sqlx::query_as::<_, EditionRow>("SELECT * FROM editions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// List editions, newest year first, optionally scoped to one event.
    pub async fn list(
        &self,
        event_id: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<Edition>, AppError> {
        let rows = sqlx::query_as::<_, EditionRow>(
            r#"
            SELECT * FROM editions
            WHERE ($1::uuid IS NULL OR event_id = $1)
            ORDER BY year DESC
            LIMIT $2
            "#,
        )
        .bind(event_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        edition: &NewEdition,
    ) -> Result<Option<Edition>, AppError> {
        let row = sqlx::query_as::<_, EditionRow>(
            r#"
            UPDATE editions
            SET event_id = $2, year = $3, start_date = $4, end_date = $5,
                registration_open = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(edition.event_id)
        .bind(edition.year)
        .bind(edition.start_date)
        .bind(edition.end_date)
        .bind(edition.registration_open)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_err("edition", e))?;

        Ok(row.map(Into::into))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM editions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct EditionRow {
    id: Uuid,
    event_id: Uuid,
    year: i32,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    registration_open: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EditionRow> for Edition {
    fn from(row: EditionRow) -> Self {
        Edition {
            id: row.id,
            event_id: row.event_id,
            year: row.year,
            start_date: row.start_date,
            end_date: row.end_date,
            registration_open: row.registration_open,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
