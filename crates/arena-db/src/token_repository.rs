use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};

use arena_core::error::AppError;
use arena_core::token::RefreshToken;

use crate::database::map_db_err;

/// Repository for refresh-token persistence in PostgreSQL.
///
/// Rows are insert-only: no update path exists, and expired rows are left
/// in place (matching the token lifecycle in `arena_core::token`).
#[derive(Clone)]
pub struct TokenRepository {
    pool: Pool<Postgres>,
}

impl TokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new refresh-token row and return it as stored.
    pub async fn create(&self, record: &RefreshToken) -> Result<RefreshToken, AppError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            INSERT INTO refresh_tokens (token, user_identity, expiry_date)
            VALUES ($1, $2, $3)
            RETURNING token, user_identity, expiry_date
            "#,
        )
        .bind(&record.token)
        .bind(&record.user_identity)
        .bind(record.expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_err("refresh token", e))?;

        Ok(row.into())
    }

    /// Look up a refresh token by its opaque value.
    pub async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, AppError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT token, user_identity, expiry_date
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct RefreshTokenRow {
    token: String,
    user_identity: String,
    expiry_date: DateTime<Utc>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshToken {
            token: row.token,
            user_identity: row.user_identity,
            expiry_date: row.expiry_date,
        }
    }
}

// -- Trait implementation --

impl arena_core::traits::RefreshTokenStore for TokenRepository {
    async fn create(&self, record: &RefreshToken) -> Result<RefreshToken, AppError> {
        TokenRepository::create(self, record).await
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, AppError> {
        TokenRepository::find_by_token(self, token).await
    }
}
