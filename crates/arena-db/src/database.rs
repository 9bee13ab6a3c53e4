use arena_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::content_repository::ContentRepository;
use crate::edition_repository::EditionRepository;
use crate::event_repository::EventRepository;
use crate::token_repository::TokenRepository;
use crate::trial_repository::TrialRepository;
use crate::user_repository::UserRepository;

/// Central database facade. Owns the connection pool, runs migrations,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    pub fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn token_repo(&self) -> TokenRepository {
        TokenRepository::new(self.pool.clone())
    }

    pub fn event_repo(&self) -> EventRepository {
        EventRepository::new(self.pool.clone())
    }

    pub fn edition_repo(&self) -> EditionRepository {
        EditionRepository::new(self.pool.clone())
    }

    pub fn trial_repo(&self) -> TrialRepository {
        TrialRepository::new(self.pool.clone())
    }

    pub fn content_repo(&self) -> ContentRepository {
        ContentRepository::new(self.pool.clone())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a sqlx error to the application error space, turning unique-key
/// violations into conflicts so handlers can answer 409.
pub(crate) fn map_db_err(context: &str, err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error()
        && db_err.is_unique_violation()
    {
        return AppError::Conflict(format!("{context} already exists"));
    }
    AppError::DatabaseError(err.to_string())
}
