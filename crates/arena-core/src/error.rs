use thiserror::Error;

/// Application-wide error types for Arena.
#[derive(Error, Debug)]
pub enum AppError {
    /// Username or password did not check out.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing or verification failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violated (duplicate username, email, slug, ...).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or malformed configuration.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if the error maps to a client mistake rather than a
    /// server-side failure. Used by the HTTP layer to pick log levels.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::ValidationError(_)
                | AppError::NotFound(_)
                | AppError::Conflict(_)
                | AppError::SerializationError(_)
        )
    }
}
