use std::future::Future;

use crate::error::AppError;
use crate::token::RefreshToken;

/// Persists and retrieves refresh-token records.
///
/// Abstracted so the [`RefreshTokenManager`](crate::token::RefreshTokenManager)
/// can run against an in-memory fake in unit tests and PostgreSQL in
/// production.
pub trait RefreshTokenStore: Send + Sync + Clone {
    /// Insert a new record. Returns it with any store-assigned fields
    /// populated. Failures propagate uninterpreted; no retry happens here.
    fn create(
        &self,
        record: &RefreshToken,
    ) -> impl Future<Output = Result<RefreshToken, AppError>> + Send;

    /// Look up a record by its opaque token value.
    fn find_by_token(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<RefreshToken>, AppError>> + Send;
}
