use arena_core::RefreshTokenManager;
use arena_db::{Database, TokenRepository};

use crate::auth::JwtKeys;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// HS256 keys and TTL for access tokens.
    pub jwt: JwtKeys,
    /// Refresh-token issuance, backed by the token repository.
    pub refresh: RefreshTokenManager<TokenRepository>,
}
