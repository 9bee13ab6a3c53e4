//! Refresh-token issuance and expiry checking.
//!
//! A refresh token is an opaque, time-limited credential bound to a user
//! identity. It has exactly two states, `Valid` and `Expired`, with a single
//! one-way transition at `expiry_date`. There is no revocation flag, and
//! expired rows are never deleted (an open operational gap inherited from
//! the original system; see DESIGN.md).

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::traits::RefreshTokenStore;

/// A persisted refresh-token record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RefreshToken {
    /// Opaque unique handle, a hyphenated UUID v4 string.
    pub token: String,
    /// Owning principal's username. A denormalized back-reference for
    /// lookup and audit, not a foreign key.
    pub user_identity: String,
    /// Absolute instant after which the token must be rejected. Set once at
    /// creation, never mutated.
    pub expiry_date: DateTime<Utc>,
}

impl RefreshToken {
    /// True iff the expiry is strictly before the current time.
    ///
    /// Pure and total; lookup misses are the caller's concern, this only
    /// judges a record the caller already retrieved.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Clock-explicit variant of [`is_expired`](Self::is_expired).
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now
    }
}

/// Issues refresh tokens against an injected store.
///
/// Stateless and reentrant: every [`issue`](Self::issue) call is an
/// independent insert against the shared store, and concurrent issuances
/// require no coordination since each mints an independent random token.
#[derive(Clone)]
pub struct RefreshTokenManager<S: RefreshTokenStore> {
    store: S,
    ttl: TimeDelta,
}

impl<S: RefreshTokenStore> RefreshTokenManager<S> {
    /// Create a manager with an injected store and a TTL in whole seconds.
    pub fn new(store: S, ttl_seconds: u64) -> Self {
        Self {
            store,
            ttl: TimeDelta::seconds(ttl_seconds as i64),
        }
    }

    /// Mint a refresh token for `principal` and persist it.
    ///
    /// The token is a fresh UUID v4 (122 random bits from the OS CSPRNG),
    /// so collisions among stored records are negligible. Returns the token
    /// string; store failures propagate to the caller unretried.
    pub async fn issue(&self, principal: &str) -> Result<String, AppError> {
        let record = RefreshToken {
            token: Uuid::new_v4().to_string(),
            user_identity: principal.to_string(),
            expiry_date: Utc::now() + self.ttl,
        };

        let stored = self.store.create(&record).await?;
        tracing::debug!(principal, expiry = %stored.expiry_date, "issued refresh token");

        Ok(stored.token)
    }
}
