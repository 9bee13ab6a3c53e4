use std::sync::Arc;

use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use arena_core::AppError;

use crate::dto::ErrorResponse;
use crate::state::AppState;

/// JWT claims carried by access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing material plus the access-token TTL.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: TimeDelta,
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: TimeDelta::seconds(ttl_seconds as i64),
        }
    }

    /// Mint a signed access token for `subject`.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Generic(format!("failed to sign access token: {e}")))
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidCredentials)
    }
}

/// Middleware that validates `Authorization: Bearer <access token>` and
/// injects the verified [`Claims`] into request extensions.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    let claims = match token.map(|t| state.jwt.verify(t)) {
        Some(Ok(claims)) => claims,
        _ => {
            let body = ErrorResponse {
                error: "unauthorized".to_string(),
                message: "Missing or invalid Authorization header. Expected: Bearer <access token>"
                    .to_string(),
            };
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}
