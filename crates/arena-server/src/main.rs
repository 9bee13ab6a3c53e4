use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{Method, header};
use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use arena_core::RefreshTokenManager;
use arena_db::{Database, DatabaseConfig};
use arena_server::auth::JwtKeys;
use arena_server::routes;
use arena_server::state::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("arena=info".parse()?))
        .with_target(false)
        .init();

    let jwt_secret =
        std::env::var("ARENA_JWT_SECRET").context("ARENA_JWT_SECRET must be set")?;
    let access_ttl = env_u64("ARENA_ACCESS_TTL_SECONDS", 3600)?;
    let refresh_ttl = env_u64("ARENA_REFRESH_TTL_SECONDS", 86_400)?;
    let port = std::env::var("ARENA_PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");

    let db = Database::connect(&DatabaseConfig::from_env()?).await?;
    db.migrate().await?;

    let state = Arc::new(AppState {
        jwt: JwtKeys::new(&jwt_secret, access_ttl),
        refresh: RefreshTokenManager::new(db.token_repo(), refresh_ttl),
        db,
    });

    // Per-peer-IP rate limit, mirroring the site's public-facing limiter.
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(100)
            .finish()
            .context("invalid rate-limit configuration")?,
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(GovernorLayer::new(governor_conf));

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn env_u64(name: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got '{raw}'")),
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
