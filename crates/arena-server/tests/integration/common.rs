use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

use arena_core::RefreshTokenManager;
use arena_db::Database;
use arena_server::auth::JwtKeys;
use arena_server::routes;
use arena_server::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-key";

pub struct TestApp {
    pub router: Router,
    _container: ContainerAsync<GenericImage>,
}

/// Spin up a PostgreSQL container, run migrations, and build the app router.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_refresh_ttl(3600).await
}

/// Variant with a configurable refresh-token TTL, for expiry tests.
pub async fn setup_test_app_with_refresh_ttl(refresh_ttl_seconds: u64) -> TestApp {
    let container = GenericImage::new("postgres", "16")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "arena_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let url = format!("postgresql://postgres:postgres@{host}:{port}/arena_test");

    let pool = retry_connect(&url).await;
    let db = Database::from_pool(pool);
    db.migrate().await.expect("Failed to run migrations");

    let state = Arc::new(AppState {
        jwt: JwtKeys::new(TEST_JWT_SECRET, 3600),
        refresh: RefreshTokenManager::new(db.token_repo(), refresh_ttl_seconds),
        db,
    });

    TestApp {
        router: routes::router(state),
        _container: container,
    }
}

async fn retry_connect(url: &str) -> PgPool {
    for _ in 0..30 {
        if let Ok(pool) = PgPoolOptions::new().max_connections(5).connect(url).await {
            return pool;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("Failed to connect to test database");
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Build a JSON request.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Register `username` and sign in, returning (access token, refresh token).
pub async fn register_and_signin(router: &Router, username: &str) -> (String, String) {
    let signup = serde_json::json!({
        "username": username,
        "email": format!("{username}@example.com"),
        "password": "hunter2hunter2",
    });
    let response = router
        .clone()
        .oneshot(json_request("POST", "/v1/auth/signup", None, &signup))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let signin = serde_json::json!({
        "username": username,
        "password": "hunter2hunter2",
    });
    let response = router
        .clone()
        .oneshot(json_request("POST", "/v1/auth/signin", None, &signin))
        .await
        .unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let json = body_json(response).await;
    (
        json["access_token"].as_str().unwrap().to_string(),
        json["refresh_token"].as_str().unwrap().to_string(),
    )
}
