use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use crate::integration::common::{
    body_json, json_request, register_and_signin, setup_test_app, setup_test_app_with_refresh_ttl,
};

#[tokio::test]
async fn signup_creates_account_without_leaking_hash() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "hunter2hunter2",
    });

    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/signup", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn duplicate_username_returns_409() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "hunter2hunter2",
    });

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/auth/signup", None, &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let again = serde_json::json!({
        "username": "alice",
        "email": "other@example.com",
        "password": "hunter2hunter2",
    });
    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/signup", None, &again))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "conflict");
}

#[tokio::test]
async fn short_password_returns_400() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "username": "alice",
        "email": "alice@example.com",
        "password": "short",
    });

    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/signup", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn signin_with_wrong_password_returns_401() {
    let app = setup_test_app().await;
    register_and_signin(&app.router, "alice").await;

    let body = serde_json::json!({
        "username": "alice",
        "password": "not-the-password",
    });

    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/signin", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signin_returns_bearer_and_refresh_token() {
    let app = setup_test_app().await;
    register_and_signin(&app.router, "alice").await;

    let body = serde_json::json!({
        "username": "alice",
        "password": "hunter2hunter2",
    });
    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/signin", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert_eq!(json["username"], "alice");
    assert!(!json["access_token"].as_str().unwrap().is_empty());
    // Opaque token in canonical hyphenated UUID form.
    let refresh = json["refresh_token"].as_str().unwrap();
    assert!(refresh.parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn refresh_returns_new_access_token() {
    let app = setup_test_app().await;
    let (_, refresh) = register_and_signin(&app.router, "alice").await;

    let body = serde_json::json!({ "refresh_token": refresh });
    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/refreshtoken", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["refresh_token"], refresh);
    assert!(!json["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_refresh_token_returns_403() {
    let app = setup_test_app().await;

    let body = serde_json::json!({ "refresh_token": Uuid::new_v4().to_string() });
    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/refreshtoken", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "forbidden");
}

#[tokio::test]
async fn expired_refresh_token_returns_403() {
    // TTL 0: the token is already at its expiry instant when stored.
    let app = setup_test_app_with_refresh_ttl(0).await;
    let (_, refresh) = register_and_signin(&app.router, "alice").await;

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let body = serde_json::json!({ "refresh_token": refresh });
    let response = app
        .router
        .oneshot(json_request("POST", "/v1/auth/refreshtoken", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("expired")
    );
}

#[tokio::test]
async fn me_returns_profile() {
    let app = setup_test_app().await;
    let (access, _) = register_and_signin(&app.router, "alice").await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/users/me")
                .header("authorization", format!("Bearer {access}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
}

#[tokio::test]
async fn me_without_token_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/v1/users/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_bearer_token_returns_401() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/v1/users/me")
                .header("authorization", "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
