use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use crate::integration::common::{
    body_json, json_request, register_and_signin, setup_test_app,
};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["info"]["title"], "Arena API");
    assert!(json["paths"]["/v1/auth/refreshtoken"].is_object());
}

#[tokio::test]
async fn unauthenticated_mutation_returns_401() {
    let app = setup_test_app().await;

    let body = serde_json::json!({
        "name": "Lakeside Triathlon",
        "location": "Annecy",
        "discipline": "triathlon",
    });

    let response = app
        .router
        .oneshot(json_request("POST", "/v1/events", None, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn event_crud_round_trip() {
    let app = setup_test_app().await;
    let (access, _) = register_and_signin(&app.router, "admin").await;

    // Create
    let body = serde_json::json!({
        "name": "Lakeside Triathlon",
        "location": "Annecy",
        "discipline": "triathlon",
        "description": "Olympic-distance race on the lake",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/events", Some(&access), &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Lakeside Triathlon");

    // Get
    let response = app
        .router
        .clone()
        .oneshot(
            Request::get(format!("/v1/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // List
    let response = app
        .router
        .clone()
        .oneshot(Request::get("/v1/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["events"][0]["id"], id.as_str());

    // Update
    let update = serde_json::json!({
        "name": "Lakeside Triathlon",
        "location": "Annecy",
        "discipline": "triathlon",
        "description": "Now with a sprint distance",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/events/{id}"),
            Some(&access),
            &update,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["description"], "Now with a sprint distance");

    // Delete
    let response = app
        .router
        .clone()
        .oneshot(
            Request::delete(format!("/v1/events/{id}"))
                .header("authorization", format!("Bearer {access}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .router
        .oneshot(
            Request::get(format!("/v1/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_unknown_event_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get(format!("/v1/events/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn editions_are_unique_per_event_year() {
    let app = setup_test_app().await;
    let (access, _) = register_and_signin(&app.router, "admin").await;

    let event = serde_json::json!({
        "name": "Lakeside Triathlon",
        "location": "Annecy",
        "discipline": "triathlon",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/events", Some(&access), &event))
        .await
        .unwrap();
    let event_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let edition = serde_json::json!({
        "event_id": event_id,
        "year": 2026,
        "start_date": "2026-06-20",
        "registration_open": true,
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/editions", Some(&access), &edition))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same event + year again
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/editions", Some(&access), &edition))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Filtered list
    let response = app
        .router
        .oneshot(
            Request::get(format!("/v1/editions?event_id={event_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["editions"][0]["year"], 2026);
}

#[tokio::test]
async fn trials_are_scoped_to_editions() {
    let app = setup_test_app().await;
    let (access, _) = register_and_signin(&app.router, "admin").await;

    let event = serde_json::json!({
        "name": "City Run",
        "location": "Lyon",
        "discipline": "running",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/events", Some(&access), &event))
        .await
        .unwrap();
    let event_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let edition = serde_json::json!({
        "event_id": event_id,
        "year": 2026,
        "start_date": "2026-09-12",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/editions", Some(&access), &edition))
        .await
        .unwrap();
    let edition_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let trial = serde_json::json!({
        "edition_id": edition_id,
        "name": "10K",
        "distance_label": "10km",
        "capacity": 500,
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/trials", Some(&access), &trial))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .oneshot(
            Request::get(format!("/v1/trials?edition_id={edition_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["trials"][0]["name"], "10K");
    assert_eq!(json["trials"][0]["capacity"], 500);
}

#[tokio::test]
async fn content_slug_lookup_and_conflicts() {
    let app = setup_test_app().await;
    let (access, _) = register_and_signin(&app.router, "editor").await;

    let page = serde_json::json!({
        "slug": "race-rules",
        "title": "Race rules",
        "body": "No drafting.",
        "published": true,
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/contents", Some(&access), &page))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Slug lookup
    let response = app
        .router
        .clone()
        .oneshot(
            Request::get("/v1/contents/slug/race-rules")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Race rules");

    // Duplicate slug
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/contents", Some(&access), &page))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Invalid slug
    let bad = serde_json::json!({
        "slug": "not a slug!",
        "title": "x",
        "body": "y",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/contents", Some(&access), &bad))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unpublished pages are excluded by the published filter
    let draft = serde_json::json!({
        "slug": "draft-page",
        "title": "Draft",
        "body": "wip",
    });
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/v1/contents", Some(&access), &draft))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .oneshot(
            Request::get("/v1/contents?published=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["contents"][0]["slug"], "race-rules");
}
