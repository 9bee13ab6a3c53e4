use std::sync::Arc;

use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use arena_core::models::{NewContent, NewEdition, NewEvent, NewTrial, NewUser};
use arena_core::{password, AppError};

use crate::auth::{require_auth, Claims};
use crate::dto::{
    ContentListResponse, ContentRequest, ContentResponse, EditionListResponse, EditionRequest,
    EditionResponse, ErrorResponse, EventListResponse, EventRequest, EventResponse,
    HealthResponse, ListContentsQuery, ListEditionsQuery, ListEventsQuery, ListTrialsQuery,
    RefreshTokenRequest, SigninRequest, SignupRequest, TokenResponse, TrialListResponse,
    TrialRequest, TrialResponse, UserResponse,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and middleware.
///
/// Reads are public; mutations sit behind the bearer-token middleware.
/// The auth layer is attached per method router because GET and the
/// guarded methods share the same paths.
pub fn router(state: Arc<AppState>) -> Router {
    let auth = middleware::from_fn_with_state(state.clone(), require_auth);

    Router::new()
        .route("/health", get(health))
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/signin", post(signin))
        .route("/v1/auth/refreshtoken", post(refresh_token))
        .route("/v1/users/me", get(me).route_layer(auth.clone()))
        .route(
            "/v1/events",
            get(list_events).merge(post(create_event).route_layer(auth.clone())),
        )
        .route(
            "/v1/events/{id}",
            get(get_event).merge(
                put(update_event)
                    .delete(delete_event)
                    .route_layer(auth.clone()),
            ),
        )
        .route(
            "/v1/editions",
            get(list_editions).merge(post(create_edition).route_layer(auth.clone())),
        )
        .route(
            "/v1/editions/{id}",
            get(get_edition).merge(
                put(update_edition)
                    .delete(delete_edition)
                    .route_layer(auth.clone()),
            ),
        )
        .route(
            "/v1/trials",
            get(list_trials).merge(post(create_trial).route_layer(auth.clone())),
        )
        .route(
            "/v1/trials/{id}",
            get(get_trial).merge(
                put(update_trial)
                    .delete(delete_trial)
                    .route_layer(auth.clone()),
            ),
        )
        .route(
            "/v1/contents",
            get(list_contents).merge(post(create_content).route_layer(auth.clone())),
        )
        .route(
            "/v1/contents/{id}",
            get(get_content).merge(
                put(update_content)
                    .delete(delete_content)
                    .route_layer(auth),
            ),
        )
        .route("/v1/contents/slug/{slug}", get(get_content_by_slug))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Username or email taken", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = body.username.trim();
    if username.is_empty() {
        return Err(AppError::ValidationError("username must not be empty".into()).into());
    }
    if !body.email.contains('@') {
        return Err(AppError::ValidationError(format!("invalid email: {}", body.email)).into());
    }
    password::validate_password(&body.password)?;

    let user = state
        .db
        .user_repo()
        .create(&NewUser {
            username: username.to_string(),
            email: body.email,
            password_hash: password::hash_password(&body.password)?,
        })
        .await?;

    tracing::info!(username = %user.username, "new account registered");

    Ok((StatusCode::CREATED, axum::Json(UserResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/v1/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Access and refresh tokens", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn signin(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<SigninRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .user_repo()
        .find_by_username(&body.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials.into());
    }

    let access_token = state.jwt.issue(&user.username)?;
    let refresh_token = state.refresh.issue(&user.username).await?;

    Ok(axum::Json(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer",
        username: user.username,
    }))
}

#[utoipa::path(
    post,
    path = "/v1/auth/refreshtoken",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "New access token", body = TokenResponse),
        (status = 403, description = "Unknown or expired refresh token", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn refresh_token(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .db
        .token_repo()
        .find_by_token(&body.refresh_token)
        .await?;

    let Some(record) = record else {
        let body = ErrorResponse {
            error: "forbidden".to_string(),
            message: "Refresh token is not recognized. Please sign in again.".to_string(),
        };
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    };

    if record.is_expired() {
        let body = ErrorResponse {
            error: "forbidden".to_string(),
            message: "Refresh token has expired. Please make a new sign-in request.".to_string(),
        };
        return Ok((StatusCode::FORBIDDEN, axum::Json(body)).into_response());
    }

    let access_token = state.jwt.issue(&record.user_identity)?;

    Ok(axum::Json(TokenResponse {
        access_token,
        refresh_token: record.token,
        token_type: "Bearer",
        username: record.user_identity,
    })
    .into_response())
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/users/me",
    responses(
        (status = 200, description = "Authenticated user's profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "users"
)]
pub async fn me(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .db
        .user_repo()
        .find_by_username(&claims.sub)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User not found: {}", claims.sub)))?;

    Ok(axum::Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "List of events", body = EventListResponse),
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEventsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = query.limit.unwrap_or(20).min(100);
    let events = state.db.event_repo().list(limit).await?;
    let total = events.len();

    Ok(axum::Json(EventListResponse {
        events: events.into_iter().map(EventResponse::from).collect(),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .db
        .event_repo()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event not found: {id}")))?;

    Ok(axum::Json(EventResponse::from(event)))
}

#[utoipa::path(
    post,
    path = "/v1/events",
    request_body = EventRequest,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<EventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state.db.event_repo().create(&new_event(body)?).await?;

    Ok((StatusCode::CREATED, axum::Json(EventResponse::from(event))))
}

#[utoipa::path(
    put,
    path = "/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    request_body = EventRequest,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<EventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = state
        .db
        .event_repo()
        .update(id, &new_event(body)?)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event not found: {id}")))?;

    Ok(axum::Json(EventResponse::from(event)))
}

#[utoipa::path(
    delete,
    path = "/v1/events/{id}",
    params(("id" = Uuid, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.event_repo().delete(id).await? {
        return Err(AppError::NotFound(format!("Event not found: {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn new_event(body: EventRequest) -> Result<NewEvent, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::ValidationError("event name must not be empty".into()));
    }
    Ok(NewEvent {
        name: body.name,
        location: body.location,
        discipline: body.discipline,
        description: body.description,
    })
}

// ---------------------------------------------------------------------------
// Editions
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/editions",
    params(ListEditionsQuery),
    responses(
        (status = 200, description = "List of editions", body = EditionListResponse),
    ),
    tag = "editions"
)]
pub async fn list_editions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEditionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = query.limit.unwrap_or(20).min(100);
    let editions = state.db.edition_repo().list(query.event_id, limit).await?;
    let total = editions.len();

    Ok(axum::Json(EditionListResponse {
        editions: editions.into_iter().map(EditionResponse::from).collect(),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/editions/{id}",
    params(("id" = Uuid, Path, description = "Edition ID")),
    responses(
        (status = 200, description = "Edition details", body = EditionResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "editions"
)]
pub async fn get_edition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let edition = state
        .db
        .edition_repo()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Edition not found: {id}")))?;

    Ok(axum::Json(EditionResponse::from(edition)))
}

#[utoipa::path(
    post,
    path = "/v1/editions",
    request_body = EditionRequest,
    responses(
        (status = 201, description = "Edition created", body = EditionResponse),
        (status = 409, description = "Edition already exists for that year", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "editions"
)]
pub async fn create_edition(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<EditionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let edition = state.db.edition_repo().create(&new_edition(body)).await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(EditionResponse::from(edition)),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/editions/{id}",
    params(("id" = Uuid, Path, description = "Edition ID")),
    request_body = EditionRequest,
    responses(
        (status = 200, description = "Edition updated", body = EditionResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "editions"
)]
pub async fn update_edition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<EditionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let edition = state
        .db
        .edition_repo()
        .update(id, &new_edition(body))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Edition not found: {id}")))?;

    Ok(axum::Json(EditionResponse::from(edition)))
}

#[utoipa::path(
    delete,
    path = "/v1/editions/{id}",
    params(("id" = Uuid, Path, description = "Edition ID")),
    responses(
        (status = 204, description = "Edition deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "editions"
)]
pub async fn delete_edition(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.edition_repo().delete(id).await? {
        return Err(AppError::NotFound(format!("Edition not found: {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn new_edition(body: EditionRequest) -> NewEdition {
    NewEdition {
        event_id: body.event_id,
        year: body.year,
        start_date: body.start_date,
        end_date: body.end_date,
        registration_open: body.registration_open.unwrap_or(false),
    }
}

// ---------------------------------------------------------------------------
// Trials
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/trials",
    params(ListTrialsQuery),
    responses(
        (status = 200, description = "List of trials", body = TrialListResponse),
    ),
    tag = "trials"
)]
pub async fn list_trials(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTrialsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = query.limit.unwrap_or(20).min(100);
    let trials = state.db.trial_repo().list(query.edition_id, limit).await?;
    let total = trials.len();

    Ok(axum::Json(TrialListResponse {
        trials: trials.into_iter().map(TrialResponse::from).collect(),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/trials/{id}",
    params(("id" = Uuid, Path, description = "Trial ID")),
    responses(
        (status = 200, description = "Trial details", body = TrialResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "trials"
)]
pub async fn get_trial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let trial = state
        .db
        .trial_repo()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Trial not found: {id}")))?;

    Ok(axum::Json(TrialResponse::from(trial)))
}

#[utoipa::path(
    post,
    path = "/v1/trials",
    request_body = TrialRequest,
    responses(
        (status = 201, description = "Trial created", body = TrialResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "trials"
)]
pub async fn create_trial(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<TrialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trial = state.db.trial_repo().create(&new_trial(body)).await?;

    Ok((StatusCode::CREATED, axum::Json(TrialResponse::from(trial))))
}

#[utoipa::path(
    put,
    path = "/v1/trials/{id}",
    params(("id" = Uuid, Path, description = "Trial ID")),
    request_body = TrialRequest,
    responses(
        (status = 200, description = "Trial updated", body = TrialResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "trials"
)]
pub async fn update_trial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<TrialRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let trial = state
        .db
        .trial_repo()
        .update(id, &new_trial(body))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Trial not found: {id}")))?;

    Ok(axum::Json(TrialResponse::from(trial)))
}

#[utoipa::path(
    delete,
    path = "/v1/trials/{id}",
    params(("id" = Uuid, Path, description = "Trial ID")),
    responses(
        (status = 204, description = "Trial deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "trials"
)]
pub async fn delete_trial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.trial_repo().delete(id).await? {
        return Err(AppError::NotFound(format!("Trial not found: {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn new_trial(body: TrialRequest) -> NewTrial {
    NewTrial {
        edition_id: body.edition_id,
        name: body.name,
        distance_label: body.distance_label,
        start_time: body.start_time,
        capacity: body.capacity,
    }
}

// ---------------------------------------------------------------------------
// Contents
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/v1/contents",
    params(ListContentsQuery),
    responses(
        (status = 200, description = "List of content pages", body = ContentListResponse),
    ),
    tag = "contents"
)]
pub async fn list_contents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListContentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let limit = query.limit.unwrap_or(20).min(100);
    let contents = state.db.content_repo().list(query.published, limit).await?;
    let total = contents.len();

    Ok(axum::Json(ContentListResponse {
        contents: contents.into_iter().map(ContentResponse::from).collect(),
        total,
    }))
}

#[utoipa::path(
    get,
    path = "/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content details", body = ContentResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "contents"
)]
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state
        .db
        .content_repo()
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Content not found: {id}")))?;

    Ok(axum::Json(ContentResponse::from(content)))
}

#[utoipa::path(
    get,
    path = "/v1/contents/slug/{slug}",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Content details", body = ContentResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
    ),
    tag = "contents"
)]
pub async fn get_content_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state
        .db
        .content_repo()
        .get_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Content not found: {slug}")))?;

    Ok(axum::Json(ContentResponse::from(content)))
}

#[utoipa::path(
    post,
    path = "/v1/contents",
    request_body = ContentRequest,
    responses(
        (status = 201, description = "Content created", body = ContentResponse),
        (status = 409, description = "Slug already taken", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "contents"
)]
pub async fn create_content(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<ContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state.db.content_repo().create(&new_content(body)?).await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(ContentResponse::from(content)),
    ))
}

#[utoipa::path(
    put,
    path = "/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Content updated", body = ContentResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "contents"
)]
pub async fn update_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    axum::Json(body): axum::Json<ContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state
        .db
        .content_repo()
        .update(id, &new_content(body)?)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Content not found: {id}")))?;

    Ok(axum::Json(ContentResponse::from(content)))
}

#[utoipa::path(
    delete,
    path = "/v1/contents/{id}",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer" = [])),
    tag = "contents"
)]
pub async fn delete_content(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.db.content_repo().delete(id).await? {
        return Err(AppError::NotFound(format!("Content not found: {id}")).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn new_content(body: ContentRequest) -> Result<NewContent, AppError> {
    let slug = body.slug.trim().to_lowercase();
    if slug.is_empty() || !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::ValidationError(format!(
            "invalid slug: {:?} (lowercase alphanumerics and hyphens only)",
            body.slug
        )));
    }
    Ok(NewContent {
        slug,
        title: body.title,
        body: body.body,
        published: body.published.unwrap_or(false),
    })
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
