use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arena_core::models::{Content, Edition, Event, Trial, User};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    pub username: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EventRequest {
    pub name: String,
    pub location: String,
    pub discipline: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub discipline: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            location: e.location,
            discipline: e.discipline,
            description: e.description,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListEventsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Editions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EditionRequest {
    pub event_id: Uuid,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Defaults to false.
    pub registration_open: Option<bool>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EditionResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub registration_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Edition> for EditionResponse {
    fn from(e: Edition) -> Self {
        Self {
            id: e.id,
            event_id: e.event_id,
            year: e.year,
            start_date: e.start_date,
            end_date: e.end_date,
            registration_open: e.registration_open,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListEditionsQuery {
    pub event_id: Option<Uuid>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct EditionListResponse {
    pub editions: Vec<EditionResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Trials
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TrialRequest {
    pub edition_id: Uuid,
    pub name: String,
    pub distance_label: String,
    pub start_time: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TrialResponse {
    pub id: Uuid,
    pub edition_id: Uuid,
    pub name: String,
    pub distance_label: String,
    pub start_time: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Trial> for TrialResponse {
    fn from(t: Trial) -> Self {
        Self {
            id: t.id,
            edition_id: t.edition_id,
            name: t.name,
            distance_label: t.distance_label,
            start_time: t.start_time,
            capacity: t.capacity,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListTrialsQuery {
    pub edition_id: Option<Uuid>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct TrialListResponse {
    pub trials: Vec<TrialResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Contents
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContentRequest {
    pub slug: String,
    pub title: String,
    pub body: String,
    /// Defaults to false.
    pub published: Option<bool>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContentResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(c: Content) -> Self {
        Self {
            id: c.id,
            slug: c.slug,
            title: c.title,
            body: c.body,
            published: c.published,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListContentsQuery {
    pub published: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContentListResponse {
    pub contents: Vec<ContentResponse>,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
