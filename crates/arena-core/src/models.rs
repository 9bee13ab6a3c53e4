use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A registered account. `password_hash` is an argon2id PHC string and never
/// leaves the persistence/auth layers.
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// A recurring competition (e.g. "Lakeside Triathlon").
#[derive(Debug, Clone, serde::Serialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub discipline: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub location: String,
    pub discipline: String,
    pub description: Option<String>,
}

/// One year's running of an event.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Edition {
    pub id: Uuid,
    pub event_id: Uuid,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub registration_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEdition {
    pub event_id: Uuid,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub registration_open: bool,
}

/// An individual race within an edition (e.g. the "M distance" start).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Trial {
    pub id: Uuid,
    pub edition_id: Uuid,
    pub name: String,
    pub distance_label: String,
    pub start_time: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTrial {
    pub edition_id: Uuid,
    pub name: String,
    pub distance_label: String,
    pub start_time: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
}

/// Editorial page served by the site (rules, FAQ, news).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Content {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
}
