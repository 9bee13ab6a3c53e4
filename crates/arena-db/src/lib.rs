pub mod config;
pub mod content_repository;
pub mod database;
pub mod edition_repository;
pub mod event_repository;
pub mod token_repository;
pub mod trial_repository;
pub mod user_repository;

pub use config::DatabaseConfig;
pub use content_repository::ContentRepository;
pub use database::Database;
pub use edition_repository::EditionRepository;
pub use event_repository::EventRepository;
pub use token_repository::TokenRepository;
pub use trial_repository::TrialRepository;
pub use user_repository::UserRepository;
