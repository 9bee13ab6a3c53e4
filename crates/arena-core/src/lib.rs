pub mod error;
pub mod models;
pub mod password;
pub mod testutil;
pub mod token;
pub mod traits;

pub use error::AppError;
pub use models::{Content, Edition, Event, Trial, User};
pub use token::{RefreshToken, RefreshTokenManager};
pub use traits::RefreshTokenStore;
