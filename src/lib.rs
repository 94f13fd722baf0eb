//! Client for the InstaLite photo-sharing REST API.

pub mod api;
pub mod avatar;
pub mod config;

pub use api::{ApiClient, ApiError};
pub use avatar::avatar_url;
pub use config::ApiConfig;
