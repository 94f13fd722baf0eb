//! API client module for the InstaLite backend.
//!
//! Provides an HTTP client with bearer token injection, pluggable token
//! storage, one function per REST endpoint, and request/response types
//! matching the backend schemas.

pub mod admin;
pub mod auth;
pub mod client;
pub mod comments;
pub mod error;
pub mod likes;
pub mod posts;
pub mod store;
pub mod types;
pub mod users;


pub use client::ApiClient;
pub use error::ApiError;
pub use store::{KeychainTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
