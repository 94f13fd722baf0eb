//! Admin-only listings. Non-admin tokens get 403 from the backend.

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{AdminPost, UserPublic};

/// Every registered user, newest first. GET /api/admin/users.
pub async fn list_users(client: &ApiClient) -> Result<Vec<UserPublic>, ApiError> {
    client.get_json("/api/admin/users").await
}

/// Every post as stored, newest first. GET /api/admin/posts.
pub async fn list_posts(client: &ApiClient) -> Result<Vec<AdminPost>, ApiError> {
    client.get_json("/api/admin/posts").await
}
