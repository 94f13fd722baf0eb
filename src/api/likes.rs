use super::client::ApiClient;
use super::error::ApiError;
use super::types::PostId;

fn like_path(post_id: PostId) -> String {
    format!("/api/likes/post/{}", post_id)
}

/// Like a post. POST /api/likes/post/{post_id}; idempotent on the backend.
pub async fn like(client: &ApiClient, post_id: PostId) -> Result<(), ApiError> {
    client.post_empty(&like_path(post_id)).await
}

/// Remove a like. POST /api/likes/post/{post_id}/unlike.
pub async fn unlike(client: &ApiClient, post_id: PostId) -> Result<(), ApiError> {
    client
        .post_empty(&format!("{}/unlike", like_path(post_id)))
        .await
}
