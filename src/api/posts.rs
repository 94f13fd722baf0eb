//! Post operations: feed, creation and lookup.

use reqwest::multipart::{Form, Part};

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{NewPost, PostId, PostPublic};

/// Personal feed. GET /api/posts/feed/me.
///
/// The backend falls back to the global timeline when the user follows
/// nobody with posts.
pub async fn feed(client: &ApiClient) -> Result<Vec<PostPublic>, ApiError> {
    client.get_json("/api/posts/feed/me").await
}

/// Personal feed capped at `limit` posts. GET /api/posts/feed/me?limit={limit}.
pub async fn feed_with_limit(client: &ApiClient, limit: u32) -> Result<Vec<PostPublic>, ApiError> {
    client
        .get_json_with_query("/api/posts/feed/me", &[("limit", limit)])
        .await
}

/// Publish a post.
///
/// POST /api/posts with a multipart form. `caption` is always sent (empty
/// when absent); the `image` part is only added when a file is attached.
pub async fn create_post(client: &ApiClient, post: NewPost) -> Result<PostPublic, ApiError> {
    let mut form = Form::new().text("caption", post.caption.unwrap_or_default());

    if let Some(image) = post.image {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime)?;
        form = form.part("image", part);
    }

    client.post_multipart("/api/posts", form).await
}

/// Posts authored by the current user, newest first. GET /api/posts.
pub async fn my_posts(client: &ApiClient) -> Result<Vec<PostPublic>, ApiError> {
    client.get_json("/api/posts").await
}

/// GET /api/posts/{post_id}.
pub async fn get_post(client: &ApiClient, post_id: PostId) -> Result<PostPublic, ApiError> {
    client.get_json(&format!("/api/posts/{}", post_id)).await
}

/// DELETE /api/posts/{post_id}. Only the author or an admin may delete.
pub async fn delete_post(client: &ApiClient, post_id: PostId) -> Result<(), ApiError> {
    client.delete(&format!("/api/posts/{}", post_id)).await
}
