//! Comment operations on posts.

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{CommentCreate, CommentId, CommentPublic, PostId};

/// Comments on a post, newest first. GET /api/comments/post/{post_id}.
pub async fn list_comments(
    client: &ApiClient,
    post_id: PostId,
) -> Result<Vec<CommentPublic>, ApiError> {
    client
        .get_json(&format!("/api/comments/post/{}", post_id))
        .await
}

/// POST /api/comments/post/{post_id} with `{"text": ...}`.
///
/// The backend rejects empty text and anything over 1000 characters.
pub async fn add_comment(
    client: &ApiClient,
    post_id: PostId,
    text: &str,
) -> Result<CommentPublic, ApiError> {
    client
        .post_json(
            &format!("/api/comments/post/{}", post_id),
            &CommentCreate { text },
        )
        .await
}

/// DELETE /api/comments/{comment_id}.
pub async fn delete_comment(client: &ApiClient, comment_id: CommentId) -> Result<(), ApiError> {
    client
        .delete(&format!("/api/comments/{}", comment_id))
        .await
}
