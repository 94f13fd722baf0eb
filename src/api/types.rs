//! Request and response types for the InstaLite backend API.
//!
//! Field names match the backend's snake_case JSON. Timestamps are kept as
//! the ISO-8601 strings the backend sends.

use serde::{Deserialize, Serialize};

/// Backend primary key for posts and comments.
pub type PostId = i64;
pub type CommentId = i64;

/// Registration body sent to POST /api/auth/register.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token response from POST /api/auth/token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Public view of a user, returned by /api/auth/me and /api/users/{username}.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPublic {
    pub id: PostId,
    pub caption: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub author: UserPublic,
    pub likes_count: i64,
    pub comments_count: i64,
    #[serde(default)]
    pub liked_by_me: bool,
}

/// Raw post row from GET /api/admin/posts: author by id, image by its
/// storage file name rather than a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPost {
    pub id: PostId,
    pub author_id: i64,
    pub caption: String,
    pub image_path: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPublic {
    pub id: CommentId,
    pub text: String,
    pub created_at: String,
    pub author: UserPublic,
}

/// Comment body sent to POST /api/comments/post/{post_id}.
#[derive(Debug, Serialize)]
pub(crate) struct CommentCreate<'a> {
    pub text: &'a str,
}

/// Image attached to a new post.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    /// MIME type sent with the part; the backend accepts PNG, JPEG and WEBP.
    pub mime: String,
}

/// Input to `posts::create_post`. Both fields are optional; a missing caption
/// is sent as the empty string.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub caption: Option<String>,
    pub image: Option<ImageUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let token: Token = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_post_without_image_or_liked_flag() {
        let json = r#"{
            "id": 3,
            "caption": "",
            "image_url": null,
            "created_at": "2024-05-01T10:00:00",
            "author": {
                "id": 1,
                "username": "bob",
                "email": "bob@example.com",
                "is_admin": false,
                "created_at": "2024-04-01T09:00:00"
            },
            "likes_count": 2,
            "comments_count": 0
        }"#;
        let post: PostPublic = serde_json::from_str(json).unwrap();
        assert_eq!(post.image_url, None);
        assert!(!post.liked_by_me);
        assert_eq!(post.author.username, "bob");
    }
}
