//! User profile and follow operations.

use super::client::ApiClient;
use super::error::ApiError;
use super::types::UserPublic;

fn user_path(username: &str) -> String {
    format!("/api/users/{}", urlencoding::encode(username))
}

/// Public profile of `username`. GET /api/users/{username}.
pub async fn user_profile(client: &ApiClient, username: &str) -> Result<UserPublic, ApiError> {
    client.get_json(&user_path(username)).await
}

/// POST /api/users/{username}/follow. Following yourself is rejected with 400.
pub async fn follow(client: &ApiClient, username: &str) -> Result<(), ApiError> {
    client
        .post_empty(&format!("{}/follow", user_path(username)))
        .await
}

/// POST /api/users/{username}/unfollow.
pub async fn unfollow(client: &ApiClient, username: &str) -> Result<(), ApiError> {
    client
        .post_empty(&format!("{}/unfollow", user_path(username)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_encoded_as_path_segment() {
        assert_eq!(user_path("bob"), "/api/users/bob");
        assert_eq!(user_path("a/b c"), "/api/users/a%2Fb%20c");
    }
}
