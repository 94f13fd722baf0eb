//! Session operations: login, registration and the current user.

use reqwest::multipart::Form;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{RegisterRequest, Token, UserPublic};

/// Exchange credentials for an access token.
///
/// POST /api/auth/token with a multipart form (`username`, `password`).
/// On success the token is saved to the client's token store, so every
/// request made afterwards is authenticated with it.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<Token, ApiError> {
    let form = Form::new()
        .text("username", username.to_string())
        .text("password", password.to_string());

    let token: Token = client.post_multipart("/api/auth/token", form).await?;
    client.tokens().save(&token.access_token)?;

    log::info!("Logged in as {}", username);
    Ok(token)
}

/// Create an account. POST /api/auth/register with a JSON body.
pub async fn register(client: &ApiClient, payload: &RegisterRequest) -> Result<UserPublic, ApiError> {
    client.post_json("/api/auth/register", payload).await
}

/// Fetch the user the stored token belongs to. GET /api/auth/me.
pub async fn me(client: &ApiClient) -> Result<UserPublic, ApiError> {
    client.get_json("/api/auth/me").await
}
