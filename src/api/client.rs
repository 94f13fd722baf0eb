//! HTTP client with bearer token injection.
//!
//! Every request passes through `ApiClient::authorize` before it is sent, so
//! a token saved by one operation is picked up by all later ones.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use super::store::TokenStore;
use crate::config::ApiConfig;

/// HTTP client wrapper for InstaLite API communication.
///
/// Owns the base URL, a cookie-enabled `reqwest::Client` and the token store
/// consulted before each request.
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client for `config.base_url` reading tokens from `tokens`.
    ///
    /// Trailing slashes on the base URL are dropped so endpoint paths can be
    /// appended as-is.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        // Cookies are kept so the backend's session cookie rides along too.
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this client authenticates from.
    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` if a token is stored; otherwise
    /// return the request untouched.
    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match self.tokens.load()? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Authorize, send, and turn non-2xx responses into `ApiError::Status`.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = self.authorize(builder)?.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| {
                log::debug!("Failed to read error body: {}", e);
                unreadable_body(&e)
            });
            log::debug!("<<< {} {}", status, body_preview(&body));
            return Err(ApiError::Status { status, body });
        }

        Ok(resp)
    }

    /// GET a relative API path and decode the JSON body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        log::debug!(">>> GET {}", path);
        let resp = self.dispatch(self.client.get(self.url(path))).await?;
        Ok(resp.json().await?)
    }

    /// GET a relative API path with query parameters and decode the JSON body.
    pub async fn get_json_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        log::debug!(">>> GET {} (with query)", path);
        let builder = self.client.get(self.url(path)).query(query);
        let resp = self.dispatch(builder).await?;
        Ok(resp.json().await?)
    }

    /// POST a JSON body to a relative API path and decode the JSON response.
    pub async fn post_json<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        log::debug!(">>> POST {} (json)", path);
        let resp = self
            .dispatch(self.client.post(self.url(path)).json(body))
            .await?;
        Ok(resp.json().await?)
    }

    /// POST a multipart form to a relative API path and decode the JSON response.
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R, ApiError> {
        log::debug!(">>> POST {} (multipart)", path);
        let resp = self
            .dispatch(self.client.post(self.url(path)).multipart(form))
            .await?;
        Ok(resp.json().await?)
    }

    /// POST without a body, discarding whatever the backend returns.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        log::debug!(">>> POST {}", path);
        self.dispatch(self.client.post(self.url(path))).await?;
        Ok(())
    }

    /// DELETE a relative API path, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        log::debug!(">>> DELETE {}", path);
        self.dispatch(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Stand-in body for an error response whose body could not be read.
fn unreadable_body(err: &dyn std::fmt::Display) -> String {
    format!("<body unreadable: {}>", err)
}

/// First line of an error body, short enough for a log line.
fn body_preview(body: &str) -> &str {
    let line = body.lines().next().unwrap_or_default();
    match line.char_indices().nth(120) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
