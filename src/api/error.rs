use reqwest::StatusCode;
use thiserror::Error;

use super::store::TokenStoreError;

/// Failure of a single API call. Nothing is retried or translated.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a response body that could not be decoded.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("Request failed ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

impl ApiError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status(),
            ApiError::TokenStore(_) => None,
        }
    }
}
