//! Client configuration.

/// Backend origin used when nothing is configured (uvicorn's default port).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin all endpoint paths are appended to. `ApiClient` strips any
    /// trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// API base URL: INSTALITE_API_URL > VITE_API_URL > localhost default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("INSTALITE_API_URL")
            .or_else(|_| std::env::var("VITE_API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    }
}
