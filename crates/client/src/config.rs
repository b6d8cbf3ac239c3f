//! Client configuration.

/// Where the marketplace backend lives.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL prefixed to every endpoint path, e.g. `http://localhost:8080`.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the backend URL from `STOCKROOM_API_URL`, falling back to the
    /// local dev default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("STOCKROOM_API_URL").unwrap_or_else(|_| {
            tracing::warn!("STOCKROOM_API_URL not set; using local dev default");
            "http://127.0.0.1:8080".to_string()
        });
        Self { base_url }
    }
}
