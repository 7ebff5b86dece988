//! Rendering-service connection configuration.

/// Connection settings for the rendering service, loaded from environment
/// variables. Both the API server and the worker construct a client from
/// the same settings.
#[derive(Debug, Clone)]
pub struct PhotoshopConfig {
    /// Base HTTP URL, e.g. `https://image-api.example.com/v1`.
    pub api_url: String,
    /// Bearer token sent on every request.
    pub api_key: String,
}

impl PhotoshopConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default                 |
    /// |---------------------|-------------------------|
    /// | `PHOTOSHOP_API_URL` | `http://localhost:8688` |
    /// | `PHOTOSHOP_API_KEY` | (empty)                 |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("PHOTOSHOP_API_URL").unwrap_or_else(|_| "http://localhost:8688".into());
        let api_key = std::env::var("PHOTOSHOP_API_KEY").unwrap_or_default();

        Self { api_url, api_key }
    }
}
