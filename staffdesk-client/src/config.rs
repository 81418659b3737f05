//! Client configuration

/// Configuration for connecting to the personnel REST API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Base URL for employee photos (defaults to `{base_url}/Photos/`)
    pub photo_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let photo_url = format!("{}/Photos/", base_url);
        Self {
            base_url,
            photo_url,
            timeout: 30,
        }
    }

    /// Load configuration from the environment
    ///
    /// Reads `STAFFDESK_API_URL` and `STAFFDESK_PHOTO_URL`, with a
    /// `.env` file honored if present. Missing variables fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut config = match std::env::var("STAFFDESK_API_URL") {
            Ok(url) => Self::new(url),
            Err(_) => Self::default(),
        };
        if let Ok(photo_url) = std::env::var("STAFFDESK_PHOTO_URL") {
            config.photo_url = photo_url;
        }
        config
    }

    /// Set the photo base URL
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = photo_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.photo_url, "http://127.0.0.1:8000/Photos/");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://api.local:9000/");
        assert_eq!(config.base_url, "http://api.local:9000");
        assert_eq!(config.photo_url, "http://api.local:9000/Photos/");
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://api.local")
            .with_photo_url("http://cdn.local/p/")
            .with_timeout(5);
        assert_eq!(config.photo_url, "http://cdn.local/p/");
        assert_eq!(config.timeout, 5);
    }
}
