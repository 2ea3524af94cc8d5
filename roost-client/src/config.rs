//! Client configuration

use crate::{ClientResult, Gateway};

/// Environment variable holding the backend base URL
const BACKEND_URL_ENV: &str = "ROOST_BACKEND_URL";

/// Local development backend
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the base URL from `ROOST_BACKEND_URL`, falling back to the
    /// local development backend when unset or blank
    pub fn from_env() -> Self {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a gateway from this configuration
    pub fn build(&self) -> ClientResult<Gateway> {
        Gateway::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("https://api.example.com").with_timeout(5);
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, 5);
    }
}
