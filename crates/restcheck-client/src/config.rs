//! Demo API client configuration.
//!
//! Configures the base URL and request timeout. Defaults point at the
//! public demo instance; override via environment variables or explicit
//! construction for local mock servers.

use url::Url;

/// Configuration for connecting to the demo API.
#[derive(Debug, Clone)]
pub struct DemoApiConfig {
    /// Base URL of the API under test.
    /// Default: <https://dummyjson.com>
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DemoApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `RESTCHECK_BASE_URL` (default: `https://dummyjson.com`)
    /// - `RESTCHECK_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("RESTCHECK_BASE_URL", "https://dummyjson.com")?,
            timeout_secs: std::env::var("RESTCHECK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at a local server (for testing).
    pub fn local(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_builds_valid_config() {
        let cfg = DemoApiConfig::local("http://127.0.0.1:9000").unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn local_rejects_invalid_url() {
        assert!(DemoApiConfig::local("not a url").is_err());
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("RESTCHECK_NONEXISTENT_VAR", "https://dummyjson.com").unwrap();
        assert_eq!(url.as_str(), "https://dummyjson.com/");
    }
}
