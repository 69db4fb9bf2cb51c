//! Configuration module for Wallet Sentry
//! All parameters come from the environment; the explorer API key is
//! required and missing it is fatal at construction time.

use std::time::Duration;

use crate::models::errors::{AppError, AppResult};

/// Default Etherscan endpoint (mainnet)
pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";

/// Default explorer request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for the scanner and its explorer client
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Etherscan API key (required)
    pub api_key: String,

    /// Explorer endpoint base URL
    pub base_url: String,

    /// Timeout applied to every explorer request
    pub request_timeout: Duration,
}

impl AgentConfig {
    /// Build configuration from the environment.
    ///
    /// Fails with `CFG_MISSING_API_KEY` when `ETHERSCAN_API_KEY` is unset
    /// or empty; callers must surface this at startup, not on first use.
    pub fn from_env() -> AppResult<Self> {
        let api_key = std::env::var("ETHERSCAN_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::missing_api_key("ETHERSCAN_API_KEY"))?;

        let base_url =
            std::env::var("ETHERSCAN_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout = std::env::var("ETHERSCAN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            base_url,
            request_timeout,
        })
    }

    /// Configuration with an explicit key, for tests and embedding.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_key_defaults() {
        let config = AgentConfig::with_api_key("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }
}
