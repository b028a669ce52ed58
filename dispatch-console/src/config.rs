//! Console configuration

use std::time::Duration;

use dispatch_client::ClientConfig;

/// Console configuration, read from the environment
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Delivery API base URL (env: DISPATCH_API_URL)
    pub api_url: String,
    /// Bearer token (env: DISPATCH_API_TOKEN)
    pub api_token: Option<String>,
    /// Request timeout in seconds (env: DISPATCH_TIMEOUT_SECS)
    pub timeout_secs: u64,
    /// Orders polling interval in seconds (env: DISPATCH_POLL_SECS)
    pub poll_secs: u64,
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("DISPATCH_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            api_token: std::env::var("DISPATCH_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
            timeout_secs: std::env::var("DISPATCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            poll_secs: std::env::var("DISPATCH_POLL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs| secs > 0)
                .unwrap_or(30),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url)
            .with_timeout(self.timeout_secs)
            .with_poll_interval(Duration::from_secs(self.poll_secs));
        match &self.api_token {
            Some(token) => config.with_token(token),
            None => config,
        }
    }
}
