// Shared transport configuration for building the reqwest::Client.
//
// Timeout, user agent and the 429 retry budget are decided once here so
// the client itself only deals with paths and payloads.

use std::time::Duration;

/// Transport settings for the Dashboard HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    /// How many times a rate-limited (HTTP 429) request is re-sent.
    pub max_retries: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_retries: 3,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by the Dashboard client to inject the `Authorization` header.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("copyswitchcfg/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
