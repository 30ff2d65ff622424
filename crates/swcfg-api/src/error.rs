use thiserror::Error;

/// Top-level error type for the `swcfg-api` crate.
///
/// Covers every failure mode of a Dashboard API call: authentication,
/// transport, rate limiting, and response decoding.
/// `swcfg-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The API key cannot be sent as a header value.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Invalid API key (rejected by the Dashboard).
    #[error("Invalid API key")]
    InvalidApiKey,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Still rate limited after exhausting the retry budget.
    #[error("Rate limited -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    // ── Dashboard API ───────────────────────────────────────────────
    /// Non-success response from the Dashboard.
    #[error("Dashboard API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}
