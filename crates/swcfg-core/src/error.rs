// ── Core error types ──
//
// User-facing errors from swcfg-core. Consumers never see raw HTTP
// status handling or reqwest internals; the `From<swcfg_api::Error>` impl
// translates transport-layer errors into domain-appropriate variants.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Resolution errors ────────────────────────────────────────────
    #[error("Fetching organization failed: no organization named \"{name}\"")]
    OrganizationNotFound { name: String },

    #[error("Fetching network list failed for organization \"{organization}\"")]
    NetworkListUnusable { organization: String },

    // ── Transfer file errors ─────────────────────────────────────────
    #[error("Unable to open file for writing: {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to open file for reading: {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Writing to output file failed: {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Reading from file failed: {}: {source}", path.display())]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ── Import errors ────────────────────────────────────────────────
    #[error(
        "Port {port_id} on {serial} has access policy \"{policy}\" but no accessPolicyNumber"
    )]
    MissingAccessPolicyNumber {
        serial: String,
        port_id: String,
        policy: String,
    },

    #[error(
        "Import stopped at port {port_id} on {serial} after {applied} port(s) were updated: {source}"
    )]
    ImportAborted {
        serial: String,
        port_id: String,
        applied: usize,
        #[source]
        source: Box<CoreError>,
    },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Cannot connect to Dashboard at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Dashboard request timed out")]
    Timeout,

    #[error("Rate limited by Dashboard -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<swcfg_api::Error> for CoreError {
    fn from(err: swcfg_api::Error) -> Self {
        match err {
            swcfg_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            swcfg_api::Error::InvalidApiKey => CoreError::AuthenticationFailed {
                message: "Invalid API key".into(),
            },
            swcfg_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            swcfg_api::Error::InvalidUrl(e) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("Invalid URL: {e}"),
            },
            swcfg_api::Error::RateLimited { retry_after_secs } => {
                CoreError::RateLimited { retry_after_secs }
            }
            swcfg_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            swcfg_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
