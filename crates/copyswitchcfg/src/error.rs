//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use swcfg_config::ConfigError;
use swcfg_core::CoreError;

/// Process exit codes.
///
/// Wrapper scripts only distinguish success from failure, so every fatal
/// condition shares one status.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 2;
    pub const FATAL: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Usage ────────────────────────────────────────────────────────
    #[error("{reason}")]
    #[diagnostic(code(copyswitchcfg::usage), help("Run: copyswitchcfg -h"))]
    Usage { reason: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Dashboard at {url}: {reason}")]
    #[diagnostic(
        code(copyswitchcfg::connection_failed),
        help("Check network access to the Dashboard API, or --base-url / SWCFG_BASE_URL.")
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(copyswitchcfg::auth_failed),
        help(
            "Verify the API key passed with -k or set in MERAKI_DASHBOARD_API_KEY,\n\
             and that API access is enabled for the organization."
        )
    )]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(copyswitchcfg::not_found),
        help("Organization names are case-sensitive and must match exactly.")
    )]
    NotFound { message: String },

    // ── Transfer file ────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(copyswitchcfg::transfer_file))]
    Transfer { message: String },

    // ── Import ───────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(copyswitchcfg::import_aborted),
        help(
            "{applied} port(s) were already updated on the destination.\n\
             Re-running the import applies the whole file again from the start."
        )
    )]
    ImportAborted { message: String, applied: usize },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(copyswitchcfg::api_error))]
    ApiError { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(copyswitchcfg::config))]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => exit_code::USAGE,
            _ => exit_code::FATAL,
        }
    }

    /// Whether the help text should be shown alongside the error.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::OrganizationNotFound { .. } => CliError::NotFound { message },

            CoreError::FileCreate { .. }
            | CoreError::FileOpen { .. }
            | CoreError::FileWrite { .. }
            | CoreError::FileParse { .. }
            | CoreError::MissingAccessPolicyNumber { .. } => CliError::Transfer { message },

            CoreError::ImportAborted { applied, .. } => CliError::ImportAborted { message, applied },

            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::NetworkListUnusable { .. }
            | CoreError::Timeout
            | CoreError::RateLimited { .. }
            | CoreError::Api { .. }
            | CoreError::Internal(_) => CliError::ApiError { message },
        }
    }
}

impl From<swcfg_api::Error> for CliError {
    fn from(err: swcfg_api::Error) -> Self {
        CoreError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_exits_two() {
        let usage = CliError::Usage {
            reason: "missing -f".into(),
        };
        assert_eq!(usage.exit_code(), 2);
        assert!(usage.shows_usage());

        let missing = CliError::from(CoreError::OrganizationNotFound {
            name: "Acme".into(),
        });
        assert_eq!(missing.exit_code(), 2);
        assert!(!missing.shows_usage());
    }

    #[test]
    fn core_messages_are_kept() {
        let err = CliError::from(CoreError::OrganizationNotFound {
            name: "Acme".into(),
        });
        assert_eq!(
            err.to_string(),
            "Fetching organization failed: no organization named \"Acme\""
        );

        let err = CliError::from(CoreError::ImportAborted {
            serial: "Q2XX-0000-0001".into(),
            port_id: "2".into(),
            applied: 1,
            source: Box::new(CoreError::Timeout),
        });
        assert!(matches!(err, CliError::ImportAborted { applied: 1, .. }));
    }
}
