//! Configuration for copyswitchcfg.
//!
//! Built-in defaults, an optional TOML file, and `SWCFG_*` environment
//! variables are layered with figment. API keys resolve through the flag,
//! environment, OS keyring and plaintext config, in that order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use swcfg_api::{DEFAULT_BASE_URL, TransportConfig};

/// Environment variable the Dashboard SDKs read the API key from.
pub const API_KEY_ENV: &str = "MERAKI_DASHBOARD_API_KEY";

/// Keyring service name used for stored API keys.
const KEYRING_SERVICE: &str = "copyswitchcfg";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Settings that are not per-run arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Dashboard API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Plaintext API key. Keyring and env var are checked first.
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Retries for rate-limited requests.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: None,
            timeout: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout() -> u64 {
    60
}
fn default_max_retries() -> u32 {
    3
}

impl Config {
    /// Validate the base URL and build the HTTP transport settings.
    pub fn transport(&self) -> Result<(url::Url, TransportConfig), ConfigError> {
        let url: url::Url = self
            .base_url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "base_url".into(),
                reason: format!("invalid URL: {}", self.base_url),
            })?;

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        Ok((
            url,
            TransportConfig {
                timeout: Duration::from_secs(self.timeout),
                max_retries: self.max_retries,
            },
        ))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "copyswitchcfg", "copyswitchcfg").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("copyswitchcfg");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SWCFG_"))
}

/// Load the config from a specific file + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    Ok(figment_for(path).extract()?)
}

/// Load the config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config, returning a default if the file is missing or malformed.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|e| {
        debug!(error = %e, "using default configuration");
        Config::default()
    })
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API key: flag, standard env var, configured env var,
/// keyring, then plaintext config. `None` when nothing provides one.
pub fn resolve_api_key(flag: Option<&str>, cfg: &Config) -> Option<SecretString> {
    if let Some(key) = flag.filter(|k| !k.is_empty()) {
        return Some(SecretString::from(key.to_owned()));
    }

    resolve_api_key_with(cfg, |name| std::env::var(name).ok(), keyring_api_key)
}

fn resolve_api_key_with(
    cfg: &Config,
    env: impl Fn(&str) -> Option<String>,
    keyring: impl FnOnce() -> Option<String>,
) -> Option<SecretString> {
    let from_env = env(API_KEY_ENV)
        .or_else(|| cfg.api_key_env.as_deref().and_then(&env))
        .filter(|k| !k.is_empty());
    if let Some(key) = from_env {
        return Some(SecretString::from(key));
    }

    if let Some(key) = keyring() {
        debug!("API key loaded from keyring");
        return Some(SecretString::from(key));
    }

    cfg.api_key
        .clone()
        .filter(|k| !k.is_empty())
        .map(SecretString::from)
}

fn keyring_api_key() -> Option<String> {
    keyring::Entry::new(KEYRING_SERVICE, "api-key")
        .and_then(|entry| entry.get_password())
        .ok()
}
