//! Turns flags plus the `swcfg_config` layers into the settings a run
//! works from.

use std::str::FromStr;

use swcfg_api::TransportConfig;
use swcfg_core::{MigrationConfig, Mode};

use crate::cli::Cli;
use crate::error::CliError;

use swcfg_config::{Config, resolve_api_key};

/// Validated settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub migration: MigrationConfig,
    pub base_url: url::Url,
    pub transport: TransportConfig,
}

/// Load the layered config and validate flags over it.
pub fn resolve(cli: &Cli) -> Result<Settings, CliError> {
    resolve_settings(cli, swcfg_config::load_config_or_default())
}

/// Validate flags and merge them over `config`. Flags win.
pub fn resolve_settings(cli: &Cli, config: Config) -> Result<Settings, CliError> {
    let org_name = cli
        .org
        .clone()
        .filter(|o| !o.is_empty())
        .ok_or_else(|| usage("missing organization name (-o)"))?;

    let file = cli
        .file
        .clone()
        .filter(|f| !f.as_os_str().is_empty())
        .ok_or_else(|| usage("missing file path (-f)"))?;

    let mode = Mode::from_str(&cli.mode)
        .map_err(|_| usage(format!("invalid mode '{}': expected 'export' or 'import'", cli.mode)))?;

    let config = Config {
        base_url: cli.base_url.clone().unwrap_or(config.base_url),
        timeout: cli.timeout.unwrap_or(config.timeout),
        ..config
    };

    let api_key = resolve_api_key(cli.api_key.as_deref(), &config)
        .ok_or_else(|| usage("missing API key (-k or MERAKI_DASHBOARD_API_KEY)"))?;

    let (base_url, transport) = config.transport()?;

    Ok(Settings {
        migration: MigrationConfig {
            api_key,
            org_name,
            mode,
            file,
        },
        base_url,
        transport,
    })
}

fn usage(reason: impl Into<String>) -> CliError {
    CliError::Usage {
        reason: reason.into(),
    }
}
