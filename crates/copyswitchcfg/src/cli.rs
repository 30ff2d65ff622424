//! Clap derive structure for the `copyswitchcfg` CLI.
//!
//! Flags stay loose at the clap level (everything optional, mode as a
//! string) so `-h` always wins and every validation failure lands in one
//! place with the same help-and-exit-2 treatment.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// copyswitchcfg -- move switch-port configuration between organizations
#[derive(Debug, Parser)]
#[command(
    name = "copyswitchcfg",
    version,
    about = "Migrate switch-port configuration of one organization to another",
    long_about = "Migrate switch-port configuration of one organization to another.\n\n\
        Export reads every switch port in the organization into a file; import\n\
        replays that file onto an organization with the same network names and\n\
        device serials. Only devices that are part of a network are processed.",
    after_help = "If -m is not given, export mode is assumed. The two valid forms are:\n  \
        -m export   write switch-port configuration of all switches in the org to <FILE>\n  \
        -m import   apply all switch-port configuration in <FILE> to the org\n\n\
        Names are case-sensitive. Quote arguments that contain spaces.\n\
        Every informational line starts with '@' to make script chaining easier.",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Dashboard API key [env: MERAKI_DASHBOARD_API_KEY]
    #[arg(short = 'k', long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Organization name (exact match)
    #[arg(short = 'o', long = "org", value_name = "ORG")]
    pub org: Option<String>,

    /// Mode of operation: export or import
    #[arg(short = 'm', long = "mode", value_name = "MODE", default_value = "export")]
    pub mode: String,

    /// Transfer file to write (export) or read (import)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print help
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Dashboard API base URL
    #[arg(long, env = "SWCFG_BASE_URL", value_name = "URL", hide_env = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SWCFG_TIMEOUT", value_name = "SECS", hide_env = true)]
    pub timeout: Option<u64>,
}
