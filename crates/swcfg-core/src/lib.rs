// swcfg-core: Switch-port migration engine between swcfg-api and the copyswitchcfg binary.

pub mod api;
pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod resolve;
pub mod transfer;

#[cfg(test)]
pub(crate) mod fake;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::DashboardApi;
pub use config::{MigrationConfig, Mode};
pub use console::Console;
pub use error::CoreError;
pub use export::export_switch_ports;
pub use import::{ImportSummary, build_port_update, import_switch_ports};
pub use resolve::{resolve_networks, resolve_organization};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Device, DevicePorts, Network, NetworkPorts, Organization, SwitchPort, TransferFile,
    is_switch_model, is_usable_port_list,
};
pub use swcfg_api::types::SwitchPortUpdate;
