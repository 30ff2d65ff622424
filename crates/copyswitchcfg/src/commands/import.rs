//! Import mode: transfer file to organization.

use std::io::Write;
use std::path::Path;

use tracing::info;

use swcfg_core::transfer::read_transfer_file;
use swcfg_core::{Console, DashboardApi, Network, import_switch_ports};

use crate::error::CliError;

pub async fn handle<A: DashboardApi, W: Write>(
    api: &A,
    networks: &[Network],
    file: &Path,
    console: &mut Console<W>,
) -> Result<(), CliError> {
    let transfer = read_transfer_file(file)?;

    let summary = import_switch_ports(api, &transfer, networks, console).await?;
    info!(
        devices = summary.devices,
        ports = summary.ports,
        "import complete"
    );

    console.info("End of script.");
    Ok(())
}
