//! Export mode: organization to transfer file.

use std::io::Write;
use std::path::Path;

use tracing::info;

use swcfg_core::transfer::open_for_write;
use swcfg_core::{Console, DashboardApi, Network, export_switch_ports};

use crate::error::CliError;

pub async fn handle<A: DashboardApi, W: Write>(
    api: &A,
    networks: &[Network],
    file: &Path,
    console: &mut Console<W>,
) -> Result<(), CliError> {
    // Fail on an unwritable path before any port is fetched.
    let writer = open_for_write(file)?;

    let transfer = export_switch_ports(api, networks, console).await?;
    writer.write(&transfer)?;

    info!(
        networks = transfer.networks.len(),
        ports = transfer.port_count(),
        path = %file.display(),
        "export written"
    );
    Ok(())
}
