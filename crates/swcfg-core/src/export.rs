// ── Export engine ──
//
// Walks networks -> devices -> ports strictly in order and builds the
// transfer document. Non-switch devices and devices without a usable port
// list are skipped quietly; networks left without ports are dropped with a
// warning.

use std::io::Write;

use tracing::{debug, info, trace};

use crate::api::DashboardApi;
use crate::console::Console;
use crate::error::CoreError;
use crate::model::{DevicePorts, Network, NetworkPorts, TransferFile, is_usable_port_list};

/// Collect the switch-port configuration of every network.
pub async fn export_switch_ports<A: DashboardApi, W: Write>(
    api: &A,
    networks: &[Network],
    console: &mut Console<W>,
) -> Result<TransferFile, CoreError> {
    let mut transfer = TransferFile::default();

    for network in networks {
        let mut devices = Vec::new();

        for device in api.list_devices(&network.id).await? {
            if !device.is_switch() {
                trace!(serial = %device.serial, model = %device.model, "not a switch");
                continue;
            }
            debug!(serial = %device.serial, model = %device.model, "fetching switch ports");

            let ports = api.list_switch_ports(&device.serial).await?;
            if is_usable_port_list(&ports) {
                devices.push(DevicePorts {
                    serial: device.serial,
                    ports,
                });
            } else {
                debug!(serial = %device.serial, "no usable ports, skipping device");
            }
        }

        if devices.is_empty() {
            console.warning(format_args!(
                "Skipping network \"{}\": No switchports",
                network.name
            ));
        } else {
            info!(network = %network.name, devices = devices.len(), "network exported");
            transfer.networks.push(NetworkPorts {
                network_name: network.name.clone(),
                devices,
            });
        }
    }

    Ok(transfer)
}
