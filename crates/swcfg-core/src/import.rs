// ── Import engine ──
//
// Replays a transfer file onto the destination organization, one port
// update at a time. Every payload is built before the first update is
// sent. An API failure mid-run aborts and reports how far it got.

use std::io::Write;

use swcfg_api::types::SwitchPortUpdate;
use tracing::debug;

use crate::api::DashboardApi;
use crate::console::Console;
use crate::error::CoreError;
use crate::model::{Network, SwitchPort, TransferFile};

/// Outcome of a completed import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub devices: usize,
    pub ports: usize,
}

/// Build the update payload for one stored port.
///
/// The twelve common attributes are always carried; `accessPolicyNumber`
/// is added only when a restrictive access policy is attached.
pub fn build_port_update(serial: &str, port: &SwitchPort) -> Result<SwitchPortUpdate, CoreError> {
    let access_policy_number = if port.has_restrictive_policy() {
        let number = port
            .access_policy_number
            .ok_or_else(|| CoreError::MissingAccessPolicyNumber {
                serial: serial.into(),
                port_id: port.port_id.clone(),
                policy: port.access_policy_type.clone().unwrap_or_default(),
            })?;
        Some(number)
    } else {
        None
    };

    Ok(SwitchPortUpdate {
        isolation_enabled: port.isolation_enabled,
        rstp_enabled: port.rstp_enabled,
        enabled: port.enabled,
        stp_guard: port.stp_guard.clone(),
        access_policy_type: port.access_policy_type.clone(),
        access_policy_number,
        port_type: port.port_type.clone(),
        allowed_vlans: port.allowed_vlans.clone(),
        poe_enabled: port.poe_enabled,
        name: port.name.clone(),
        tags: port.tags.clone(),
        vlan: port.vlan,
        voice_vlan: port.voice_vlan,
    })
}

/// Apply every port in the transfer file to the destination organization.
///
/// Devices are addressed by serial; `destination_networks` is only used to
/// warn about network names the destination does not have.
pub async fn import_switch_ports<A: DashboardApi, W: Write>(
    api: &A,
    transfer: &TransferFile,
    destination_networks: &[Network],
    console: &mut Console<W>,
) -> Result<ImportSummary, CoreError> {
    let plan = plan_updates(transfer)?;
    let mut summary = ImportSummary::default();

    for (network, devices) in transfer.networks.iter().zip(&plan) {
        debug!(network = %network.network_name, "network record");
        if !destination_networks
            .iter()
            .any(|n| n.name == network.network_name)
        {
            console.warning(format_args!(
                "Network \"{}\" not found in destination organization",
                network.network_name
            ));
        }

        for (serial, updates) in devices {
            debug!(%serial, "device record");
            console.info(format_args!("INFO: Configuring device {serial}"));

            for (port_id, update) in updates {
                debug!(%serial, %port_id, "port record");
                api.update_switch_port(serial, port_id, update)
                    .await
                    .map_err(|source| CoreError::ImportAborted {
                        serial: serial.clone(),
                        port_id: port_id.clone(),
                        applied: summary.ports,
                        source: Box::new(source),
                    })?;
                summary.ports += 1;
            }
            summary.devices += 1;
        }
    }

    Ok(summary)
}

type DevicePlan = (String, Vec<(String, SwitchPortUpdate)>);

/// Payloads per network, per device, in file order.
fn plan_updates(transfer: &TransferFile) -> Result<Vec<Vec<DevicePlan>>, CoreError> {
    let mut plan = Vec::with_capacity(transfer.networks.len());
    for network in &transfer.networks {
        let mut devices = Vec::with_capacity(network.devices.len());
        for device in &network.devices {
            let updates = device
                .ports
                .iter()
                .map(|port| {
                    build_port_update(&device.serial, port)
                        .map(|update| (port.port_id.clone(), update))
                })
                .collect::<Result<Vec<_>, _>>()?;
            devices.push((device.serial.clone(), updates));
        }
        plan.push(devices);
    }
    Ok(plan)
}
