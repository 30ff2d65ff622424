// ── Transfer file document ──
//
// JSON shape:
// [{"network": "HQ", "nwports": [{"serial": "Q2XX-...", "devports": [{...port...}]}]}]

use serde::{Deserialize, Serialize};

use super::port::SwitchPort;

/// Ports of one device, keyed by serial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePorts {
    pub serial: String,
    #[serde(rename = "devports")]
    pub ports: Vec<SwitchPort>,
}

/// Devices of one network, keyed by network name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkPorts {
    #[serde(rename = "network")]
    pub network_name: String,
    #[serde(rename = "nwports")]
    pub devices: Vec<DevicePorts>,
}

/// The whole exported document: networks in export order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferFile {
    pub networks: Vec<NetworkPorts>,
}

impl TransferFile {
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Number of port records across all networks and devices.
    pub fn port_count(&self) -> usize {
        self.networks
            .iter()
            .flat_map(|n| &n.devices)
            .map(|d| d.ports.len())
            .sum()
    }
}
