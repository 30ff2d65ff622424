// ── Domain model ──
//
// Transient records for one run: what the resolver finds, what export
// collects, and what the transfer file carries between the two modes.

mod device;
mod organization;
mod port;
mod transfer;

pub use device::{Device, SWITCH_MODEL_PREFIX, is_switch_model};
pub use organization::{Network, Organization};
pub use port::{ACCESS_POLICY_OPEN, NULL_PORT_ID, SwitchPort, is_usable_port_list};
pub use transfer::{DevicePorts, NetworkPorts, TransferFile};
