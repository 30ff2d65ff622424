// ── Switch port domain types ──

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Access policy type meaning "no restrictive policy attached".
pub const ACCESS_POLICY_OPEN: &str = "Open";

/// Port id the Dashboard reports when a device has no usable port list.
pub const NULL_PORT_ID: &str = "null";

/// Configuration of one switch port, as exported and re-imported.
///
/// Field names are the Dashboard's camelCase keys so the transfer file can
/// be read against the API documentation. Keys this tool does not model are
/// carried in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPort {
    pub port_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub enabled: bool,
    #[serde(default)]
    pub poe_enabled: Option<bool>,
    #[serde(rename = "type")]
    pub port_type: String,
    #[serde(default)]
    pub vlan: Option<u32>,
    #[serde(default)]
    pub voice_vlan: Option<u32>,
    #[serde(default)]
    pub allowed_vlans: Option<String>,
    #[serde(default)]
    pub isolation_enabled: Option<bool>,
    #[serde(default)]
    pub rstp_enabled: Option<bool>,
    #[serde(default)]
    pub stp_guard: Option<String>,
    #[serde(default)]
    pub access_policy_type: Option<String>,
    /// Only meaningful next to a restrictive `access_policy_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_policy_number: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl SwitchPort {
    /// Whether a restrictive access policy is attached.
    ///
    /// A missing policy type counts as open.
    pub fn has_restrictive_policy(&self) -> bool {
        self.access_policy_type
            .as_deref()
            .is_some_and(|policy| policy != ACCESS_POLICY_OPEN)
    }
}

/// Whether a fetched port list is worth exporting.
///
/// Empty lists and lists whose first entry carries the `"null"` port id
/// are treated the same: the device is skipped.
pub fn is_usable_port_list(ports: &[SwitchPort]) -> bool {
    ports
        .first()
        .is_some_and(|first| first.port_id != NULL_PORT_ID)
}
