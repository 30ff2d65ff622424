//! Dashboard API request and response types for the endpoints this tool calls.
//!
//! All types match the JSON bodies of `/api/v1/` endpoints.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Organizations ────────────────────────────────────────────────────

/// Organization overview from `GET /organizations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

// ── Networks ─────────────────────────────────────────────────────────

/// Network overview from `GET /organizations/{organizationId}/networks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub product_types: Vec<String>,
}

// ── Devices ──────────────────────────────────────────────────────────

/// Device in a network from `GET /networks/{networkId}/devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub serial: String,
    /// Model string, e.g. `MS120-8` or `MX65`. Missing on some virtual devices.
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
}

// ── Switch ports ─────────────────────────────────────────────────────

/// Switch port configuration from `GET /devices/{serial}/switch/ports`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPortResponse {
    pub port_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub poe_enabled: Option<bool>,
    /// `access`, `trunk`, or `stack`.
    #[serde(default, rename = "type")]
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
    /// `disabled`, `root guard`, `bpdu guard` or `loop guard`.
    #[serde(default)]
    pub stp_guard: Option<String>,
    #[serde(default)]
    pub access_policy_type: Option<String>,
    #[serde(default)]
    pub access_policy_number: Option<u32>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Body of `PUT /devices/{serial}/switch/ports/{portId}`.
///
/// Every field except `accessPolicyNumber` is always sent, `null` included.
/// The Dashboard only accepts a policy number next to a restrictive
/// access policy, so that one is omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPortUpdate {
    pub isolation_enabled: Option<bool>,
    pub rstp_enabled: Option<bool>,
    pub enabled: bool,
    pub stp_guard: Option<String>,
    pub access_policy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_policy_number: Option<u32>,
    #[serde(rename = "type")]
    pub port_type: String,
    pub allowed_vlans: Option<String>,
    pub poe_enabled: Option<bool>,
    pub name: Option<String>,
    pub tags: Vec<String>,
    pub vlan: Option<u32>,
    pub voice_vlan: Option<u32>,
}

// ── Errors ───────────────────────────────────────────────────────────

/// Error body shape: `{"errors": ["..."]}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}
