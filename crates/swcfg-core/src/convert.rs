// ── API-to-domain type conversions ──
//
// Bridges raw `swcfg_api` response types into canonical `swcfg_core::model`
// domain types. The port conversion is field-for-field so nothing the API
// returned is lost on the way into the transfer file.

use swcfg_api::types::{DeviceResponse, NetworkResponse, OrganizationResponse, SwitchPortResponse};

use crate::model::{Device, Network, Organization, SwitchPort};

impl From<OrganizationResponse> for Organization {
    fn from(o: OrganizationResponse) -> Self {
        Organization {
            id: o.id,
            name: o.name,
        }
    }
}

impl From<NetworkResponse> for Network {
    fn from(n: NetworkResponse) -> Self {
        Network {
            id: n.id,
            name: n.name,
        }
    }
}

impl From<DeviceResponse> for Device {
    fn from(d: DeviceResponse) -> Self {
        Device {
            serial: d.serial,
            model: d.model,
        }
    }
}

impl From<SwitchPortResponse> for SwitchPort {
    fn from(p: SwitchPortResponse) -> Self {
        SwitchPort {
            port_id: p.port_id,
            name: p.name,
            tags: p.tags,
            enabled: p.enabled,
            poe_enabled: p.poe_enabled,
            port_type: p.port_type,
            vlan: p.vlan,
            voice_vlan: p.voice_vlan,
            allowed_vlans: p.allowed_vlans,
            isolation_enabled: p.isolation_enabled,
            rstp_enabled: p.rstp_enabled,
            stp_guard: p.stp_guard,
            access_policy_type: p.access_policy_type,
            access_policy_number: p.access_policy_number,
            extra: p.extra,
        }
    }
}
