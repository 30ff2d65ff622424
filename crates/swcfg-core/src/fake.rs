// In-memory Dashboard for engine tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::json;
use swcfg_api::types::SwitchPortUpdate;

use crate::api::DashboardApi;
use crate::error::CoreError;
use crate::model::{Device, Network, Organization, SwitchPort};

#[derive(Default)]
pub(crate) struct FakeDashboard {
    orgs: Vec<Organization>,
    networks: Vec<(String, Network)>,
    devices: Vec<(String, Device)>,
    ports: HashMap<String, Vec<SwitchPort>>,
    failing_update: Option<(String, String)>,
    pub(crate) port_queries: RefCell<Vec<String>>,
    pub(crate) updates: RefCell<Vec<(String, String, SwitchPortUpdate)>>,
}

impl FakeDashboard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_org(mut self, id: &str, name: &str) -> Self {
        self.orgs.push(Organization {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    pub(crate) fn with_network(mut self, org_id: &str, id: &str, name: &str) -> Self {
        self.networks.push((
            org_id.into(),
            Network {
                id: id.into(),
                name: name.into(),
            },
        ));
        self
    }

    pub(crate) fn with_device(mut self, network_id: &str, serial: &str, model: &str) -> Self {
        self.devices.push((
            network_id.into(),
            Device {
                serial: serial.into(),
                model: model.into(),
            },
        ));
        self
    }

    pub(crate) fn with_ports(mut self, serial: &str, ports: Vec<SwitchPort>) -> Self {
        self.ports.insert(serial.into(), ports);
        self
    }

    pub(crate) fn failing_update(mut self, serial: &str, port_id: &str) -> Self {
        self.failing_update = Some((serial.into(), port_id.into()));
        self
    }
}

impl DashboardApi for FakeDashboard {
    async fn list_organizations(&self) -> Result<Vec<Organization>, CoreError> {
        Ok(self.orgs.clone())
    }

    async fn list_networks(&self, organization_id: &str) -> Result<Vec<Network>, CoreError> {
        Ok(self
            .networks
            .iter()
            .filter(|(org, _)| org == organization_id)
            .map(|(_, n)| n.clone())
            .collect())
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>, CoreError> {
        Ok(self
            .devices
            .iter()
            .filter(|(net, _)| net == network_id)
            .map(|(_, d)| d.clone())
            .collect())
    }

    async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, CoreError> {
        self.port_queries.borrow_mut().push(serial.into());
        Ok(self.ports.get(serial).cloned().unwrap_or_default())
    }

    async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> Result<(), CoreError> {
        if self
            .failing_update
            .as_ref()
            .is_some_and(|(s, p)| s == serial && p == port_id)
        {
            return Err(CoreError::Api {
                message: "Port is stacked".into(),
                status: Some(400),
            });
        }
        self.updates
            .borrow_mut()
            .push((serial.into(), port_id.into(), update.clone()));
        Ok(())
    }
}

/// Access port with the given id, VLAN and access policy.
pub(crate) fn port(port_id: &str, vlan: u32, policy: &str, number: Option<u32>) -> SwitchPort {
    serde_json::from_value(json!({
        "portId": port_id,
        "name": null,
        "tags": [],
        "enabled": true,
        "poeEnabled": true,
        "type": "access",
        "vlan": vlan,
        "voiceVlan": null,
        "allowedVlans": "all",
        "isolationEnabled": false,
        "rstpEnabled": true,
        "stpGuard": "disabled",
        "accessPolicyType": policy,
        "accessPolicyNumber": number,
    }))
    .unwrap_or_else(|e| panic!("invalid test port: {e}"))
}
