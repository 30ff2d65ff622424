// ── Dashboard capability interface ──
//
// The five calls the export and import engines make. `DashboardClient`
// serves them over HTTP; unit tests use an in-memory organization.

use std::future::Future;

use swcfg_api::DashboardClient;
use swcfg_api::types::SwitchPortUpdate;

use crate::error::CoreError;
use crate::model::{Device, Network, Organization, SwitchPort};

/// Operations the migration needs from the management API.
pub trait DashboardApi {
    fn list_organizations(&self) -> impl Future<Output = Result<Vec<Organization>, CoreError>>;

    /// Every network of the organization, all pages.
    fn list_networks(
        &self,
        organization_id: &str,
    ) -> impl Future<Output = Result<Vec<Network>, CoreError>>;

    fn list_devices(&self, network_id: &str)
    -> impl Future<Output = Result<Vec<Device>, CoreError>>;

    fn list_switch_ports(
        &self,
        serial: &str,
    ) -> impl Future<Output = Result<Vec<SwitchPort>, CoreError>>;

    fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> impl Future<Output = Result<(), CoreError>>;
}

impl DashboardApi for DashboardClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>, CoreError> {
        let orgs = DashboardClient::list_organizations(self).await?;
        Ok(orgs.into_iter().map(Organization::from).collect())
    }

    async fn list_networks(&self, organization_id: &str) -> Result<Vec<Network>, CoreError> {
        let networks = self.list_organization_networks(organization_id).await?;
        Ok(networks.into_iter().map(Network::from).collect())
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<Device>, CoreError> {
        let devices = self.list_network_devices(network_id).await?;
        Ok(devices.into_iter().map(Device::from).collect())
    }

    async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, CoreError> {
        let ports = self.list_device_switch_ports(serial).await?;
        Ok(ports.into_iter().map(SwitchPort::from).collect())
    }

    async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> Result<(), CoreError> {
        self.update_device_switch_port(serial, port_id, update)
            .await?;
        Ok(())
    }
}
