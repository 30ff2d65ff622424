// ── Organization & network resolution ──

use tracing::{debug, info};

use crate::api::DashboardApi;
use crate::error::CoreError;
use crate::model::{Network, Organization};

/// Find the organization whose name matches exactly (case-sensitive).
///
/// When the key sees several organizations with the same name, the last
/// one listed wins.
pub async fn resolve_organization<A: DashboardApi>(
    api: &A,
    name: &str,
) -> Result<Organization, CoreError> {
    let orgs = api.list_organizations().await?;
    debug!(visible = orgs.len(), "organizations listed");

    let org = orgs
        .into_iter()
        .rfind(|org| org.name == name)
        .ok_or_else(|| CoreError::OrganizationNotFound { name: name.into() })?;

    info!(id = %org.id, name = %org.name, "organization resolved");
    Ok(org)
}

/// List every network of the organization.
///
/// An empty list, or one whose first entry has no id, is unusable.
pub async fn resolve_networks<A: DashboardApi>(
    api: &A,
    org: &Organization,
) -> Result<Vec<Network>, CoreError> {
    let networks = api.list_networks(&org.id).await?;

    match networks.first() {
        Some(first) if !first.id.is_empty() && first.id != "null" => {
            info!(count = networks.len(), "networks resolved");
            Ok(networks)
        }
        _ => Err(CoreError::NetworkListUnusable {
            organization: org.name.clone(),
        }),
    }
}
