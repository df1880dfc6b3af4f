//! Organization (hospital admin) pages

use super::{describe, session_client};
use alshifa_api::AuthenticatedClient;
use alshifa_api::types::{OrganizationDashboardStats, OrganizationDoctor, OrganizationProfileUpdate};

const ORGANIZATION_ONLY: &str = "Sign in with an organization account to manage this hospital.";

#[derive(Clone, Default)]
pub struct OrganizationService {
    client: Option<AuthenticatedClient>,
}

impl OrganizationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: AuthenticatedClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub async fn dashboard(&self) -> Result<OrganizationDashboardStats, String> {
        let client = session_client(&self.client)?;
        client.organization_dashboard().await.map_err(|e| {
            tracing::warn!(error = %e, "organization dashboard fetch failed");
            describe(&e, ORGANIZATION_ONLY)
        })
    }

    pub async fn doctors(&self) -> Result<Vec<OrganizationDoctor>, String> {
        let client = session_client(&self.client)?;
        client.organization_doctors().await.map_err(|e| {
            tracing::warn!(error = %e, "organization doctors fetch failed");
            describe(&e, ORGANIZATION_ONLY)
        })
    }

    /// Save profile fields; `Ok` carries the backend's confirmation
    pub async fn update_profile(&self, update: &OrganizationProfileUpdate) -> Result<String, String> {
        let client = session_client(&self.client)?;
        match client.update_organization_profile(update).await {
            Ok(response) => {
                tracing::info!("organization profile saved");
                Ok(response.message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "organization profile update failed");
                Err(describe(&e, ORGANIZATION_ONLY))
            }
        }
    }
}
