//! Organization (hospital admin) endpoints

use super::{AuthenticatedClient, error::ClientError};
use crate::types::{
    MessageResponse, OrganizationDashboardStats, OrganizationDoctor, OrganizationProfileUpdate,
};
use reqwest::Method;

impl AuthenticatedClient {
    pub async fn organization_dashboard(&self) -> Result<OrganizationDashboardStats, ClientError> {
        let req = self.request(Method::GET, "/organization/dashboard");
        self.execute(req).await
    }

    /// Doctors linked to the caller's hospital
    pub async fn organization_doctors(&self) -> Result<Vec<OrganizationDoctor>, ClientError> {
        let req = self.request(Method::GET, "/organization/doctors");
        self.execute(req).await
    }

    /// Update the caller's hospital record
    pub async fn update_organization_profile(
        &self,
        update: &OrganizationProfileUpdate,
    ) -> Result<MessageResponse, ClientError> {
        let req = self
            .request(Method::PUT, "/organization/profile")
            .json(update);
        self.execute(req).await
    }
}
