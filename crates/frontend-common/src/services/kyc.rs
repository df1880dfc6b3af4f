//! KYC verification queues for the admin console

use super::{describe, session_client};
use alshifa_api::AuthenticatedClient;
use alshifa_api::types::{DoctorKycRecord, KycActionResponse, KycStatus, OrganizationKycRecord};

const ADMIN_ONLY: &str =
    "Your session does not allow this action. Please sign in as an administrator.";

/// What is being verified
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KycSubject {
    Doctor,
    Organization,
}

/// Queue fetches and approve/reject calls; failures come back as display strings
#[derive(Clone, Default)]
pub struct KycService {
    client: Option<AuthenticatedClient>,
}

impl KycService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `client` instead of the signed-in session's client
    pub fn with_client(client: AuthenticatedClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub async fn doctor_queue(&self, status: KycStatus) -> Result<Vec<DoctorKycRecord>, String> {
        let client = session_client(&self.client)?;
        client.doctor_kyc_queue(status).await.map_err(|e| {
            tracing::warn!(status = status.as_str(), error = %e, "doctor KYC queue fetch failed");
            describe(&e, ADMIN_ONLY)
        })
    }

    pub async fn organization_queue(
        &self,
        status: KycStatus,
    ) -> Result<Vec<OrganizationKycRecord>, String> {
        let client = session_client(&self.client)?;
        client.organization_kyc_queue(status).await.map_err(|e| {
            tracing::warn!(status = status.as_str(), error = %e, "organization KYC queue fetch failed");
            describe(&e, ADMIN_ONLY)
        })
    }

    pub async fn approve(
        &self,
        subject: KycSubject,
        id: &str,
    ) -> Result<KycActionResponse, String> {
        let client = session_client(&self.client)?;

        let result = match subject {
            KycSubject::Doctor => client.approve_doctor(id).await,
            KycSubject::Organization => client.approve_organization(id).await,
        };

        result.map_err(|e| {
            tracing::warn!(?subject, id, error = %e, "KYC approval failed");
            describe(&e, ADMIN_ONLY)
        })
    }

    pub async fn reject(
        &self,
        subject: KycSubject,
        id: &str,
        reason: &str,
    ) -> Result<KycActionResponse, String> {
        let client = session_client(&self.client)?;

        let result = match subject {
            KycSubject::Doctor => client.reject_doctor(id, reason).await,
            KycSubject::Organization => client.reject_organization(id, reason).await,
        };

        result.map_err(|e| {
            tracing::warn!(?subject, id, error = %e, "KYC rejection failed");
            describe(&e, ADMIN_ONLY)
        })
    }
}
