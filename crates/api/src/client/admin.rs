//! Admin console endpoints (KYC verification queues)

use super::{AuthenticatedClient, error::ClientError};
use crate::types::{
    AdminDashboardStats, DoctorKycRecord, KycActionResponse, KycStatus, OrganizationKycRecord,
};
use reqwest::Method;

impl AuthenticatedClient {
    pub async fn admin_dashboard(&self) -> Result<AdminDashboardStats, ClientError> {
        let req = self.request(Method::GET, "/admin/dashboard");
        self.execute(req).await
    }

    /// Doctors awaiting (or past) KYC review
    pub async fn doctor_kyc_queue(
        &self,
        status: KycStatus,
    ) -> Result<Vec<DoctorKycRecord>, ClientError> {
        let req = self
            .request(Method::GET, "/admin/kyc/doctors")
            .query(&[("status", status.as_str())]);
        self.execute(req).await
    }

    pub async fn approve_doctor(&self, doctor_id: &str) -> Result<KycActionResponse, ClientError> {
        let req = self.request(
            Method::PUT,
            &format!("/admin/kyc/doctors/{doctor_id}/approve"),
        );
        self.execute(req).await
    }

    pub async fn reject_doctor(
        &self,
        doctor_id: &str,
        reason: &str,
    ) -> Result<KycActionResponse, ClientError> {
        let req = self
            .request(Method::PUT, &format!("/admin/kyc/doctors/{doctor_id}/reject"))
            .query(&[("reason", reason)]);
        self.execute(req).await
    }

    /// Hospitals awaiting (or past) KYC review
    pub async fn organization_kyc_queue(
        &self,
        status: KycStatus,
    ) -> Result<Vec<OrganizationKycRecord>, ClientError> {
        let req = self
            .request(Method::GET, "/admin/kyc/organizations")
            .query(&[("status", status.as_str())]);
        self.execute(req).await
    }

    pub async fn approve_organization(
        &self,
        hospital_id: &str,
    ) -> Result<KycActionResponse, ClientError> {
        let req = self.request(
            Method::PUT,
            &format!("/admin/kyc/organizations/{hospital_id}/approve"),
        );
        self.execute(req).await
    }

    pub async fn reject_organization(
        &self,
        hospital_id: &str,
        reason: &str,
    ) -> Result<KycActionResponse, ClientError> {
        let req = self
            .request(
                Method::PUT,
                &format!("/admin/kyc/organizations/{hospital_id}/reject"),
            )
            .query(&[("reason", reason)]);
        self.execute(req).await
    }
}
