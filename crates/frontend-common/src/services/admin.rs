//! Admin console overview

use super::{describe, session_client};
use alshifa_api::AuthenticatedClient;
use alshifa_api::types::AdminDashboardStats;

#[derive(Clone, Default)]
pub struct AdminService {
    client: Option<AuthenticatedClient>,
}

impl AdminService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: AuthenticatedClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub async fn dashboard(&self) -> Result<AdminDashboardStats, String> {
        let client = session_client(&self.client)?;
        client.admin_dashboard().await.map_err(|e| {
            tracing::warn!(error = %e, "admin dashboard fetch failed");
            describe(&e, "Sign in as an administrator to see live figures.")
        })
    }
}
