//! Doctor workspace: today's dashboard and schedule settings

use super::{describe, session_client};
use alshifa_api::AuthenticatedClient;
use alshifa_api::types::{DoctorDashboard, ScheduleConfig};

const DOCTOR_ONLY: &str = "Your session has expired. Please sign in again.";

#[derive(Clone, Default)]
pub struct DoctorService {
    client: Option<AuthenticatedClient>,
}

impl DoctorService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: AuthenticatedClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub async fn dashboard(&self) -> Result<DoctorDashboard, String> {
        let client = session_client(&self.client)?;
        client.doctor_dashboard().await.map_err(|e| {
            tracing::warn!(error = %e, "doctor dashboard fetch failed");
            describe(&e, DOCTOR_ONLY)
        })
    }

    pub async fn schedule(&self) -> Result<ScheduleConfig, String> {
        let client = session_client(&self.client)?;
        client.schedule_config().await.map_err(|e| {
            tracing::warn!(error = %e, "schedule config fetch failed");
            describe(&e, DOCTOR_ONLY)
        })
    }

    /// Save the schedule; `Ok` carries the backend's confirmation
    pub async fn save_schedule(&self, config: &ScheduleConfig) -> Result<String, String> {
        let client = session_client(&self.client)?;
        match client.update_schedule_config(config).await {
            Ok(response) => {
                tracing::info!("schedule config saved");
                Ok(response.message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "schedule config update failed");
                Err(describe(&e, DOCTOR_ONLY))
            }
        }
    }
}
