//! Doctor workspace endpoints

use super::{AuthenticatedClient, error::ClientError};
use crate::types::{DoctorDashboard, MessageResponse, ScheduleConfig};
use reqwest::Method;

impl AuthenticatedClient {
    /// Today's appointments and headline numbers for the signed-in doctor
    pub async fn doctor_dashboard(&self) -> Result<DoctorDashboard, ClientError> {
        let req = self.request(Method::GET, "/doctor/dashboard");
        self.execute(req).await
    }

    pub async fn schedule_config(&self) -> Result<ScheduleConfig, ClientError> {
        let req = self.request(Method::GET, "/doctor/schedule-config");
        self.execute(req).await
    }

    pub async fn update_schedule_config(
        &self,
        config: &ScheduleConfig,
    ) -> Result<MessageResponse, ClientError> {
        tracing::debug!(
            slot = config.slot_duration,
            gap = config.break_duration,
            "updating schedule config"
        );
        let req = self
            .request(Method::PUT, "/doctor/schedule-config")
            .json(config);
        self.execute(req).await
    }
}
